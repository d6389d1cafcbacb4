// ==========================================
// Kashi Kravings Dashboard - Mock Row Source
// ==========================================
// Synthetic submission rows for development and for the API-layer
// fallback when the live sheet is unreachable. Rows are emitted in
// the same messy shapes the real sheet produces (mixed date formats,
// rupee-glyph numbers) so the full normalization pipeline is
// exercised, not bypassed.
// ==========================================

use crate::repository::error::RepositoryResult;
use crate::repository::row_source::{RawRow, RowSource};
use crate::domain::store::STORES;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Days of history the mock source generates, ending today.
const MOCK_HISTORY_DAYS: i64 = 30;

/// Seeded generator of synthetic sales rows.
pub struct MockRowSource {
    seed: u64,
}

impl MockRowSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generate the synthetic rows. Deterministic per seed and day.
    pub fn generate_rows(&self) -> Vec<RawRow> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let today = Utc::now().date_naive();
        let mut rows = Vec::new();

        for day_offset in 0..MOCK_HISTORY_DAYS {
            let date = today - Duration::days(day_offset);
            let records_today = rng.gen_range(3..7);

            for _ in 0..records_today {
                let (store_code, _) = STORES[rng.gen_range(0..STORES.len())];
                let sale_value: i64 = rng.gen_range(1000..6000);
                let collection = (sale_value as f64 * rng.gen_range(0.7..1.0)) as i64;

                // Alternate date shapes to mimic real form history
                let date_cell = if day_offset % 2 == 0 {
                    format!("{}/{}/{}", date.format("%-m"), date.format("%-d"), date.format("%Y"))
                } else {
                    date.format("%Y-%m-%d").to_string()
                };

                rows.push(vec![
                    format!("{} {}:00:00", date_cell, rng.gen_range(9..21)),
                    date_cell,
                    store_code.to_string(),
                    rng.gen_range(0..10).to_string(),
                    rng.gen_range(0..10).to_string(),
                    rng.gen_range(0..10).to_string(),
                    rng.gen_range(0..15).to_string(),
                    rng.gen_range(0..15).to_string(),
                    rng.gen_range(0..15).to_string(),
                    rng.gen_range(0..3).to_string(),
                    rng.gen_range(0..2).to_string(),
                    format!("₹{}", sale_value),
                    collection.to_string(),
                    rng.gen_range(0..5).to_string(),
                    rng.gen_range(1..4).to_string(),
                    rng.gen_range(1..5).to_string(),
                    rng.gen_range(0..3).to_string(),
                ]);
            }
        }

        rows
    }
}

impl Default for MockRowSource {
    fn default() -> Self {
        Self::new(0)
    }
}

#[async_trait]
impl RowSource for MockRowSource {
    async fn fetch_rows(&self) -> RepositoryResult<Vec<RawRow>> {
        Ok(self.generate_rows())
    }
}
