// ==========================================
// Kashi Kravings Dashboard - Dataset Cache
// ==========================================
// Bounded-staleness read-through cache over the row source. One
// owned instance per service (no global state); the mutex guards the
// whole read-check-recompute-write sequence, so concurrent cold
// reads perform exactly one upstream fetch and the (dataset,
// computed_at) pair can never tear.
// ==========================================

use crate::domain::summary::DashboardData;
use crate::engine::aggregator::build_dashboard_data;
use crate::importer::build_sales_records;
use crate::repository::error::RepositoryResult;
use crate::repository::row_source::RowSource;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Default maximum age at which a cached dataset is still served.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Default)]
struct CacheSlot {
    dataset: Option<Arc<DashboardData>>,
    computed_at: Option<Instant>,
}

impl CacheSlot {
    fn fresh(&self, ttl: Duration) -> Option<Arc<DashboardData>> {
        match (&self.dataset, self.computed_at) {
            (Some(dataset), Some(at)) if at.elapsed() < ttl => Some(Arc::clone(dataset)),
            _ => None,
        }
    }
}

/// Read-through cache for the full dashboard dataset.
pub struct DatasetCache {
    row_source: Arc<dyn RowSource>,
    ttl: Duration,
    slot: Mutex<CacheSlot>,
}

impl DatasetCache {
    pub fn new(row_source: Arc<dyn RowSource>, ttl: Duration) -> Self {
        Self {
            row_source,
            ttl,
            slot: Mutex::new(CacheSlot::default()),
        }
    }

    /// Serve the full dataset.
    ///
    /// Returns the cached dataset while it is younger than the TTL,
    /// unless `force_refresh` is set. Otherwise fetches raw rows,
    /// rebuilds the dataset and replaces the cached value wholesale.
    /// On fetch failure the cached slot is left untouched and the
    /// error propagates - staleness is a trade-off, not an error.
    pub async fn get(&self, force_refresh: bool) -> RepositoryResult<Arc<DashboardData>> {
        let mut slot = self.slot.lock().await;

        if !force_refresh {
            if let Some(cached) = slot.fresh(self.ttl) {
                tracing::debug!("serving cached dataset");
                return Ok(cached);
            }
        }

        let rows = self.row_source.fetch_rows().await?;
        let records = build_sales_records(&rows);
        tracing::info!(
            raw_rows = rows.len(),
            records = records.len(),
            force_refresh,
            "dashboard dataset recomputed"
        );

        let dataset = Arc::new(build_dashboard_data(
            records,
            &today_string(),
            now_timestamp(),
        ));
        slot.dataset = Some(Arc::clone(&dataset));
        slot.computed_at = Some(Instant::now());

        Ok(dataset)
    }

    /// Serve a date-range view, `start <= date <= end` inclusive.
    ///
    /// Always derives from the full dataset (which itself obeys the
    /// TTL rule): the filtered slice is re-aggregated from scratch,
    /// and no separate range-keyed cache exists. The parent dataset's
    /// `last_updated` stamp is kept.
    pub async fn get_for_range(
        &self,
        start: &str,
        end: &str,
    ) -> RepositoryResult<Arc<DashboardData>> {
        let full = self.get(false).await?;

        let filtered: Vec<_> = full
            .sales_records
            .iter()
            .filter(|r| r.date.as_str() >= start && r.date.as_str() <= end)
            .cloned()
            .collect();

        Ok(Arc::new(build_dashboard_data(
            filtered,
            &today_string(),
            full.last_updated.clone(),
        )))
    }

}

/// Today's date as an ISO string (UTC, matching the sheet's dates).
fn today_string() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
