// ==========================================
// Kashi Kravings Dashboard - Row Source Contract
// ==========================================
// The sales sheet is the source of truth; the transport that reads
// it (Google Sheets API) lives outside this crate. The engine only
// sees this seam: raw string rows with the header already stripped.
// ==========================================

use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

/// Raw cells of one data row, in sheet column order.
pub type RawRow = Vec<String>;

/// Source of raw sales rows.
///
/// A failed fetch must surface as `Err` - an empty dataset is a
/// legitimate `Ok(vec![])` and the two are never conflated. The call
/// is blocking I/O from the engine's point of view; retry/backoff, if
/// wanted, belongs to the transport implementation, not the engine.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch all data rows (header row already stripped).
    async fn fetch_rows(&self) -> RepositoryResult<Vec<RawRow>>;
}
