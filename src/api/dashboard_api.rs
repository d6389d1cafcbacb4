// ==========================================
// Kashi Kravings Dashboard - Dashboard API
// ==========================================
// Query surface over the dataset cache. This is the boundary where
// the silent-default policy ends: a dead upstream is a real error
// here, and the caller chooses between propagating it and serving
// the synthetic fallback dataset.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::summary::DashboardData;
use crate::engine::aggregator::build_dashboard_data;
use crate::engine::cache::DatasetCache;
use crate::importer::build_sales_records;
use crate::repository::mock_source::MockRowSource;
use chrono::{NaiveDate, SecondsFormat, Utc};
use std::sync::Arc;

/// Dashboard query API.
///
/// Owns nothing but the cache handle; construction is injected by
/// whichever service wires the engine together.
pub struct DashboardApi {
    cache: Arc<DatasetCache>,
}

impl DashboardApi {
    pub fn new(cache: Arc<DatasetCache>) -> Self {
        Self { cache }
    }

    /// Full dataset, served from cache within the TTL.
    pub async fn get_dashboard(&self, force_refresh: bool) -> ApiResult<Arc<DashboardData>> {
        Ok(self.cache.get(force_refresh).await?)
    }

    /// Date-filtered dataset, re-aggregated from the full record set.
    ///
    /// Both bounds must be ISO calendar dates with start <= end.
    pub async fn get_dashboard_for_range(
        &self,
        start: &str,
        end: &str,
    ) -> ApiResult<Arc<DashboardData>> {
        validate_iso_date(start)?;
        validate_iso_date(end)?;
        if start > end {
            return Err(ApiError::InvalidInput(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }

        Ok(self.cache.get_for_range(start, end).await?)
    }

    /// Full dataset with the upstream-failure fallback policy applied:
    /// on error, serve a synthetic dataset and report the failure
    /// message alongside it instead of failing the dashboard outright.
    pub async fn get_dashboard_or_fallback(
        &self,
        force_refresh: bool,
    ) -> (Arc<DashboardData>, Option<String>) {
        match self.cache.get(force_refresh).await {
            Ok(data) => (data, None),
            Err(err) => {
                tracing::warn!(error = %err, "row source failed, serving mock dataset");
                (Arc::new(mock_dashboard()), Some(err.to_string()))
            }
        }
    }
}

/// Synthetic dataset built through the normal normalization pipeline.
pub fn mock_dashboard() -> DashboardData {
    let rows = MockRowSource::default().generate_rows();
    let records = build_sales_records(&rows);
    build_dashboard_data(
        records,
        &Utc::now().date_naive().format("%Y-%m-%d").to_string(),
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

fn validate_iso_date(value: &str) -> ApiResult<()> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ApiError::InvalidInput(format!("expected YYYY-MM-DD date, got {:?}", value)))
}
