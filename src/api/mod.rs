// ==========================================
// Kashi Kravings Dashboard - API Layer
// ==========================================
// Business interface consumed by the HTTP/cron/notification wrappers
// around this crate. Owns the boundary policies (input validation,
// upstream-failure fallback) but no transport.
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod invoice_api;
pub mod notify_api;

// Re-export the API surface
pub use dashboard_api::{mock_dashboard, DashboardApi};
pub use error::{ApiError, ApiResult};
pub use invoice_api::{InvoiceApi, UploadSummary};
pub use notify_api::{
    format_alert_message, format_daily_summary_message, format_daily_summary_message_at,
    format_inr,
};
