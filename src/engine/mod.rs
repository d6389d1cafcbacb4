// ==========================================
// Kashi Kravings Dashboard - Engine Layer
// ==========================================
// Business rules: aggregation folds, the bounded-staleness dataset
// cache and the invoice ledger merger. The engine owns no transport
// and performs no retries; everything here is triggered
// synchronously by an inbound request.
// ==========================================

pub mod aggregator;
pub mod cache;
pub mod invoice_merger;

// Re-export the engine surface
pub use aggregator::{
    aggregate_daily, aggregate_products, aggregate_stores, build_dashboard_data,
};
pub use cache::{DatasetCache, DEFAULT_CACHE_TTL};
pub use invoice_merger::{build_invoice_data, merge_invoices, MergeCounts};
