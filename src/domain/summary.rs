// ==========================================
// Kashi Kravings Dashboard - Aggregate Views
// ==========================================
// Derived summary shapes consumed by the dashboard frontend. All of
// these are produced by the engine aggregators from one canonical
// record set; none are ever mutated in place.
// ==========================================

use crate::domain::product::{Flavor, Size};
use crate::domain::sales::SalesRecord;
use serde::{Deserialize, Serialize};

/// One entry per distinct date present in the record set.
///
/// `store_count` is a visit count (one per contributing record), not
/// the number of distinct stores: a store submitting twice on one day
/// counts twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: String,
    pub total_revenue: f64,
    pub total_collection: f64,
    pub total_units: f64,
    pub store_count: u32,
    #[serde(rename = "totalTSOs")]
    pub total_tsos: f64,
    pub total_sample_given: f64,
    pub total_sample_consumed: f64,
    pub total_promotion_hours: f64,
}

/// One entry per distinct store code present in the record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub store_code: String,
    pub store_name: String,
    pub total_revenue: f64,
    pub total_collection: f64,
    pub total_units: f64,
    /// Unpaid remainder, always total_revenue - total_collection
    pub outstanding: f64,
}

/// Units sold for one catalogue SKU. Zero-unit SKUs are dropped from
/// the aggregated output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub product_name: String,
    pub total_units: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<Flavor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_gift_box: bool,
}

/// The full computed dataset: canonical records plus every aggregate
/// the dashboard needs. Built fresh on each cache miss and replaced
/// wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub sales_records: Vec<SalesRecord>,
    pub total_revenue: f64,
    pub total_collection: f64,
    pub total_outstanding: f64,
    pub total_units: f64,
    pub stores_active_today: usize,
    pub daily_summaries: Vec<DailySummary>,
    pub store_summaries: Vec<StoreSummary>,
    pub product_summaries: Vec<ProductSummary>,
    /// totalCollection / totalRevenue * 100; 0 when revenue is 0
    pub collection_rate: f64,
    /// RFC 3339 timestamp of when this dataset was computed
    pub last_updated: String,
}
