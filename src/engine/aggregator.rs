// ==========================================
// Kashi Kravings Dashboard - Aggregators
// ==========================================
// Pure, deterministic folds over a canonical record list. No I/O, no
// shared state: the same input always yields bit-identical output,
// and aggregating a filtered subset is consistent with aggregating
// the superset and discarding the irrelevant buckets.
// ==========================================

use crate::domain::product::{PRODUCTS, PRODUCT_COUNT};
use crate::domain::sales::SalesRecord;
use crate::domain::summary::{DailySummary, DashboardData, ProductSummary, StoreSummary};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Group records by date and sum every daily metric.
///
/// Output is ascending by date; the BTreeMap key order does that for
/// free since ISO date strings sort chronologically. `store_count`
/// counts contributing records (visits), not distinct stores.
pub fn aggregate_daily(records: &[SalesRecord]) -> Vec<DailySummary> {
    let mut daily: BTreeMap<&str, DailySummary> = BTreeMap::new();

    for record in records {
        if record.date.is_empty() {
            continue;
        }

        let entry = daily
            .entry(record.date.as_str())
            .or_insert_with(|| DailySummary {
                date: record.date.clone(),
                total_revenue: 0.0,
                total_collection: 0.0,
                total_units: 0.0,
                store_count: 0,
                total_tsos: 0.0,
                total_sample_given: 0.0,
                total_sample_consumed: 0.0,
                total_promotion_hours: 0.0,
            });

        entry.total_revenue += record.sale_value;
        entry.total_collection += record.collection_received;
        entry.total_units += record.total_units();
        entry.store_count += 1;
        entry.total_tsos += record.num_tso;
        entry.total_sample_given += record.sample_given;
        entry.total_sample_consumed += record.sample_consumed;
        entry.total_promotion_hours += record.promotion_duration;
    }

    daily.into_values().collect()
}

/// Group records by store code and sum revenue/collection/units.
///
/// `outstanding` is recomputed from the running totals after every
/// update instead of being accumulated on its own, so it can never
/// drift from revenue - collection. Output is descending by revenue.
pub fn aggregate_stores(records: &[SalesRecord]) -> Vec<StoreSummary> {
    let mut stores: HashMap<&str, StoreSummary> = HashMap::new();

    for record in records {
        if record.location.is_empty() {
            continue;
        }

        let entry = stores
            .entry(record.location.as_str())
            .or_insert_with(|| StoreSummary {
                store_code: record.location.clone(),
                store_name: record.store_name.clone(),
                total_revenue: 0.0,
                total_collection: 0.0,
                total_units: 0.0,
                outstanding: 0.0,
            });

        entry.total_revenue += record.sale_value;
        entry.total_collection += record.collection_received;
        entry.total_units += record.total_units();
        entry.outstanding = entry.total_revenue - entry.total_collection;
    }

    let mut summaries: Vec<StoreSummary> = stores.into_values().collect();
    summaries.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    summaries
}

/// Fold unit counts into the fixed 8-slot catalogue accumulator.
///
/// Slots that stay at zero across the whole record set are dropped;
/// the remaining entries keep the catalogue's declared order (the
/// default summary consumer depends on it - sort-by-volume is a
/// presentation concern upstream).
pub fn aggregate_products(records: &[SalesRecord]) -> Vec<ProductSummary> {
    let mut totals = [0.0_f64; PRODUCT_COUNT];

    for record in records {
        for (slot, units) in totals.iter_mut().zip(record.unit_counts()) {
            *slot += units;
        }
    }

    PRODUCTS
        .iter()
        .zip(totals)
        .filter(|(_, total)| *total > 0.0)
        .map(|(product, total)| ProductSummary {
            product_name: product.name.to_string(),
            total_units: total,
            flavor: product.flavor,
            size: product.size,
            is_gift_box: product.is_gift_box,
        })
        .collect()
}

/// Assemble the full dashboard dataset from a canonical record list.
///
/// `today` (ISO date) feeds the active-store count; `last_updated` is
/// stamped by the caller so range re-aggregation can keep the parent
/// dataset's timestamp.
pub fn build_dashboard_data(
    records: Vec<SalesRecord>,
    today: &str,
    last_updated: String,
) -> DashboardData {
    let total_revenue: f64 = records.iter().map(|r| r.sale_value).sum();
    let total_collection: f64 = records.iter().map(|r| r.collection_received).sum();
    let total_units: f64 = records.iter().map(|r| r.total_units()).sum();

    let stores_active_today: HashSet<&str> = records
        .iter()
        .filter(|r| r.date == today)
        .map(|r| r.location.as_str())
        .collect();

    let collection_rate = if total_revenue > 0.0 {
        total_collection / total_revenue * 100.0
    } else {
        0.0
    };

    DashboardData {
        daily_summaries: aggregate_daily(&records),
        store_summaries: aggregate_stores(&records),
        product_summaries: aggregate_products(&records),
        total_revenue,
        total_collection,
        total_outstanding: total_revenue - total_collection,
        total_units,
        stores_active_today: stores_active_today.len(),
        collection_rate,
        last_updated,
        sales_records: records,
    }
}
