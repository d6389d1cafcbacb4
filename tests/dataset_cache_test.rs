// ==========================================
// Kashi Kravings Dashboard - Dataset Cache Integration
// ==========================================
// TTL behaviour, forced refresh, failure semantics and the
// mutual-exclusion guarantee, exercised through a scripted source.
// ==========================================


use async_trait::async_trait;
use kk_dashboard::engine::DatasetCache;
use kk_dashboard::repository::error::{RepositoryError, RepositoryResult};
use kk_dashboard::repository::{RawRow, RowSource};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use test_helpers::raw_row;

/// Source that counts fetches and can be switched into failure mode.
struct ScriptedSource {
    fetches: AtomicUsize,
    failing: AtomicBool,
}

impl ScriptedSource {
    fn new() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RowSource for ScriptedSource {
    async fn fetch_rows(&self) -> RepositoryResult<Vec<RawRow>> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::RowFetchError("quota exceeded".into()));
        }
        // Revenue varies per fetch so dataset generations are telling
        Ok(vec![raw_row(
            "2026-02-05",
            "KK-TRM-01",
            ["1", "0", "0", "0", "0", "0", "0", "0"],
            &format!("{}", 1000 * (n + 1)),
            "500",
        )])
    }
}

#[tokio::test]
async fn cached_dataset_served_within_ttl() {
    let source = Arc::new(ScriptedSource::new());
    let cache = DatasetCache::new(source.clone(), Duration::from_secs(300));

    let first = cache.get(false).await.unwrap();
    let second = cache.get(false).await.unwrap();

    assert_eq!(source.fetch_count(), 1);
    assert_eq!(first.total_revenue, 1000.0);
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn force_refresh_recomputes_and_replaces_wholesale() {
    let source = Arc::new(ScriptedSource::new());
    let cache = DatasetCache::new(source.clone(), Duration::from_secs(300));

    let first = cache.get(false).await.unwrap();
    let refreshed = cache.get(true).await.unwrap();

    assert_eq!(source.fetch_count(), 2);
    assert_eq!(first.total_revenue, 1000.0); // old dataset untouched
    assert_eq!(refreshed.total_revenue, 2000.0);
}

#[tokio::test]
async fn expired_ttl_triggers_recompute() {
    let source = Arc::new(ScriptedSource::new());
    let cache = DatasetCache::new(source.clone(), Duration::from_millis(20));

    cache.get(false).await.unwrap();
    tokio::time::sleep(Duration::from_millis(40)).await;
    let second = cache.get(false).await.unwrap();

    assert_eq!(source.fetch_count(), 2);
    assert_eq!(second.total_revenue, 2000.0);
}

#[tokio::test]
async fn fetch_failure_propagates_and_preserves_cache() {
    let source = Arc::new(ScriptedSource::new());
    let cache = DatasetCache::new(source.clone(), Duration::from_secs(300));

    let cached = cache.get(false).await.unwrap();

    source.failing.store(true, Ordering::SeqCst);
    let result = cache.get(true).await;
    assert!(matches!(result, Err(RepositoryError::RowFetchError(_))));

    // The pre-failure dataset is still served afterwards
    let after = cache.get(false).await.unwrap();
    assert!(Arc::ptr_eq(&cached, &after));
}

#[tokio::test]
async fn cold_cache_failure_then_recovery() {
    let source = Arc::new(ScriptedSource::new());
    source.failing.store(true, Ordering::SeqCst);
    let cache = DatasetCache::new(source.clone(), Duration::from_secs(300));

    assert!(cache.get(false).await.is_err());

    source.failing.store(false, Ordering::SeqCst);
    let data = cache.get(false).await.unwrap();
    assert_eq!(data.sales_records.len(), 1);
}

#[tokio::test]
async fn concurrent_cold_reads_perform_one_fetch() {
    let source = Arc::new(ScriptedSource::new());
    let cache = Arc::new(DatasetCache::new(source.clone(), Duration::from_secs(300)));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move { cache.get(false).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn range_query_reaggregates_without_refetching() {
    let source = Arc::new(ScriptedSource::new());
    let cache = DatasetCache::new(source.clone(), Duration::from_secs(300));

    cache.get(false).await.unwrap();
    let ranged = cache
        .get_for_range("2026-02-01", "2026-02-28")
        .await
        .unwrap();
    let empty = cache
        .get_for_range("2026-03-01", "2026-03-31")
        .await
        .unwrap();

    // Both range queries re-used the cached full dataset
    assert_eq!(source.fetch_count(), 1);
    assert_eq!(ranged.sales_records.len(), 1);
    assert_eq!(empty.sales_records.len(), 0);
    assert_eq!(empty.total_revenue, 0.0);
    assert_eq!(empty.collection_rate, 0.0);
}
