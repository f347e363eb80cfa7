#[cfg(test)]
mod tests {
    use crate::cache::{CacheStatus, RecordCache};
    use crate::fixtures::record;
    use crate::store::mock::MockRecordStore;

    #[test]
    fn test_new_cache_is_empty() {
        let cache = RecordCache::new();
        assert_eq!(cache.status(), CacheStatus::Empty);
        assert!(!cache.is_ready());
        assert!(cache.last_refreshed().is_none());
    }

    #[tokio::test]
    async fn test_refresh_replaces_records() {
        let store = MockRecordStore::with_records(vec![
            record("2026-01-03", "10:00"),
            record("2026-01-05", "19:00"),
        ]);
        let mut cache = RecordCache::from_records(vec![record("2025-12-20", "10:00")]);

        let loaded = cache.refresh(&store).await.unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(cache.len(), 2);
        assert!(cache.is_ready());
        assert!(cache.is_booked("2026-01-05", "19:00"));
        assert!(!cache.is_booked("2025-12-20", "10:00"));
        assert_eq!(store.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_clears_and_marks_unavailable() {
        let store = MockRecordStore::new();
        store.set_fail_fetch(true);
        let mut cache = RecordCache::from_records(vec![record("2026-01-03", "10:00")]);

        let result = cache.refresh(&store).await;

        assert!(result.is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.status(), CacheStatus::Unavailable);
    }

    #[tokio::test]
    async fn test_recovers_after_failure() {
        let store = MockRecordStore::with_records(vec![record("2026-01-03", "10:00")]);
        store.set_fail_fetch(true);
        let mut cache = RecordCache::new();
        assert!(cache.refresh(&store).await.is_err());

        store.set_fail_fetch(false);
        assert_eq!(cache.refresh(&store).await.unwrap(), 1);
        assert_eq!(cache.status(), CacheStatus::Ready);
    }

    #[test]
    fn test_booked_times_are_trimmed_and_per_date() {
        let mut padded = record("2026-01-03", " 13:30 ");
        padded.date = "2026-01-03 ".to_string();
        let cache = RecordCache::from_records(vec![
            record("2026-01-03", "10:00"),
            padded,
            record("2026-01-04", "10:00"),
        ]);

        let times = cache.booked_times("2026-01-03");
        assert_eq!(times.len(), 2);
        assert!(times.contains("10:00"));
        assert!(times.contains("13:30"));
        assert!(cache.booked_times("2026-01-06").is_empty());
    }
}
