// --- File: crates/lazyeasy_booking/src/cache.rs ---
//! In-memory snapshot of every booking the store knows about.
//!
//! The cache is always replaced wholesale. It is refreshed at start-up, after
//! each successful submission and on an explicit reload; nothing retries on
//! its own.

use chrono::{DateTime, Utc};
use lazyeasy_common::{BookingRecord, RecordStore};
use std::collections::HashSet;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Never fetched.
    Empty,
    /// The last fetch succeeded.
    Ready,
    /// The last fetch failed; the record list is empty.
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct RecordCache {
    records: Vec<BookingRecord>,
    status: CacheStatus,
    last_refreshed: Option<DateTime<Utc>>,
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordCache {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            status: CacheStatus::Empty,
            last_refreshed: None,
        }
    }

    /// A ready cache holding `records`, as if just fetched.
    pub fn from_records(records: Vec<BookingRecord>) -> Self {
        Self {
            records,
            status: CacheStatus::Ready,
            last_refreshed: Some(Utc::now()),
        }
    }

    /// Replaces the cache with everything the store holds.
    ///
    /// On failure the cache is emptied and marked unavailable before the
    /// error is handed back.
    pub async fn refresh<S>(&mut self, store: &S) -> Result<usize, S::Error>
    where
        S: RecordStore + ?Sized,
    {
        info!("Refreshing booking records");
        match store.fetch_all().await {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.status = CacheStatus::Ready;
                self.last_refreshed = Some(Utc::now());
                info!("Loaded {} booking records", count);
                Ok(count)
            }
            Err(e) => {
                error!("Failed to load booking records: {}", e);
                self.records.clear();
                self.status = CacheStatus::Unavailable;
                Err(e)
            }
        }
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn status(&self) -> CacheStatus {
        self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == CacheStatus::Ready
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    /// Time labels already taken on `date` (`YYYY-MM-DD`).
    pub fn booked_times(&self, date: &str) -> HashSet<&str> {
        self.records
            .iter()
            .filter(|r| r.date.trim() == date)
            .map(|r| r.time.trim())
            .collect()
    }

    pub fn is_booked(&self, date: &str, time: &str) -> bool {
        self.records.iter().any(|r| r.occupies(date, time))
    }
}
