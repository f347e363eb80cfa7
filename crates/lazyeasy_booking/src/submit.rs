// --- File: crates/lazyeasy_booking/src/submit.rs ---
use crate::cache::RecordCache;
use crate::form::{BookingForm, Rejection};
use crate::ics::InviteRequest;
use crate::settings::BookingSettings;
use crate::slots::{generate_slots, parse_date, parse_slot_time, SlotError};
use crate::store::StoreError;
use chrono::{DateTime, NaiveDate, Utc};
use lazyeasy_common::{BookingRecord, LazyEasyError, RecordStore};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

pub const MESSAGE_BUSY: &str = "預約傳送中...";
pub const MESSAGE_TAKEN: &str = "時段已被預約";
pub const MESSAGE_STORE_FAILED: &str = "系統忙碌中，請稍後再試。";
pub const MESSAGE_RECORDS_UNAVAILABLE: &str = "無法讀取預約資料，請檢查網路連線或稍後再試。";

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("{0}")]
    Rejected(Rejection),
    #[error("{0}")]
    InvalidSlot(#[from] SlotError),
    #[error("Slot {date} {time} is not available")]
    SlotUnavailable { date: String, time: String },
    #[error("A submission is already in progress")]
    InProgress,
    #[error("Store write failed: {0}")]
    Store(#[from] StoreError),
    #[error("Store did not acknowledge the write (status {0})")]
    NotAcknowledged(u16),
    #[error("Booking records could not be loaded: {0}")]
    RecordsUnavailable(StoreError),
}

impl From<SubmissionError> for LazyEasyError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Rejected(rejection) => {
                LazyEasyError::ValidationError(rejection.message().to_string())
            }
            SubmissionError::InvalidSlot(e) => e.into(),
            SubmissionError::SlotUnavailable { .. } => {
                LazyEasyError::ConflictError(MESSAGE_TAKEN.to_string())
            }
            SubmissionError::InProgress => LazyEasyError::BusyError(MESSAGE_BUSY.to_string()),
            SubmissionError::RecordsUnavailable(_) => {
                LazyEasyError::UnavailableError(MESSAGE_RECORDS_UNAVAILABLE.to_string())
            }
            SubmissionError::Store(_) | SubmissionError::NotAcknowledged(_) => {
                LazyEasyError::ExternalServiceError {
                    service_name: crate::store::STORE_SERVICE_NAME.to_string(),
                    message: MESSAGE_STORE_FAILED.to_string(),
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub record: BookingRecord,
    /// Ready to post to the calendar export if the client wants the invite.
    pub invite: InviteRequest,
    /// Date the booking page resets its picker to.
    pub reset_date: NaiveDate,
    /// False when the post-submit refresh failed; the booking itself stands.
    pub cache_refreshed: bool,
}

/// Sends bookings to the store one at a time.
///
/// The in-flight flag plays the part of the disabled submit button: while a
/// submission runs, any other one is turned away instead of queued.
#[derive(Debug, Default)]
pub struct BookingSubmitter {
    in_flight: AtomicBool,
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl BookingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    fn acquire(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlightGuard(&self.in_flight))
    }

    /// Validates `form`, writes it to `store` and refreshes `cache`.
    ///
    /// The cache stays write-locked from the availability check until the
    /// refresh finishes, so no slot list is computed from the pre-booking
    /// snapshot once the write went out. A cache that is not loaded is
    /// reloaded first; if that fails nothing is written.
    pub async fn submit<S>(
        &self,
        form: &BookingForm,
        settings: &BookingSettings,
        store: &S,
        cache: &RwLock<RecordCache>,
        now: DateTime<Utc>,
    ) -> Result<SubmissionOutcome, SubmissionError>
    where
        S: RecordStore<Error = StoreError> + ?Sized,
    {
        if let Err(rejection) = form.validate() {
            match rejection {
                Rejection::Spam => debug!("Dropping submission with filled honeypot"),
                other => warn!("Rejected booking form: {}", other),
            }
            return Err(SubmissionError::Rejected(rejection));
        }

        let Some(_guard) = self.acquire() else {
            warn!("Turned away a booking while another one is in flight");
            return Err(SubmissionError::InProgress);
        };

        let record = form.to_record();
        let (date, start) = parse_date(&record.date)
            .and_then(|date| parse_slot_time(&record.time).map(|start| (date, start)))
            .inspect_err(|e| warn!("Rejected booking slot: {}", e))?;

        let mut cache = cache.write().await;
        if !cache.is_ready() {
            if let Err(e) = cache.refresh(store).await {
                warn!("Refusing booking while records are unavailable");
                return Err(SubmissionError::RecordsUnavailable(e));
            }
        }
        let day = generate_slots(&settings.schedule, date, &cache, settings.local_now(now));
        if !day.is_available(start) {
            warn!("Slot {} {} is not available", record.date, record.time);
            return Err(SubmissionError::SlotUnavailable {
                date: record.date.clone(),
                time: record.time.clone(),
            });
        }

        info!("Submitting booking for {} {}", record.date, record.time);
        let receipt = store.submit(&record).await.map_err(|e| {
            error!("Booking write failed: {}", e);
            SubmissionError::from(e)
        })?;
        if settings.require_ack && !receipt.is_acknowledged() {
            error!("Store answered {} to a booking write", receipt.status);
            return Err(SubmissionError::NotAcknowledged(receipt.status));
        }

        let cache_refreshed = cache.refresh(store).await.is_ok();
        drop(cache);

        Ok(SubmissionOutcome {
            invite: InviteRequest::from(&record),
            record,
            reset_date: settings.min_date(now),
            cache_refreshed,
        })
    }
}
