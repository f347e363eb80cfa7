// --- File: crates/lazyeasy_booking/src/slots.rs ---
use crate::cache::RecordCache;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use lazyeasy_common::LazyEasyError;
use lazyeasy_config::BookingConfig;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const SLOT_FORMAT: &str = "%H:%M";

pub const NOTICE_BLACKOUT: &str = "本日為公休日，不開放預約";
pub const NOTICE_FULLY_BOOKED: &str = "本日已無空檔，請選擇其他日期";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("Invalid slot time (expected HH:MM): {0}")]
    InvalidTime(String),
    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),
    #[error("Service {service} must last between 1 and 24 hours, got {hours}")]
    InvalidDuration { service: String, hours: i64 },
}

impl From<SlotError> for LazyEasyError {
    fn from(err: SlotError) -> Self {
        match err {
            SlotError::InvalidTimeZone(_) | SlotError::InvalidDuration { .. } => {
                LazyEasyError::ConfigError(err.to_string())
            }
            _ => LazyEasyError::ValidationError(err.to_string()),
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, SlotError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| SlotError::InvalidDate(value.to_string()))
}

pub fn parse_slot_time(value: &str) -> Result<NaiveTime, SlotError> {
    NaiveTime::parse_from_str(value.trim(), SLOT_FORMAT)
        .map_err(|_| SlotError::InvalidTime(value.to_string()))
}

/// Fixed slot templates per weekday plus the days the studio is closed.
#[derive(Debug, Clone)]
pub struct SlotSchedule {
    weekday: Vec<NaiveTime>,
    weekend: Vec<NaiveTime>,
    blackout: BTreeSet<NaiveDate>,
}

impl SlotSchedule {
    pub fn new(
        weekday: Vec<NaiveTime>,
        weekend: Vec<NaiveTime>,
        blackout: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            weekday,
            weekend,
            blackout: blackout.into_iter().collect(),
        }
    }

    pub fn from_config(config: &BookingConfig) -> Result<Self, SlotError> {
        let weekday = config
            .weekday_slots
            .iter()
            .map(|s| parse_slot_time(s))
            .collect::<Result<Vec<_>, _>>()?;
        let weekend = config
            .weekend_slots
            .iter()
            .map(|s| parse_slot_time(s))
            .collect::<Result<Vec<_>, _>>()?;
        let blackout = config
            .blackout_dates
            .iter()
            .map(|s| parse_date(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(weekday, weekend, blackout))
    }

    pub fn is_blackout(&self, date: NaiveDate) -> bool {
        self.blackout.contains(&date)
    }

    /// Template start times offered on `date`; empty on blackout days.
    pub fn templates_for(&self, date: NaiveDate) -> &[NaiveTime] {
        if self.is_blackout(date) {
            return &[];
        }
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => &self.weekend,
            _ => &self.weekday,
        }
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Past,
    Booked,
}

impl SlotStatus {
    /// Tooltip the booking page shows on a disabled slot.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            SlotStatus::Available => None,
            SlotStatus::Past => Some("此時段已過"),
            SlotStatus::Booked => Some("時段已被預約"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub status: SlotStatus,
}

impl Slot {
    pub fn label(&self) -> String {
        self.start.format(SLOT_FORMAT).to_string()
    }

    pub fn is_available(&self) -> bool {
        self.status == SlotStatus::Available
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
    pub notice: Option<&'static str>,
}

impl DaySlots {
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_available()).count()
    }

    pub fn is_available(&self, start: NaiveTime) -> bool {
        self.slots
            .iter()
            .any(|s| s.start == start && s.is_available())
    }
}

/// Computes the slots for `date` against the cached bookings.
///
/// `now` is the studio's local wall-clock time. Precedence per slot:
/// blackout (no slots at all) > past > booked > available.
pub fn generate_slots(
    schedule: &SlotSchedule,
    date: NaiveDate,
    cache: &RecordCache,
    now: NaiveDateTime,
) -> DaySlots {
    if schedule.is_blackout(date) {
        debug!("{} is a blackout date", date);
        return DaySlots {
            date,
            slots: Vec::new(),
            notice: Some(NOTICE_BLACKOUT),
        };
    }

    let date_key = date.format(DATE_FORMAT).to_string();
    let booked = cache.booked_times(&date_key);

    let slots: Vec<Slot> = schedule
        .templates_for(date)
        .iter()
        .map(|&start| {
            let label = start.format(SLOT_FORMAT).to_string();
            let status = if date.and_time(start) <= now {
                SlotStatus::Past
            } else if booked.contains(label.as_str()) {
                SlotStatus::Booked
            } else {
                SlotStatus::Available
            };
            Slot {
                date,
                start,
                status,
            }
        })
        .collect();

    let mut day = DaySlots {
        date,
        slots,
        notice: None,
    };
    if day.available_count() == 0 {
        day.notice = Some(NOTICE_FULLY_BOOKED);
    }
    day
}

/// The earliest bookable date: the later of today and the opening threshold.
pub fn effective_min_date(today: NaiveDate, threshold: NaiveDate) -> NaiveDate {
    today.max(threshold)
}
