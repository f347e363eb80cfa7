// --- File: crates/lazyeasy_booking/src/settings.rs ---
use crate::ics::ServiceCatalogue;
use crate::slots::{effective_min_date, parse_date, SlotError, SlotSchedule};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use lazyeasy_config::{AppConfig, CalendarConfig};
use std::str::FromStr;
use std::sync::Arc;

/// Source of the current time; swapped for a fixed instant in tests.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Parsed, validated booking configuration.
#[derive(Debug, Clone)]
pub struct BookingSettings {
    pub schedule: SlotSchedule,
    pub time_zone: Tz,
    pub min_booking_date: NaiveDate,
    pub services: ServiceCatalogue,
    pub calendar: CalendarConfig,
    pub require_ack: bool,
}

impl BookingSettings {
    pub fn from_config(config: &AppConfig) -> Result<Self, SlotError> {
        let booking = &config.booking;
        let time_zone = Tz::from_str(&booking.time_zone)
            .map_err(|_| SlotError::InvalidTimeZone(booking.time_zone.clone()))?;
        Ok(Self {
            schedule: SlotSchedule::from_config(booking)?,
            time_zone,
            min_booking_date: parse_date(&booking.min_booking_date)?,
            services: ServiceCatalogue::new(booking.services.clone())?,
            calendar: config.calendar.clone(),
            require_ack: booking.require_ack,
        })
    }

    /// Studio wall-clock time at `now`.
    pub fn local_now(&self, now: DateTime<Utc>) -> NaiveDateTime {
        now.with_timezone(&self.time_zone).naive_local()
    }

    /// Studio calendar day at `now`.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        self.local_now(now).date()
    }

    /// Lower bound and default value of the booking page's date picker.
    pub fn min_date(&self, now: DateTime<Utc>) -> NaiveDate {
        effective_min_date(self.today(now), self.min_booking_date)
    }
}
