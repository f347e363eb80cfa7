//! Shared test data for the booking crate.

use crate::form::BookingForm;
use crate::settings::{BookingSettings, Clock};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use lazyeasy_common::BookingRecord;
use lazyeasy_config::{AppConfig, BookingConfig};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Friday 2026-01-02, 12:00 in Taipei.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 2, 4, 0, 0).unwrap()
}

pub fn fixed_clock() -> Clock {
    Arc::new(fixed_now)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

pub fn local(date_str: &str, time_str: &str) -> NaiveDateTime {
    date(date_str).and_time(time(time_str))
}

pub fn test_config() -> AppConfig {
    AppConfig {
        booking: BookingConfig {
            store_url: "https://store.example/exec".to_string(),
            ..BookingConfig::default()
        },
        ..AppConfig::default()
    }
}

pub fn test_settings() -> BookingSettings {
    BookingSettings::from_config(&test_config()).unwrap()
}

pub fn record(date: &str, time: &str) -> BookingRecord {
    BookingRecord {
        service: "日式單根嫁接-客製款".to_string(),
        staff: "Amy".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        name: "陳小姐".to_string(),
        phone: "0911222333".to_string(),
        email: "chen@example.com".to_string(),
        history: "第一次嫁接".to_string(),
        notes: String::new(),
    }
}

pub fn form(date: &str, time: &str) -> BookingForm {
    BookingForm {
        service: "日式單根嫁接-客製款".to_string(),
        staff: "Amy".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        name: "王小明".to_string(),
        phone: "0912345678".to_string(),
        email: "client@example.com".to_string(),
        history: "第一次嫁接".to_string(),
        notes: "  想要自然款  ".to_string(),
        nickname: String::new(),
    }
}

/// Collects formatted log lines written on the current thread.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Installs a TRACE-level subscriber for the current thread.
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    (capture, tracing::subscriber::set_default(subscriber))
}
