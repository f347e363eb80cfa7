// --- File: crates/lazyeasy_booking/src/ics.rs ---
//! Calendar invite (`.ics`) export for a single booking.

use crate::slots::{parse_date, parse_slot_time, SlotError};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use lazyeasy_common::BookingRecord;
use lazyeasy_config::{CalendarConfig, ServiceDetail};
use serde::{Deserialize, Serialize};

const ICS_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";
const FALLBACK_SERVICE_TEXT: &str = "預約服務";
const FALLBACK_DURATION_HOURS: i64 = 1;
const MAX_DURATION_HOURS: i64 = 24;
const UID_SUFFIX_LEN: usize = 7;

/// Service key → display text and duration.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalogue {
    services: Vec<ServiceDetail>,
}

impl ServiceCatalogue {
    /// Rejects services lasting less than one or more than 24 hours.
    pub fn new(services: Vec<ServiceDetail>) -> Result<Self, SlotError> {
        if let Some(bad) = services
            .iter()
            .find(|s| !(1..=MAX_DURATION_HOURS).contains(&s.duration_hours))
        {
            return Err(SlotError::InvalidDuration {
                service: bad.key.clone(),
                hours: bad.duration_hours,
            });
        }
        Ok(Self { services })
    }

    /// Finds a service by form key or by display text.
    ///
    /// The booking form posts the option text, older clients post the key;
    /// anything else gets a generic one-hour entry.
    pub fn lookup(&self, service: &str) -> ServiceDetail {
        let service = service.trim();
        self.services
            .iter()
            .find(|s| s.key == service || s.text == service)
            .cloned()
            .unwrap_or_else(|| ServiceDetail {
                key: service.to_string(),
                text: FALLBACK_SERVICE_TEXT.to_string(),
                duration_hours: FALLBACK_DURATION_HOURS,
            })
    }
}

/// The booking fields an invite needs.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteRequest {
    pub service: String,
    pub staff: String,
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
}

impl From<&BookingRecord> for InviteRequest {
    fn from(record: &BookingRecord) -> Self {
        Self {
            service: record.service.clone(),
            staff: record.staff.clone(),
            date: record.date.clone(),
            time: record.time.clone(),
            name: record.name.clone(),
            phone: record.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarInvite {
    pub file_name: String,
    pub content: String,
}

/// Escapes a TEXT value (RFC 5545 §3.3.11).
fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn format_ics(dt: NaiveDateTime) -> String {
    dt.format(ICS_DATETIME_FORMAT).to_string()
}

/// Builds the invite document.
///
/// Times are floating local wall-clock values; `stamp` is the studio-local
/// creation time and `uid` must be unique per call.
pub fn build_invite(
    request: &InviteRequest,
    catalogue: &ServiceCatalogue,
    calendar: &CalendarConfig,
    stamp: NaiveDateTime,
    uid: &str,
) -> Result<CalendarInvite, SlotError> {
    let date = parse_date(&request.date)?;
    let time = parse_slot_time(&request.time)?;
    let service = catalogue.lookup(&request.service);

    let start = date.and_time(time);
    let end = start + Duration::hours(service.duration_hours);

    let service_text = escape_text(&service.text);
    let description = format!(
        "服務項目: {}\\n美睫師: {}\\n姓名: {}\\n電話: {}\\n\\n(請以店家最終確認為準)",
        service_text,
        escape_text(&request.staff),
        escape_text(&request.name),
        escape_text(&request.phone),
    );

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", calendar.product_id),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", uid),
        format!("DTSTAMP:{}", format_ics(stamp)),
        format!("DTSTART:{}", format_ics(start)),
        format!("DTEND:{}", format_ics(end)),
        format!("SUMMARY:{} - {}", escape_text(&calendar.title_prefix), service_text),
        format!("DESCRIPTION:{}", description),
        format!("LOCATION:{}", escape_text(&calendar.location)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut content = lines.join("\r\n");
    content.push_str("\r\n");

    Ok(CalendarInvite {
        file_name: calendar.file_name.clone(),
        content,
    })
}

/// `<epoch millis>-<7 base36 chars>`, random part from a v4 uuid.
pub fn generate_uid(now: DateTime<Utc>) -> String {
    let mut random = uuid::Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(UID_SUFFIX_LEN);
    for _ in 0..UID_SUFFIX_LEN {
        let digit = (random % 36) as u32;
        random /= 36;
        suffix.push(char::from_digit(digit, 36).unwrap_or('0'));
    }
    format!("{}-{}", now.timestamp_millis(), suffix)
}
