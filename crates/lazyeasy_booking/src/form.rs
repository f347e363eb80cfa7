// --- File: crates/lazyeasy_booking/src/form.rs ---
use lazyeasy_common::BookingRecord;
use serde::Deserialize;
use std::fmt;

/// The booking page's form, field by field.
///
/// `nickname` is a honeypot: hidden from people, filled in by bots.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub staff: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub nickname: String,
}

/// Why a form never reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Spam,
    MissingSlot,
    InvalidEmail,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::Spam => "提交失敗。",
            Rejection::MissingSlot => "請選擇預約時段！",
            Rejection::InvalidEmail => "請輸入有效的電子郵件地址！",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl BookingForm {
    /// Input checks in order; the first failure wins.
    pub fn validate(&self) -> Result<(), Rejection> {
        if !self.nickname.is_empty() {
            return Err(Rejection::Spam);
        }
        if self.time.trim().is_empty() {
            return Err(Rejection::MissingSlot);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(Rejection::InvalidEmail);
        }
        Ok(())
    }

    /// The record sent to the store.
    pub fn to_record(&self) -> BookingRecord {
        BookingRecord {
            service: self.service.clone(),
            staff: self.staff.clone(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.trim().to_string(),
            history: self.history.clone(),
            notes: self.notes.trim().to_string(),
        }
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`; the domain
/// needs a dot with something on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
