// --- File: crates/lazyeasy_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! The booking crate talks to the spreadsheet-backed store only through the
//! [`RecordStore`] trait, so tests can swap in an in-memory store.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// One reservation as stored in the spreadsheet.
///
/// Written with English keys. Read rows are keyed by the sheet's column
/// labels, so the Chinese headers are accepted as aliases; columns the sheet
/// does not return default to empty strings. Sheets hand back numeric and
/// boolean cells as JSON scalars; those are read as their text.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(default, alias = "服務項目", deserialize_with = "cell_text")]
    pub service: String,
    #[serde(default, alias = "美睫師", deserialize_with = "cell_text")]
    pub staff: String,
    /// Calendar day, `YYYY-MM-DD`.
    #[serde(default, alias = "預約日期", deserialize_with = "cell_text")]
    pub date: String,
    /// Slot label, `HH:MM`.
    #[serde(default, alias = "預約時段", deserialize_with = "cell_text")]
    pub time: String,
    #[serde(default, alias = "姓名", deserialize_with = "cell_text")]
    pub name: String,
    #[serde(default, alias = "電話", deserialize_with = "cell_text")]
    pub phone: String,
    #[serde(default, alias = "電子郵件", deserialize_with = "cell_text")]
    pub email: String,
    #[serde(default, alias = "是否曾嫁接", deserialize_with = "cell_text")]
    pub history: String,
    #[serde(default, alias = "備註", deserialize_with = "cell_text")]
    pub notes: String,
}

/// Reads a sheet cell of any scalar type as text; `null` becomes empty.
fn cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    })
}

impl BookingRecord {
    /// True when this record occupies the given slot.
    ///
    /// Sheet cells often carry stray whitespace, so both sides are trimmed.
    pub fn occupies(&self, date: &str, time: &str) -> bool {
        self.date.trim() == date && self.time.trim() == time
    }
}

/// What the store told us after a write.
///
/// The store is allowed to answer opaquely; `status` is whatever HTTP status
/// came back and is only inspected when acknowledgements are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteReceipt {
    pub status: u16,
}

impl WriteReceipt {
    pub fn is_acknowledged(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A read/write store of booking records.
pub trait RecordStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every record the store holds, in store order.
    fn fetch_all(&self) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error>;

    /// Append one record.
    fn submit(&self, record: &BookingRecord) -> BoxFuture<'_, WriteReceipt, Self::Error>;
}
