// --- File: crates/lazyeasy_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

pub use error::{external_service_error, Context, HttpStatusCode, LazyEasyError};

pub use http::{client::create_client, IntoHttpResponse};

pub use logging::{init, init_with_level, log_result};

pub use services::{BookingRecord, BoxFuture, RecordStore, WriteReceipt};
