// --- File: crates/lazyeasy_booking/src/lib.rs ---
pub mod cache;
#[cfg(test)]
mod cache_test;
pub mod doc;
#[cfg(test)]
mod fixtures;
pub mod form;
#[cfg(test)]
mod form_test;
pub mod handlers;
pub mod ics;
pub mod routes;
pub mod settings;
pub mod slots;
#[cfg(test)]
mod slots_proptest;
pub mod store;
pub mod submit;

pub use cache::{CacheStatus, RecordCache};
pub use form::{BookingForm, Rejection};
pub use ics::{CalendarInvite, InviteRequest, ServiceCatalogue};
pub use routes::routes;
pub use settings::BookingSettings;
pub use slots::{effective_min_date, generate_slots, DaySlots, Slot, SlotError, SlotSchedule, SlotStatus};
pub use store::{SheetStore, StoreError};
pub use submit::{BookingSubmitter, SubmissionError, SubmissionOutcome};
