// --- File: crates/lazyeasy_booking/src/routes.rs ---

use crate::cache::RecordCache;
use crate::handlers::{
    book_handler, calendar_handler, get_min_date_handler, get_slots_handler, refresh_handler,
    BookingState,
};
use crate::settings::{system_clock, BookingSettings};
use crate::store::SheetStore;
use crate::submit::BookingSubmitter;
use axum::{
    routing::{get, post},
    Router,
};
use lazyeasy_common::{log_result, LazyEasyError};
use lazyeasy_config::AppConfig;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Router for the booking endpoints over an already built state.
pub fn router(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/slots", get(get_slots_handler))
        .route("/min-date", get(get_min_date_handler))
        .route("/book", post(book_handler))
        .route("/calendar", post(calendar_handler))
        .route("/refresh", post(refresh_handler))
        .with_state(state)
}

/// Creates the booking router from configuration.
///
/// Loads the record cache once before returning. A failed first load is
/// logged and leaves the slot endpoint answering 503 until `/refresh`
/// succeeds; the server still starts.
pub async fn routes(config: Arc<AppConfig>) -> Result<Router, LazyEasyError> {
    let settings = BookingSettings::from_config(&config)?;
    let store = SheetStore::from_config(&config.booking)?;
    info!("Booking store at {}", store.url());

    let mut cache = RecordCache::new();
    let _ = log_result(
        cache.refresh(&store).await,
        "Initial booking records loaded",
        "Initial booking record load failed",
    );

    let state = Arc::new(BookingState {
        settings: Arc::new(settings),
        store: Arc::new(store),
        cache: Arc::new(RwLock::new(cache)),
        submitter: Arc::new(BookingSubmitter::new()),
        clock: system_clock(),
    });

    Ok(router(state))
}
