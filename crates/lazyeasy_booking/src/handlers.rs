// File: crates/lazyeasy_booking/src/handlers.rs
use crate::cache::RecordCache;
use crate::form::BookingForm;
use crate::ics::{build_invite, generate_uid, InviteRequest};
use crate::settings::{BookingSettings, Clock};
use crate::slots::{generate_slots, parse_date, DATE_FORMAT};
use crate::store::StoreError;
use crate::submit::{BookingSubmitter, MESSAGE_RECORDS_UNAVAILABLE};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use lazyeasy_common::{LazyEasyError, RecordStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

pub const MESSAGE_SELECT_DATE: &str = "請選擇日期";

/// State shared by the booking handlers.
#[derive(Clone)]
pub struct BookingState {
    pub settings: Arc<BookingSettings>,
    pub store: Arc<dyn RecordStore<Error = StoreError>>,
    pub cache: Arc<RwLock<RecordCache>>,
    pub submitter: Arc<BookingSubmitter>,
    pub clock: Clock,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct SlotsQuery {
    /// Date in YYYY-MM-DD format
    #[serde(default)]
    pub date: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotView {
    pub time: String,
    pub status: crate::slots::SlotStatus,
    pub available: bool,
    pub reason: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<SlotView>,
    pub notice: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MinDateResponse {
    pub min_date: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    pub reset_date: String,
    pub records_refreshed: bool,
    pub invite: InviteRequest,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RefreshResponse {
    pub records: usize,
}

/// Slot statuses for one date.
#[axum::debug_handler]
pub async fn get_slots_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, LazyEasyError> {
    if query.date.trim().is_empty() {
        return Ok(Json(SlotsResponse {
            date: String::new(),
            slots: Vec::new(),
            notice: Some(MESSAGE_SELECT_DATE.to_string()),
        }));
    }
    let date = parse_date(&query.date)?;

    let cache = state.cache.read().await;
    if !cache.is_ready() {
        return Err(LazyEasyError::UnavailableError(
            MESSAGE_RECORDS_UNAVAILABLE.to_string(),
        ));
    }

    let now = state.settings.local_now((state.clock)());
    let day = generate_slots(&state.settings.schedule, date, &cache, now);

    Ok(Json(SlotsResponse {
        date: date.format(DATE_FORMAT).to_string(),
        slots: day
            .slots
            .iter()
            .map(|slot| SlotView {
                time: slot.label(),
                status: slot.status,
                available: slot.is_available(),
                reason: slot.status.reason().map(str::to_string),
            })
            .collect(),
        notice: day.notice.map(str::to_string),
    }))
}

/// Lower bound and default value for the date picker.
#[axum::debug_handler]
pub async fn get_min_date_handler(State(state): State<Arc<BookingState>>) -> Json<MinDateResponse> {
    let min_date = state.settings.min_date((state.clock)());
    Json(MinDateResponse {
        min_date: min_date.format(DATE_FORMAT).to_string(),
    })
}

/// Validates and submits a booking. Failures are logged by the submitter.
#[axum::debug_handler]
pub async fn book_handler(
    State(state): State<Arc<BookingState>>,
    Json(form): Json<BookingForm>,
) -> Result<Json<BookingResponse>, LazyEasyError> {
    let outcome = state
        .submitter
        .submit(
            &form,
            &state.settings,
            state.store.as_ref(),
            &state.cache,
            (state.clock)(),
        )
        .await?;

    info!("Booked {} {}", outcome.record.date, outcome.record.time);
    Ok(Json(BookingResponse {
        success: true,
        message: format!("預約成功！感謝 {} 的預約，確認信已發出。", outcome.record.name),
        reset_date: outcome.reset_date.format(DATE_FORMAT).to_string(),
        records_refreshed: outcome.cache_refreshed,
        invite: outcome.invite,
    }))
}

/// Returns the calendar invite as a download.
#[axum::debug_handler]
pub async fn calendar_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<InviteRequest>,
) -> Result<Response, LazyEasyError> {
    let now = (state.clock)();
    let invite = build_invite(
        &request,
        &state.settings.services,
        &state.settings.calendar,
        state.settings.local_now(now),
        &generate_uid(now),
    )?;

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/calendar; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", invite.file_name),
            ),
        ],
        invite.content,
    )
        .into_response())
}

/// Re-fetches the booking records, e.g. after the store was unreachable.
#[axum::debug_handler]
pub async fn refresh_handler(
    State(state): State<Arc<BookingState>>,
) -> Result<Json<RefreshResponse>, LazyEasyError> {
    let mut cache = state.cache.write().await;
    let records = cache.refresh(state.store.as_ref()).await?;
    Ok(Json(RefreshResponse { records }))
}
