// File: crates/lazyeasy_booking/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::form::BookingForm;
use crate::handlers::{
    BookingResponse, MinDateResponse, RefreshResponse, SlotView, SlotsQuery, SlotsResponse,
};
use crate::ics::InviteRequest;
use crate::slots::SlotStatus;

#[utoipa::path(
    get,
    path = "/slots",
    params(SlotsQuery),
    responses(
        (status = 200, description = "Slot statuses for the date", body = SlotsResponse),
        (status = 400, description = "Malformed date"),
        (status = 503, description = "Booking records could not be loaded")
    ),
    tag = "Booking"
)]
fn doc_get_slots_handler() {}

#[utoipa::path(
    get,
    path = "/min-date",
    responses(
        (status = 200, description = "Earliest bookable date", body = MinDateResponse,
         example = json!({ "min_date": "2025-12-19" }))
    ),
    tag = "Booking"
)]
fn doc_get_min_date_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = BookingForm, example = json!({
        "service": "日式單根嫁接-客製款",
        "staff": "Amy",
        "date": "2026-01-03",
        "time": "10:00",
        "name": "王小明",
        "phone": "0912345678",
        "email": "client@example.com",
        "history": "第一次嫁接",
        "notes": ""
    })),
    responses(
        (status = 200, description = "Booking sent", body = BookingResponse),
        (status = 400, description = "Form rejected (missing slot, bad email, spam)"),
        (status = 409, description = "Slot no longer available"),
        (status = 429, description = "Another submission is in progress"),
        (status = 502, description = "The record store failed")
    ),
    tag = "Booking"
)]
fn doc_book_handler() {}

#[utoipa::path(
    post,
    path = "/calendar",
    request_body = InviteRequest,
    responses(
        (status = 200, description = "Calendar invite", content_type = "text/calendar", body = String),
        (status = 400, description = "Malformed date or time")
    ),
    tag = "Booking"
)]
fn doc_calendar_handler() {}

#[utoipa::path(
    post,
    path = "/refresh",
    responses(
        (status = 200, description = "Records reloaded", body = RefreshResponse),
        (status = 502, description = "The record store failed")
    ),
    tag = "Booking"
)]
fn doc_refresh_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_slots_handler,
        doc_get_min_date_handler,
        doc_book_handler,
        doc_calendar_handler,
        doc_refresh_handler
    ),
    components(schemas(
        SlotsResponse,
        SlotView,
        SlotStatus,
        MinDateResponse,
        BookingForm,
        BookingResponse,
        InviteRequest,
        RefreshResponse
    )),
    tags((name = "Booking", description = "Slot availability and booking"))
)]
pub struct BookingApiDoc;
