// --- File: crates/lazyeasy_booking/src/store.rs ---
//! Spreadsheet-backed record store.
//!
//! The store is a web-app endpoint in front of a sheet: `GET` returns
//! `{"records": [...]}`, `POST` appends the JSON body sent as `text/plain`.
//! The write answer carries no structured body and is never parsed.

use lazyeasy_common::{
    create_client, external_service_error, BookingRecord, BoxFuture, LazyEasyError, RecordStore,
    WriteReceipt,
};
use lazyeasy_config::BookingConfig;
use reqwest::{header, Client};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub const STORE_SERVICE_NAME: &str = "booking-store";

/// Errors that can occur when talking to the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Store answered with status {0}")]
    StatusError(u16),
    #[error("Failed to parse store response: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl From<StoreError> for LazyEasyError {
    fn from(err: StoreError) -> Self {
        external_service_error(STORE_SERVICE_NAME, err)
    }
}

#[derive(Debug, Deserialize)]
struct SheetResponse {
    #[serde(default)]
    records: Vec<BookingRecord>,
}

/// HTTP client for the spreadsheet endpoint.
pub struct SheetStore {
    client: Client,
    url: String,
}

impl SheetStore {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &BookingConfig) -> Result<Self, StoreError> {
        let client = create_client(config.request_timeout_secs)?;
        Ok(Self::new(client, config.store_url.clone()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RecordStore for SheetStore {
    type Error = StoreError;

    fn fetch_all(&self) -> BoxFuture<'_, Vec<BookingRecord>, Self::Error> {
        Box::pin(async move {
            let response = self.client.get(&self.url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(StoreError::StatusError(status.as_u16()));
            }
            // The web app does not always label its JSON, so parse the text.
            let body = response.text().await?;
            let parsed: SheetResponse = serde_json::from_str(&body)?;
            debug!("Store returned {} records", parsed.records.len());
            Ok(parsed.records)
        })
    }

    fn submit(&self, record: &BookingRecord) -> BoxFuture<'_, WriteReceipt, Self::Error> {
        let body = serde_json::to_string(record);
        Box::pin(async move {
            let body = body?;
            let response = self
                .client
                .post(&self.url)
                .header(header::CONTENT_TYPE, "text/plain")
                .body(body)
                .send()
                .await?;
            let receipt = WriteReceipt {
                status: response.status().as_u16(),
            };
            info!("Store accepted write with status {}", receipt.status);
            Ok(receipt)
        })
    }
}
