// --- File: crates/lazyeasy_common/src/http/client.rs ---
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Creates the HTTP client used for outbound calls.
///
/// Spreadsheet web-app endpoints answer with a redirect to the content host,
/// so redirects are followed with reqwest's default policy.
pub fn create_client(timeout_secs: u64) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::default())
        .build()
}
