// --- File: crates/lazyeasy_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// --- Service Catalogue ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServiceDetail {
    /// Form value of the service, e.g. `single_custom`.
    pub key: String,
    /// Text shown to clients and written into the calendar invite.
    pub text: String,
    /// Length of the appointment in whole hours.
    #[serde(default = "default_duration_hours")]
    pub duration_hours: i64,
}

// --- Booking Config ---
// Holds the studio's schedule. The store URL is usually a secret and can be
// written as "secret_from_env" to pull it from BOOKING_STORE_URL.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    #[serde(default)]
    pub store_url: String, // Mandatory
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Earliest bookable date (YYYY-MM-DD), e.g. the opening promotion start.
    #[serde(default = "default_min_booking_date")]
    pub min_booking_date: String,
    #[serde(default = "default_blackout_dates")]
    pub blackout_dates: Vec<String>,
    #[serde(default = "default_weekday_slots")]
    pub weekday_slots: Vec<String>,
    #[serde(default = "default_weekend_slots")]
    pub weekend_slots: Vec<String>,
    #[serde(default = "default_services")]
    pub services: Vec<ServiceDetail>,
    /// Require a 2xx answer from the store before a booking counts as sent.
    #[serde(default)]
    pub require_ack: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            store_url: String::new(),
            time_zone: default_time_zone(),
            min_booking_date: default_min_booking_date(),
            blackout_dates: default_blackout_dates(),
            weekday_slots: default_weekday_slots(),
            weekend_slots: default_weekend_slots(),
            services: default_services(),
            require_ack: false,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

// --- Calendar Invite Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CalendarConfig {
    #[serde(default = "default_product_id")]
    pub product_id: String,
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            product_id: default_product_id(),
            title_prefix: default_title_prefix(),
            location: default_location(),
            file_name: default_file_name(),
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8086
}

fn default_duration_hours() -> i64 {
    1
}

fn default_time_zone() -> String {
    "Asia/Taipei".to_string()
}

fn default_min_booking_date() -> String {
    "2025-12-19".to_string()
}

fn default_blackout_dates() -> Vec<String> {
    vec![
        "2025-12-25".to_string(), // Christmas
        "2026-01-01".to_string(), // New Year
        "2026-02-14".to_string(), // Valentine's Day
    ]
}

fn default_weekday_slots() -> Vec<String> {
    vec!["19:00".to_string()]
}

fn default_weekend_slots() -> Vec<String> {
    vec!["10:00".to_string(), "13:30".to_string()]
}

fn default_services() -> Vec<ServiceDetail> {
    vec![ServiceDetail {
        key: "single_custom".to_string(),
        text: "日式單根嫁接-客製款".to_string(),
        duration_hours: 1,
    }]
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_product_id() -> String {
    "-//LazyEasy//Appointment//TW".to_string()
}

fn default_title_prefix() -> String {
    "LazyEasy 線上預約".to_string()
}

fn default_location() -> String {
    "LazyEasy (請參考預約成功通知的詳細地址)".to_string()
}

fn default_file_name() -> String {
    "LazyEasy_Appointment.ics".to_string()
}
