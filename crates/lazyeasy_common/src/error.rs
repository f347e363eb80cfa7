use lazyeasy_config::ConfigError;
use std::fmt;
use thiserror::Error;

/// The base error type shared by all LazyEasy crates.
///
/// Crates keep their own error enums and convert into this one at the HTTP
/// boundary, where the variant decides the status code.
#[derive(Error, Debug)]
pub enum LazyEasyError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The request carried invalid user input
    #[error("{0}")]
    ValidationError(String),

    /// The remote record store failed or answered with garbage
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// The requested resource is already taken
    #[error("{0}")]
    ConflictError(String),

    /// Another request holds the resource
    #[error("{0}")]
    BusyError(String),

    /// A dependency is not ready yet
    #[error("{0}")]
    UnavailableError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Maps an error onto an HTTP status code.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for LazyEasyError {
    fn status_code(&self) -> u16 {
        match self {
            LazyEasyError::ConfigError(_) => 500,
            LazyEasyError::ValidationError(_) => 400,
            LazyEasyError::ExternalServiceError { .. } => 502,
            LazyEasyError::ConflictError(_) => 409,
            LazyEasyError::BusyError(_) => 429,
            LazyEasyError::UnavailableError(_) => 503,
            LazyEasyError::InternalError(_) => 500,
        }
    }
}

/// Adds context to foreign errors while converting them.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, LazyEasyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, LazyEasyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, LazyEasyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| LazyEasyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, LazyEasyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| LazyEasyError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<ConfigError> for LazyEasyError {
    fn from(err: ConfigError) -> Self {
        LazyEasyError::ConfigError(err.to_string())
    }
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> LazyEasyError {
    LazyEasyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (LazyEasyError::ConfigError("x".into()), 500),
            (LazyEasyError::ValidationError("x".into()), 400),
            (external_service_error("booking-store", "down"), 502),
            (LazyEasyError::ConflictError("x".into()), 409),
            (LazyEasyError::BusyError("x".into()), 429),
            (LazyEasyError::UnavailableError("x".into()), 503),
            (LazyEasyError::InternalError("x".into()), 500),
        ];
        for (err, code) in cases {
            assert_eq!(err.status_code(), code, "{}", err);
        }
    }

    #[test]
    fn test_context_wraps_foreign_errors() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        let err = io.context("Failed to bind 127.0.0.1:8086").unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.to_string(),
            "Internal error: Failed to bind 127.0.0.1:8086: address in use"
        );
    }
}
