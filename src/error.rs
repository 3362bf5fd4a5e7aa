//! Error types for docstore-cp
//!
//! One error enum covers the whole pipeline: transport failures from the
//! HTTP client, structured errors decoded from the remote service's error
//! envelope, result-type mismatches, filesystem failures from the sink, and
//! fatal startup configuration problems. Each variant carries a
//! machine-readable category via [`Error::code`], used as the stage
//! identifier in polling-loop logs.

use thiserror::Error;

/// Result type alias for docstore-cp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for docstore-cp
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid.
    /// Fatal: only raised at startup, before the polling loop begins.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "input")
        key: Option<String>,
    },

    /// Transport-level failure: connection refused, timeout, or a response
    /// the HTTP client could not read or decode
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-200 response that did not carry a JSON error envelope
    #[error("status {status}: unknown error")]
    UnknownStatus {
        /// Raw HTTP status code of the failed response
        status: u16,
    },

    /// Well-formed error envelope returned by the remote service
    #[error("{code}: {message}")]
    Application {
        /// Machine-readable error category reported by the service
        code: String,
        /// Human-readable detail reported by the service
        message: String,
    },

    /// The fetched result is present but not a string
    #[error("bad result type {found}: expected string")]
    UnexpectedType {
        /// JSON type name of the value actually returned
        found: &'static str,
    },

    /// I/O error from the output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Local JSON serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Machine-readable error category.
    ///
    /// The polling loop logs this alongside the rendered message so a single
    /// log line identifies which stage of the cycle failed.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Network(_) => "transport_error",
            Error::UnknownStatus { .. } => "transport_error",
            Error::Application { .. } => "application_error",
            Error::UnexpectedType { .. } => "type_error",
            Error::Io(_) => "filesystem_error",
            Error::Serialization(_) => "serialization_error",
        }
    }
}
