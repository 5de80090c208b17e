//! Error types for memex-export
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The taxonomy mirrors the run's abort policy: variants the sync loop
//! treats as fatal unwind to `main`, everything else is caught where it
//! occurs and converted into a benign value.

use thiserror::Error;

use crate::types::Timestamp;

/// The main error type for memex-export
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required environment variable: {name}")]
    MissingEnv { name: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// Two consecutive pages ended on the same ordering key. Continuing
    /// would request the same page forever, so the run aborts instead.
    #[error("No pagination progress on {collection}: page ended on cursor {cursor} twice")]
    NoProgress {
        collection: &'static str,
        cursor: Timestamp,
    },

    // ============================================================================
    // Serialization / I/O Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State error: {message}")]
    State { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing environment variable error
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnv { name: name.into() }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Check if this error signals the duplicate-terminal-cursor guard
    pub fn is_no_progress(&self) -> bool {
        matches!(self, Error::NoProgress { .. })
    }
}

/// Result type alias for memex-export
pub type Result<T> = std::result::Result<T, Error>;
