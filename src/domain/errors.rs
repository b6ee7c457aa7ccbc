//! Domain error types
//!
//! This module defines the error hierarchy for Heritage. Upstream failures are
//! captured as [`FetchError`] and wrapped into [`HeritageError`] once they
//! cross the aggregation boundary. No third-party error types are exposed.

use thiserror::Error;

/// Main Heritage error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum HeritageError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A single upstream call failed outside of an aggregation
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// One of the monument sources failed; the whole aggregation is discarded
    #[error("Aggregation failed: source '{source_name}' returned an error: {error}")]
    Aggregation {
        /// Name of the failing source
        source_name: String,
        /// Underlying fetch failure
        #[source]
        error: FetchError,
    },

    /// No monument with this id in the current working set
    #[error("No monument with id {0}")]
    NotFound(String),

    /// The monument is already in the favorites set
    #[error("Monument {0} is already a favorite")]
    AlreadyFavorited(String),

    /// The query or an argument is invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HeritageError {
    /// Wraps a source failure into an aggregation error
    pub fn aggregation(source_name: impl Into<String>, error: FetchError) -> Self {
        Self::Aggregation {
            source_name: source_name.into(),
            error,
        }
    }

    /// Whether the caller is at fault (bad id, bad query)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Validation(_))
    }

    /// Whether the request conflicts with current state
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyFavorited(_))
    }

    /// HTTP status a transport layer should answer with
    ///
    /// An unknown id is answered with 400, not 404.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) | Self::Validation(_) => 400,
            Self::AlreadyFavorited(_) => 409,
            Self::Aggregation { .. } | Self::Fetch(_) => 502,
            _ => 500,
        }
    }
}

/// Upstream open-data errors
///
/// Errors that occur when fetching records from a dataset endpoint.
/// These errors don't expose the HTTP client's own types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection dropped
    #[error("Failed to connect to open-data server: {0}")]
    ConnectionFailed(String),

    /// Server answered with a 4xx status
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server answered with a 5xx status
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Body was not the expected JSON envelope
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Dataset URL could not be built
    #[error("Invalid dataset URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Maps a non-success HTTP status to the matching variant
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if (400..500).contains(&status) {
            Self::ClientError { status, message }
        } else {
            Self::ServerError { status, message }
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for HeritageError {
    fn from(err: std::io::Error) -> Self {
        HeritageError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HeritageError {
    fn from(err: serde_json::Error) -> Self {
        HeritageError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HeritageError {
    fn from(err: toml::de::Error) -> Self {
        HeritageError::Configuration(format!("TOML parse error: {err}"))
    }
}
