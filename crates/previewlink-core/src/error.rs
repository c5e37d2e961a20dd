//! Error types for previewlink.

use thiserror::Error;

/// Main error type for previewlink operations.
///
/// "Not found" outcomes of preview resolution are not errors; they travel as
/// [`crate::Lookup::NotFound`] values. Everything here aborts the run.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(String),

    /// Credentials rejected (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Credentials lack permission (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Remote resource does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (429)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Remote server failed (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// API returned an error
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response could not be interpreted
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested preview provider is not in the supported set
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Map a non-success HTTP status code to an error variant.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => Error::Unauthorized(message),
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            429 => Error::RateLimited(message),
            500..=599 => Error::ServerError { status, message },
            _ => Error::Api { status, message },
        }
    }
}

/// Result type alias for previewlink operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(Error::from_status(401, "x"), Error::Unauthorized(_)));
        assert!(matches!(Error::from_status(403, "x"), Error::Forbidden(_)));
        assert!(matches!(Error::from_status(404, "x"), Error::NotFound(_)));
        assert!(matches!(Error::from_status(429, "x"), Error::RateLimited(_)));
        assert!(matches!(
            Error::from_status(502, "bad gateway"),
            Error::ServerError { status: 502, .. }
        ));
        assert!(matches!(
            Error::from_status(422, "validation failed"),
            Error::Api { status: 422, .. }
        ));
    }

    #[test]
    fn test_display() {
        let err = Error::from_status(500, "boom");
        assert_eq!(err.to_string(), "Server error: 500 - boom");

        let err = Error::UnsupportedProvider("heroku".to_string());
        assert_eq!(err.to_string(), "Unsupported provider: heroku");
    }
}
