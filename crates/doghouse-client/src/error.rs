//! Error types for the doghouse-client crate.

use thiserror::Error;

/// Errors that can occur talking to the dashboard API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required credentials were not provided or found in the
    /// environment.
    #[error("missing credentials: {reason}")]
    MissingCredentials {
        /// Which credential is missing and where it was looked for.
        reason: String,
    },

    /// The request never produced an HTTP response (connection, TLS,
    /// timeout).
    #[error("transport error: {reason}")]
    Transport {
        /// The underlying transport failure.
        reason: String,
    },

    /// The API answered with a non-success status.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error messages reported by the API, joined.
        message: String,
    },

    /// The response body was not the JSON shape we expected.
    #[error("decode error: {reason}")]
    Decode {
        /// The reason decoding failed.
        reason: String,
    },
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_missing_credentials() {
        let err = ClientError::MissingCredentials {
            reason: "DD_API_KEY is not set".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing credentials: DD_API_KEY is not set"
        );
    }

    #[test]
    fn error_display_api() {
        let err = ClientError::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "api error (status 403): Forbidden");
    }
}
