//! Error types for API operations.

use crate::session::CredentialError;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned when an authenticated call is attempted while logged out.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Not authorized. No token available.";

/// API error types.
///
/// Every variant renders to a message suitable for showing to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The call requires authentication but no token is stored.
    #[error("Not authorized. No token available.")]
    MissingCredential,

    /// Network or transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the server.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or a generic fallback.
        message: String,
    },

    /// Successful response whose body did not match the expected shape.
    #[error("Failed to decode the server response: {0}")]
    Decode(String),

    /// Request body serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Token storage failure.
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
}

impl Error {
    /// Creates a status error from a code and message.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates the generic error used when a failed response carries no
    /// readable message.
    #[must_use]
    pub fn status_fallback(status: u16) -> Self {
        Self::status(status, format!("Request failed with status code {status}."))
    }

    /// Returns the HTTP status associated with this error, if any.
    ///
    /// A missing credential reports 401, matching what the server would say.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::MissingCredential => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the error means the session is not (or no longer)
    /// authenticated.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let err = Error::MissingCredential;
        assert_eq!(err.to_string(), MISSING_CREDENTIAL_MESSAGE);
        assert_eq!(err.status_code(), Some(401));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_status_error_displays_server_message() {
        let err = Error::status(404, "Property not found");
        assert_eq!(err.to_string(), "Property not found");
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_status_fallback() {
        let err = Error::status_fallback(502);
        assert_eq!(err.to_string(), "Request failed with status code 502.");
    }

    #[test]
    fn test_decode_error_has_no_status() {
        let err = Error::Decode("missing field `property`".into());
        assert!(err.status_code().is_none());
        assert!(err.to_string().starts_with("Failed to decode"));
    }
}
