//! Remote call error types.

use thiserror::Error;

/// Errors from a single remote call. Every variant is terminal for that call;
/// nothing in the client retries.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, TLS, or timeout failure before a status was received.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// Server-provided message, or the best fallback available.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(error) => error.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }

    /// Text suitable for a transient notification.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Transport(error) if error.is_timeout() => "request timed out".to_string(),
            Self::Transport(error) if error.is_connect() => {
                "could not connect to the server".to_string()
            }
            Self::Transport(error) => format!("request failed: {error}"),
            Self::Parse(reason) => format!("unexpected response: {reason}"),
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status_and_message() {
        let err = ApiError::Api {
            status: 500,
            message: "Error interno".into(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.user_message(), "Error interno");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn parse_error_has_no_status() {
        let err = ApiError::Parse("missing token".into());
        assert_eq!(err.status(), None);
        assert!(err.user_message().contains("missing token"));
    }

    #[test]
    fn unauthorized_detected_from_status() {
        let err = ApiError::Api {
            status: 401,
            message: "Token inválido".into(),
        };
        assert!(err.is_unauthorized());
    }
}
