use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by [`Client`](crate::Client) calls.
///
/// Conflicts (HTTP 409, event full or duplicate subscription) carry the
/// server's message so the UI can show something more specific than a
/// generic failure. Nothing here is fatal; callers toast and move on.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Conflict(String),
    #[error("not authorized: {0}")]
    Unauthorized(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict(_))
    }

    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            409 => ApiError::Conflict(message),
            401 | 403 => ApiError::Unauthorized(message),
            _ => ApiError::Status { status, message },
        }
    }
}

/// Error body the server sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ServerMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from_status(409, "event is full".into());
        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "event is full");

        let err = ApiError::from_status(401, "token expired".into());
        assert_eq!(err, ApiError::Unauthorized("token expired".into()));
        assert!(!err.is_conflict());

        let err = ApiError::from_status(500, "boom".into());
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "boom".into()
            }
        );
    }
}
