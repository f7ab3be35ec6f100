//! The error type shared by every account service call.
use reqwest::StatusCode;
use thiserror::Error;

/// An error type for all errors that may happen while talking to the
/// account service.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid API url {url:?}")]
    InvalidUrl { url: String },
    #[error("Invalid hash {0:?}, expected word characters only")]
    InvalidHash(String),
    #[error("Request to the account service failed")]
    Request(#[from] reqwest::Error),
    #[error("Account service responded with {status}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to decode the account service response")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// The HTTP status the service answered with, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_code() {
        let err = ClientError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "{}".to_string(),
        };

        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert_eq!(
            err.to_string(),
            "Account service responded with 401 Unauthorized"
        );
    }

    #[test]
    fn decode_error_has_no_status() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();

        assert!(err.status().is_none());
    }
}
