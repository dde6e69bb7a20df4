use std::time::Duration;

use thiserror::Error;

/// Failure of a backend or third-party HTTP call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// An authenticated endpoint was called without a session token.
    #[error("Not logged in")]
    Unauthenticated,
    /// The client-side deadline passed before the response arrived.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthenticated) || matches!(self.status(), Some(401) | Some(403))
    }

    /// Message rendered inline by the component that issued the request.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(_) => "Could not reach the server, check your connection".to_string(),
            Self::Status { status: 401, .. } | Self::Unauthenticated => {
                "Your session has expired, please log in again".to_string()
            }
            Self::Status { status: 403, .. } => {
                "You are not allowed to perform this action".to_string()
            }
            Self::Status { status: 404, .. } => "The requested item no longer exists".to_string(),
            Self::Status { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Status { .. } | Self::Decode(_) => {
                "Something went wrong, please try again".to_string()
            }
            Self::Timeout(_) => "Loading took too long".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect backend messages to be shown for generic failures
    #[test]
    fn status_message_is_user_facing() {
        let err = ApiError::Status {
            status: 422,
            message: "Title already taken".to_string(),
        };

        assert_eq!(err.user_message(), "Title already taken");
    }

    /// Expect auth failures to ask the user to log in again
    #[test]
    fn unauthorized_statuses() {
        let expired = ApiError::Status {
            status: 401,
            message: "jwt expired".to_string(),
        };

        assert!(expired.is_unauthorized());
        assert!(ApiError::Unauthenticated.is_unauthorized());
        assert_eq!(
            expired.user_message(),
            "Your session has expired, please log in again"
        );
    }
}
