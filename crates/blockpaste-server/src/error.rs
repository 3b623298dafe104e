//! HTTP error type.
//!
//! Every failure in a request ends up here. The client gets a status and a
//! short fixed message; the underlying error is logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blockpaste_core::{CoreError, ValidationError};
use blockpaste_store::StoreError;
use thiserror::Error;

/// Request failure, mapped onto an HTTP status by [`IntoResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-caused. Raised before any store call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Cipher or envelope failure.
    #[error(transparent)]
    Core(CoreError),

    /// Block store failure, including not-found and timeout.
    #[error(transparent)]
    Store(StoreError),

    /// No route matches the request.
    #[error("unrecognized request: {0}")]
    UnknownRoute(String),
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation(v) => Self::Validation(v),
            other => Self::Core(other),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Invalid(v) => Self::Validation(v),
            StoreError::TooLarge { size, max } => {
                Self::Validation(ValidationError::TooLarge { size, max })
            }
            other => Self::Store(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(ValidationError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Validation(_) | Self::UnknownRoute(_) => StatusCode::BAD_REQUEST,
            Self::Store(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message returned to the client. Never includes store or cipher detail.
    fn public_message(&self) -> String {
        match self {
            Self::Validation(v) => v.to_string(),
            Self::UnknownRoute(_) => "Unrecognized request, see / for usage".into(),
            Self::Store(e) if e.is_not_found() => "Paste not found".into(),
            Self::Store(_) => "Paste store request failed".into(),
            Self::Core(CoreError::Authentication) => "Paste decryption failed".into(),
            Self::Core(CoreError::Encryption(_)) => "Paste encryption failed".into(),
            Self::Core(_) => "Paste could not be decoded".into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }
        (status, self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (ValidationError::EmptyName.into(), StatusCode::BAD_REQUEST),
            (
                ValidationError::TooLarge { size: 2, max: 1 }.into(),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                StoreError::NotFound("/blocks/x".into()).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                StoreError::Timeout(Duration::from_millis(250)).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                StoreError::TooLarge { size: 2, max: 1 }.into(),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                StoreError::Backend("down".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::Authentication.into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::Format("bad json".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::Validation(ValidationError::NameNotSupported).into(),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err:?}");
        }
    }

    #[test]
    fn test_messages_do_not_leak_detail() {
        let err: ApiError = StoreError::Backend("secret connection string".into()).into();
        assert!(!err.public_message().contains("secret"));

        let err: ApiError = CoreError::Format("expected `:` at line 1".into()).into();
        assert_eq!(err.public_message(), "Paste could not be decoded");

        let err: ApiError = StoreError::Timeout(Duration::from_millis(250)).into();
        assert_eq!(err.public_message(), "Paste not found");
    }
}
