use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures surfaced by the [`Mobile`](crate::mobile::Mobile) facade.
#[derive(Debug, thiserror::Error)]
pub enum MobileError {
    #[error("no contact was found for the name {0:?}")]
    ContactNotFound(String),

    #[error("a phone number and the message body are required to send an SMS")]
    MissingArgument,

    #[error("the phone number {0:?} is invalid")]
    InvalidPhoneNumber(String),

    #[error(transparent)]
    Carrier(anyhow::Error),

    #[error("contact directory error: {0:#}")]
    Directory(anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Mobile(#[from] MobileError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("SMS tracking error: {0}")]
    Tracking(String),

    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::Mobile(MobileError::ContactNotFound(_)) => "contact_not_found",
            AppError::Mobile(MobileError::MissingArgument) => "missing_argument",
            AppError::Mobile(MobileError::InvalidPhoneNumber(_)) => "invalid_phone_number",
            AppError::Mobile(MobileError::Carrier(_)) => "carrier",
            AppError::Mobile(MobileError::Directory(_)) => "directory",
            AppError::Database(_) => "database",
            AppError::Tracking(_) => "tracking",
            AppError::BadRequest(_) => "bad_request",
            AppError::Unauthorized => "unauthorized",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Mobile(MobileError::ContactNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Mobile(MobileError::MissingArgument) => StatusCode::BAD_REQUEST,
            AppError::Mobile(MobileError::InvalidPhoneNumber(_)) => StatusCode::BAD_REQUEST,
            AppError::Mobile(MobileError::Carrier(_)) => StatusCode::BAD_GATEWAY,
            AppError::Mobile(MobileError::Directory(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Tracking(_) => StatusCode::BAD_GATEWAY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({ "error": self.to_string(), "kind": self.kind() });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_error_keeps_root_cause() {
        let err = MobileError::Directory(
            anyhow::anyhow!("disk I/O error").context("failed to look up contact \"Ana\""),
        );
        let msg = err.to_string();
        assert!(msg.contains("failed to look up contact"));
        assert!(msg.ends_with("disk I/O error"));
    }

    #[test]
    fn test_carrier_error_is_transparent() {
        let err = MobileError::Carrier(anyhow::anyhow!("network unreachable"));
        assert_eq!(err.to_string(), "network unreachable");
    }
}
