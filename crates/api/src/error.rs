use avolve_core::error::CoreError;
use avolve_db::PlatformError;
use avolve_mail::MailError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`PlatformError`] for failed
/// platform calls, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent `{ "error", "code" }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `avolve_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed call into the backend platform.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Email could not be built or delivered.
    #[error(transparent)]
    Mail(#[from] MailError),

    /// A malformed request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },

            // --- Platform errors ---
            AppError::Platform(err) => classify_platform_error(err),

            // --- Mail errors ---
            AppError::Mail(err) => {
                tracing::error!(error = %err, "Email delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a platform error into an HTTP status, error code, and message.
///
/// - Remote 401/403 keep their meaning.
/// - Other remote 4xx are procedure-level rejections (e.g. an exception
///   raised inside a database function) and map to 400 with the remote
///   message.
/// - Transport failures, undecodable payloads and remote 5xx map to 500
///   with a sanitized message.
fn classify_platform_error(err: &PlatformError) -> (StatusCode, &'static str, String) {
    match err {
        PlatformError::Remote { status: 401, .. } => (
            StatusCode::UNAUTHORIZED,
            "UNAUTHORIZED",
            "Platform rejected the access token".to_string(),
        ),
        PlatformError::Remote { status: 403, .. } => (
            StatusCode::FORBIDDEN,
            "FORBIDDEN",
            "Not permitted to perform this action".to_string(),
        ),
        PlatformError::Remote {
            status, message, ..
        } if (400..500).contains(status) => {
            (StatusCode::BAD_REQUEST, "RPC_ERROR", message.clone())
        }
        other => {
            tracing::error!(error = %other, "Platform error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}
