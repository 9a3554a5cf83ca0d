// HTTP API Error Types
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::auth::AuthOutcome;
use crate::backend::BackendError;
use crate::commands::ArgumentError;

pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 400 Bad Request, reported by the daemon
    CommandFailed(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 422 Unprocessable Entity (well-formed request, unacceptable value)
    UnprocessableEntity {
        message: String,
        field_errors: HashMap<String, String>,
    },

    // 429 Too Many Requests
    TooManyRequests(String),

    // 502 Bad Gateway (daemon replied with something unreadable)
    BadGateway(String),

    // 503 Service Unavailable (daemon unreachable)
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::CommandFailed(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::UnprocessableEntity { .. } => 422,
            ApiError::TooManyRequests(_) => 429,
            ApiError::BadGateway(_) => 502,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::CommandFailed(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::UnprocessableEntity { message, .. } => message,
            ApiError::TooManyRequests(msg) => msg,
            ApiError::BadGateway(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::UnprocessableEntity {
                message,
                field_errors,
            } if !field_errors.is_empty() => {
                json!({
                    "error": true,
                    "message": message,
                    "code": self.error_code(),
                    "field_errors": field_errors
                })
            }
            _ => {
                json!({
                    "error": true,
                    "message": self.message(),
                    "code": self.error_code()
                })
            }
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::CommandFailed(_) => "COMMAND_ERROR",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::UnprocessableEntity { .. } => "UNPROCESSABLE_ENTITY",
            ApiError::TooManyRequests(_) => "TOO_MANY_REQUESTS",
            ApiError::BadGateway(_) => "BAD_GATEWAY",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn command_failed(message: impl Into<String>) -> Self {
        ApiError::CommandFailed(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn unprocessable_entity(
        message: impl Into<String>,
        field_errors: HashMap<String, String>,
    ) -> Self {
        ApiError::UnprocessableEntity {
            message: message.into(),
            field_errors,
        }
    }

    pub fn too_many_requests(message: impl Into<String>) -> Self {
        ApiError::TooManyRequests(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError::BadGateway(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }

    /// Rejection for a failed auth check; `None` when the request may pass
    pub fn from_auth_outcome(outcome: AuthOutcome) -> Option<Self> {
        match outcome {
            AuthOutcome::Authenticated => None,
            AuthOutcome::Unauthorized => Some(ApiError::unauthorized("Invalid or missing API key")),
            AuthOutcome::RateLimited => Some(ApiError::too_many_requests(
                "Too many failed authentication attempts",
            )),
        }
    }
}

// Convert other error types to ApiError
impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Connection(msg) => {
                tracing::error!("Devil socket unavailable: {}", msg);
                ApiError::service_unavailable(msg)
            }
            BackendError::Protocol(msg) => {
                tracing::error!("Malformed devil response: {}", msg);
                ApiError::bad_gateway(msg)
            }
            BackendError::Command(msg) => ApiError::command_failed(msg),
        }
    }
}

impl From<ArgumentError> for ApiError {
    fn from(err: ArgumentError) -> Self {
        match err {
            ArgumentError::Invalid(msg) => ApiError::bad_request(msg),
            ArgumentError::Rejected { field, message } => {
                let mut field_errors = HashMap::new();
                field_errors.insert(field.to_string(), message.clone());
                ApiError::unprocessable_entity(message, field_errors)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                ApiError::unprocessable_entity(err.body_text(), HashMap::new())
            }
            other => ApiError::bad_request(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_mapping() {
        let err = ApiError::from(BackendError::connection("Cannot connect to devil socket: gone"));
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.message(), "Cannot connect to devil socket: gone");

        assert_eq!(ApiError::from(BackendError::protocol("bad")).status_code(), 502);

        let err = ApiError::from(BackendError::command("quota exceeded"));
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.to_json(),
            json!({"error": true, "message": "quota exceeded", "code": "COMMAND_ERROR"})
        );
    }

    #[test]
    fn test_argument_error_mapping() {
        let err = ApiError::from(ArgumentError::invalid("Provide port or set random=true"));
        assert_eq!(err.status_code(), 400);

        let err = ApiError::from(ArgumentError::rejected("mysql_privileges", "ALL must stand alone"));
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.to_json()["field_errors"]["mysql_privileges"], "ALL must stand alone");
    }

    #[test]
    fn test_auth_outcome_mapping() {
        assert_eq!(ApiError::from_auth_outcome(AuthOutcome::Authenticated), None);

        let unauthorized = ApiError::from_auth_outcome(AuthOutcome::Unauthorized).unwrap();
        assert_eq!(unauthorized.status_code(), 401);
        assert_eq!(unauthorized.message(), "Invalid or missing API key");

        let limited = ApiError::from_auth_outcome(AuthOutcome::RateLimited).unwrap();
        assert_eq!(limited.status_code(), 429);
        assert_eq!(limited.message(), "Too many failed authentication attempts");
    }
}
