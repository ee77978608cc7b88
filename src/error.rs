//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "race not found: 999",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see [`GatewayError`] code ranges).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// `Clone` so that a memoized initialization outcome can be handed to
/// every caller of `init`.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3001–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Race with the given ID was not found.
    #[error("race not found: {0}")]
    RaceNotFound(i64),

    /// The one-time repository initialization failed. Permanent for the
    /// lifetime of the repository.
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// The store rejected or could not execute a query.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// A fetched row did not have the expected shape.
    #[error("row decode error: {0}")]
    RowDecode(String),

    /// A stored timestamp could not be converted to an absolute instant.
    #[error("timestamp conversion error: {0}")]
    TimestampConversion(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::RaceNotFound(_) => 2001,
            Self::PersistenceError(_) => 3001,
            Self::Initialization(_) => 3002,
            Self::RowDecode(_) => 3003,
            Self::TimestampConversion(_) => 3004,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::RaceNotFound(_) => StatusCode::NOT_FOUND,
            Self::Initialization(_)
            | Self::PersistenceError(_)
            | Self::RowDecode(_)
            | Self::TimestampConversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for GatewayError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => Self::RowDecode(err.to_string()),
            other => Self::PersistenceError(other.to_string()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = GatewayError::RaceNotFound(999);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
        assert_eq!(err.to_string(), "race not found: 999");
    }

    #[test]
    fn server_side_variants_map_to_500() {
        let errs = [
            GatewayError::Initialization("seed".to_string()),
            GatewayError::PersistenceError("gone".to_string()),
            GatewayError::RowDecode("bad column".to_string()),
            GatewayError::TimestampConversion("bad ts".to_string()),
        ];
        for err in errs {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn column_errors_classify_as_row_decode() {
        let err = GatewayError::from(sqlx::Error::ColumnNotFound("visible".to_string()));
        assert!(matches!(err, GatewayError::RowDecode(_)));

        let err = GatewayError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, GatewayError::PersistenceError(_)));
    }

    #[tokio::test]
    async fn into_response_renders_error_body() {
        let response = GatewayError::InvalidRequest("bad filter".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is not json");
        };
        assert_eq!(json["error"]["code"], 1001);
        assert_eq!(json["error"]["message"], "invalid request: bad filter");
        assert!(json["error"].get("details").is_none());
    }
}
