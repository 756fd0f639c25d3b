use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use rw_core::Error;

/// Boundary wrapper turning the core error taxonomy into HTTP responses.
///
/// Every failure body is `{"error": <message>}`; the status code carries
/// the failure kind.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::UpstreamUnavailable(_) | Error::UpstreamMalformed(_) => StatusCode::BAD_GATEWAY,
            Error::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self.0, status = %status, "request failed");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
