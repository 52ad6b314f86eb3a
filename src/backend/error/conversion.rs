/**
 * Error Conversion
 *
 * This module turns backend errors into HTTP responses, so handlers and
 * middleware can return `Result<_, BackendError>` directly.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::{AuthError, BackendError};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Auth(err) if err.is_internal() => {
                tracing::error!(error = %err, "request failed with internal error");
            }
            Self::InvalidBody { message } => {
                tracing::debug!(%message, "rejected request body");
            }
            _ => {}
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        BackendError::from(self).into_response()
    }
}
