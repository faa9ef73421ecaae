use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stockroom_core::store::StoreError;

/// Error type returned by the API handlers.
///
/// Maps store errors and payload validation failures onto the wire
/// contract: a status code plus a JSON body with a `detail` field.
#[derive(Debug)]
pub enum ApiError {
    Store(StoreError),
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Store(StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Item non trouvé".to_string())
            }
            ApiError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        tracing::warn!(status = %status, detail = %detail, "API error");

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
