//! HTTP error response mapping.

use std::str::FromStr;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use plantcare_domain::error::{PlantCareError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`PlantCareError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(PlantCareError);

impl From<PlantCareError> for ApiError {
    fn from(err: PlantCareError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            PlantCareError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            PlantCareError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            PlantCareError::PlantNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            PlantCareError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Parse an identifier taken from the request path.
pub(crate) fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| {
        ApiError::from(PlantCareError::from(ValidationError::InvalidId(
            raw.to_string(),
        )))
    })
}
