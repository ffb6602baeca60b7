use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use tracing::{error, warn};

/// Handler error: validation failures map to 400, everything else to 500.
/// The body is the error's short plain-text message.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e) }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) | ServiceError::CsvFormat { .. } | ServiceError::Ingest(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.0.to_string();
        if status.is_server_error() {
            error!(error = %msg, "request failed");
        } else {
            warn!(error = %msg, "request rejected");
        }
        (status, msg).into_response()
    }
}
