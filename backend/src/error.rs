use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use item_types::MessageResponse;

use crate::gateway::GatewayError;

pub const ITEM_NOT_FOUND: &str = "Item not found";

/// An HTTP status with a `{"message": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: ITEM_NOT_FOUND.to_string(),
        }
    }

    /// Create and update report every failure as 400, storage faults included.
    pub fn write_failure(err: GatewayError) -> Self {
        log_storage_fault(&err);
        Self::bad_request(err.to_string())
    }

    /// List, get and delete report every failure as 500.
    pub fn read_failure(err: GatewayError) -> Self {
        log_storage_fault(&err);
        Self::internal(err.to_string())
    }
}

fn log_storage_fault(err: &GatewayError) {
    if let GatewayError::Storage(e) = err {
        tracing::error!(error = %e, "item storage failure");
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}
