use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::engine::EngineError;

/// Engine errors and extractor rejections as HTTP responses. Bodies are
/// always `{"message": ...}`.
#[derive(Debug)]
pub enum ApiError {
    Engine(EngineError),
    /// Body, path or query could not be decoded.
    InvalidRequest { status: StatusCode, message: String },
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: r.status(),
            message: r.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self {
        Self::InvalidRequest {
            status: r.status(),
            message: r.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        Self::InvalidRequest {
            status: r.status(),
            message: r.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Engine(EngineError::RoomNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Engine(
                EngineError::SlotConflict(_)
                | EngineError::InvalidSlot { .. }
                | EngineError::InvalidPrice(_)
                | EngineError::LimitExceeded(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::InvalidRequest { status, .. } => *status,
        }
    }

    /// Short label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            ApiError::Engine(EngineError::RoomNotFound(_)) => "room_not_found",
            ApiError::Engine(EngineError::SlotConflict(_)) => "slot_conflict",
            ApiError::Engine(EngineError::InvalidSlot { .. }) => "invalid_slot",
            ApiError::Engine(EngineError::InvalidPrice(_)) => "invalid_price",
            ApiError::Engine(EngineError::LimitExceeded(_)) => "limit_exceeded",
            ApiError::InvalidRequest { .. } => "invalid_request",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Engine(EngineError::RoomNotFound(_)) => "Room not found!".to_string(),
            ApiError::Engine(EngineError::SlotConflict(_)) => {
                "Room is already booked for the selected time.".to_string()
            }
            ApiError::Engine(other) => other.to_string(),
            ApiError::InvalidRequest { message, .. } => message.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "message": self.message() }))).into_response()
    }
}
