use crate::curl::CurlParseError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(#[from] CurlParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            AppError::UnknownEndpoint(_) => {
                (StatusCode::NOT_FOUND, "UNKNOWN_ENDPOINT", self.to_string())
            }
            AppError::InvalidCommand(CurlParseError::Empty) => {
                (StatusCode::BAD_REQUEST, "EMPTY_COMMAND", self.to_string())
            }
            AppError::InvalidCommand(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_COMMAND", self.to_string())
            }
            AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", self.to_string())
            }
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "message": message,
                "code": error_code,
            }
        }));

        (status, body).into_response()
    }
}
