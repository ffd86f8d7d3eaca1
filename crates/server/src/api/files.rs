//! Generated file download handler.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use mirage_core::GenerateError;

use crate::state::AppState;

/// Error body for failed generations.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn from_generate_error(error: &GenerateError) -> (StatusCode, Self) {
        let status = StatusCode::from_u16(error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = if status.is_server_error() {
            format!("Error generating file: {}", error)
        } else {
            error.to_string()
        };
        (status, Self { error: message })
    }
}

/// `GET /{name}.{ext}`
pub async fn get_file(State(state): State<Arc<AppState>>, Path(file): Path<String>) -> Response {
    match state.generator().generate_file(&file).await {
        Ok(generated) => (
            [
                (header::CONTENT_TYPE, generated.content_type.to_string()),
                (header::CONTENT_DISPOSITION, generated.content_disposition()),
            ],
            generated.body,
        )
            .into_response(),
        Err(e) => {
            let (status, body) = ErrorResponse::from_generate_error(&e);
            (status, Json(body)).into_response()
        }
    }
}
