//! REST API module for HTTP endpoints
//!
//! - `GET    /api/eventos`     - Full event collection
//! - `POST   /api/eventos`     - Create an event
//! - `PUT    /api/eventos/:id` - Update an event
//! - `DELETE /api/eventos/:id` - Delete an event
//!
//! Every response is a JSON envelope carrying `success`, plus either the
//! payload or an `error` message.

pub mod eventos;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::types::Evento;

/// `{success: true, eventos: [...]}`
#[derive(Debug, Serialize)]
pub struct EventosResponse {
    pub success: bool,
    pub eventos: Vec<Evento>,
}

impl EventosResponse {
    pub fn new(eventos: Vec<Evento>) -> Self {
        Self {
            success: true,
            eventos,
        }
    }
}

/// `{success: true, evento: {...}}`
#[derive(Debug, Serialize)]
pub struct EventoResponse {
    pub success: bool,
    pub evento: Evento,
}

impl EventoResponse {
    pub fn new(evento: Evento) -> Self {
        Self {
            success: true,
            evento,
        }
    }
}

/// `{success: true, message: "..."}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `{success: false, error: "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Handler failures, one per HTTP status class
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Nombre y fecha son requeridos")]
    Validation,
    #[error("Evento no encontrado")]
    NotFound,
    /// Persisting the collection failed; carries the operation-specific message
    #[error("{0}")]
    Storage(&'static str),
    #[error("Error interno del servidor")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self, "request failed");
        }
        let body = Json(ErrorResponse {
            success: false,
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;
