//! Event endpoints

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    Json,
};
use tracing::{debug, info};

use super::{ApiError, ApiResult, EventoResponse, EventosResponse, MessageResponse};
use crate::api::state::AppState;
use crate::types::{Evento, EventoDatos, EventoInput};
use crate::utils::{now_iso8601, now_millis};

/// GET /api/eventos - Full collection, in insertion order
pub async fn list_eventos(State(state): State<Arc<AppState>>) -> ApiResult<EventosResponse> {
    let eventos = state.store.load().await;
    Ok(Json(EventosResponse::new(eventos)))
}

/// POST /api/eventos - Append a new event
pub async fn create_evento(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<EventoResponse> {
    let datos = validated(&headers, &body)?;

    let _guard = state.lock_writes().await;
    let mut eventos = state.store.load().await;

    let evento = Evento::new(next_id(&eventos), datos.nombre, datos.fecha, now_iso8601());
    eventos.push(evento.clone());

    if !state.store.save(&eventos).await {
        return Err(ApiError::Storage("Error al guardar evento"));
    }

    info!(id = evento.id, "created evento");
    Ok(Json(EventoResponse::new(evento)))
}

/// PUT /api/eventos/:id - Replace nombre/fecha of an existing event
pub async fn update_evento(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<EventoResponse> {
    let datos = validated(&headers, &body)?;
    let id = parse_id(&id)?;

    let _guard = state.lock_writes().await;
    let mut eventos = state.store.load().await;

    let evento = eventos
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(ApiError::NotFound)?;
    evento.apply(datos, now_iso8601());
    let evento = evento.clone();

    if !state.store.save(&eventos).await {
        return Err(ApiError::Storage("Error al actualizar evento"));
    }

    info!(id, "updated evento");
    Ok(Json(EventoResponse::new(evento)))
}

/// DELETE /api/eventos/:id - Remove every event with the given id
pub async fn delete_evento(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_id(&id)?;

    let _guard = state.lock_writes().await;
    let mut eventos = state.store.load().await;

    let before = eventos.len();
    eventos.retain(|e| e.id != id);
    if eventos.len() == before {
        return Err(ApiError::NotFound);
    }

    if !state.store.save(&eventos).await {
        return Err(ApiError::Storage("Error al eliminar evento"));
    }

    info!(id, "deleted evento");
    Ok(Json(MessageResponse::new("Evento eliminado correctamente")))
}

/// Parse and validate a create/update body
///
/// A request without a JSON content type, or with an empty body, carries no
/// fields at all and fails validation. Unparseable JSON is an internal error.
fn validated(headers: &HeaderMap, body: &[u8]) -> Result<EventoDatos, ApiError> {
    let input = if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        EventoInput::default()
    } else {
        serde_json::from_slice::<EventoInput>(body).map_err(|e| {
            debug!(error = %e, "rejected request body");
            ApiError::Internal
        })?
    };
    input.validate().ok_or(ApiError::Validation)
}

/// `application/json` or any `+json` media type
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| {
            let essence = essence.trim().to_ascii_lowercase();
            essence == "application/json"
                || (essence.starts_with("application/") && essence.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// Ids that are not integers cannot match any stored event
///
/// The whole segment must be an integer: `12abc` is not read as `12`.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse().map_err(|_| ApiError::NotFound)
}

/// Creation time in milliseconds, bumped past the largest id on collision
fn next_id(eventos: &[Evento]) -> i64 {
    let id = now_millis();
    if eventos.iter().any(|e| e.id == id) {
        eventos.iter().map(|e| e.id).max().unwrap_or(id) + 1
    } else {
        id
    }
}
