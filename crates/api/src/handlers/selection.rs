//! # Selection Handlers
//!
//! Handlers for reading and mutating a namespace's slot selection and
//! for rendering it into the two clipboard text formats.
//!
//! Writes follow the last-write-wins model of the backing store: a
//! toggle reads the current document, flips one slot, and writes the
//! whole selection back. Two concurrent togglers on the same namespace
//! can clobber each other; the loser's view is corrected by the next
//! read. A failed write is returned to the caller as an error rather
//! than silently acknowledged.

use axum::{
    extract::{Path, State},
    Json,
};
use slotsync_core::format::{admin_format, list_format};
use slotsync_core::models::selection::{
    RenderedTextResponse, SelectionResponse, ToggleRequest,
};
use std::sync::Arc;
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns the namespace's current selection in chronological order.
///
/// # Endpoint
///
/// ```text
/// GET /api/selections/:namespace
/// ```
///
/// A namespace nobody has written to yet is an empty selection, not an
/// error.
#[axum::debug_handler]
pub async fn get_selection(
    State(state): State<Arc<ApiState>>,
    Path(namespace): Path<String>,
) -> Result<Json<SelectionResponse>, AppError> {
    let slots = state.sync.fetch(&namespace).await?;

    Ok(Json(SelectionResponse::from_slots(&namespace, &slots)))
}

/// Toggles one (date, hour) slot in the namespace's selection.
///
/// # Endpoint
///
/// ```text
/// POST /api/selections/:namespace/toggle
/// { "date": "2026-01-04", "hour": 21 }
/// ```
///
/// Present becomes absent, absent becomes present; the full updated
/// selection is written back to the store and returned. An hour outside
/// the bookable grid is a 400; a store failure is a 500 and the write is
/// not retried (the next toggle writes current state again).
#[axum::debug_handler]
pub async fn toggle_slot(
    State(state): State<Arc<ApiState>>,
    Path(namespace): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let current = state.sync.fetch(&namespace).await?;
    let updated = current.toggle(payload.date, payload.hour)?;

    state.sync.write(&namespace, &updated).await?;
    info!(%namespace, count = updated.len(), "selection updated");

    Ok(Json(SelectionResponse::from_slots(&namespace, &updated)))
}

/// Renders the namespace's selection into both clipboard text formats.
///
/// # Endpoint
///
/// ```text
/// GET /api/selections/:namespace/text
/// ```
///
/// Both renderings are produced from the same snapshot; an empty
/// selection yields empty strings.
#[axum::debug_handler]
pub async fn render_selection(
    State(state): State<Arc<ApiState>>,
    Path(namespace): Path<String>,
) -> Result<Json<RenderedTextResponse>, AppError> {
    let slots = state.sync.fetch(&namespace).await?;

    Ok(Json(RenderedTextResponse {
        count: slots.len(),
        list: list_format(&slots),
        admin: admin_format(&slots),
    }))
}
