//! Axum route handlers for the Moodboard API.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::layout::NodeId;
use crate::moodboard::messages::{dispatch, PluginMessage, UiMessage};
use crate::scene::{export_frame, ExportFormat, FrameSnapshot, FrameSummary, PaintStyle, TextStyle};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylesResponse {
    pub paint_styles: Vec<PaintStyle>,
    pub text_styles: Vec<TextStyle>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/messages
///
/// Runs one plugin panel command and returns the messages posted back to the panel.
pub async fn handle_message(
    State(state): State<AppState>,
    Json(message): Json<PluginMessage>,
) -> Json<Vec<UiMessage>> {
    Json(dispatch(&state, message).await)
}

/// GET /api/v1/moodboards
pub async fn handle_list_moodboards(State(state): State<AppState>) -> Json<Vec<FrameSummary>> {
    let document = state.document.read().await;
    Json(document.frames().iter().map(|f| f.summary()).collect())
}

/// GET /api/v1/moodboards/:id
pub async fn handle_get_moodboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FrameSnapshot>, AppError> {
    let document = state.document.read().await;
    let frame = document
        .frame(NodeId(id))
        .ok_or_else(|| AppError::NotFound(format!("Moodboard {id} not found")))?;
    Ok(Json(frame.snapshot()))
}

/// GET /api/v1/moodboards/:id/export?format=svg|json
pub async fn handle_export_moodboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let document = state.document.read().await;
    let frame = document
        .frame(NodeId(id))
        .ok_or_else(|| AppError::NotFound(format!("Moodboard {id} not found")))?;
    let content = export_frame(frame, query.format)?;
    Ok(([(header::CONTENT_TYPE, query.format.content_type())], content).into_response())
}

/// GET /api/v1/styles
pub async fn handle_list_styles(State(state): State<AppState>) -> Json<StylesResponse> {
    let document = state.document.read().await;
    Json(StylesResponse {
        paint_styles: document.paint_styles().to_vec(),
        text_styles: document.text_styles().to_vec(),
    })
}
