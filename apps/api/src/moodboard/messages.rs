//! Plugin message protocol.
//!
//! The panel sends one `PluginMessage`; the controller answers with the
//! ordered list of `UiMessage`s it would have posted back. Failures become a
//! single `error` message rather than an HTTP error status.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::layout::NodeId;
use crate::moodboard::generator::{BoardKind, GenerateRequest, GeneratedMoodboard};
use crate::scene::{export_frame, ExportFormat};
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    GenerateMoodboard {
        data: GenerateRequest,
    },
    GenerateRetroMoodboard {
        data: GenerateRequest,
    },
    ExportMoodboard {
        #[serde(default)]
        format: ExportFormat,
        /// Defaults to the most recent moodboard.
        #[serde(default, rename = "moodboardId")]
        moodboard_id: Option<NodeId>,
    },
    Cancel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImagesLoaded {
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FontsSuggested {
    pub fonts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReady {
    pub format: ExportFormat,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    Loading {
        message: String,
    },
    ImagesLoaded {
        data: ImagesLoaded,
    },
    FontsSuggested {
        data: FontsSuggested,
    },
    Success {
        message: String,
        #[serde(rename = "moodboardId")]
        moodboard_id: NodeId,
    },
    ExportReady {
        data: ExportReady,
    },
    Closing {
        message: String,
    },
    Error {
        message: String,
    },
}

impl UiMessage {
    fn error(err: &AppError) -> Self {
        error!("Plugin error: {err}");
        UiMessage::Error {
            message: err.user_message(),
        }
    }
}

/// Runs one panel command against the shared state.
pub async fn dispatch(state: &AppState, message: PluginMessage) -> Vec<UiMessage> {
    match message {
        PluginMessage::GenerateMoodboard { data } => {
            generate(state, data, BoardKind::Standard).await
        }
        PluginMessage::GenerateRetroMoodboard { data } => {
            generate(state, data, BoardKind::Retro).await
        }
        PluginMessage::ExportMoodboard {
            format,
            moodboard_id,
        } => match export(state, format, moodboard_id).await {
            Ok(ready) => vec![UiMessage::ExportReady { data: ready }],
            Err(e) => vec![UiMessage::error(&e)],
        },
        PluginMessage::Cancel => {
            info!("Cancel requested, shutting down");
            state.shutdown.notify_one();
            vec![UiMessage::Closing {
                message: "Closing moodboard generator".to_string(),
            }]
        }
    }
}

async fn generate(state: &AppState, request: GenerateRequest, kind: BoardKind) -> Vec<UiMessage> {
    let label = match kind {
        BoardKind::Standard => "moodboard",
        BoardKind::Retro => "retro moodboard",
    };
    let mut messages = vec![UiMessage::Loading {
        message: format!("Generating {label}..."),
    }];

    let mut rng = state.rng(request.seed);
    match state.generator().generate(&request, kind, &mut rng).await {
        Ok(board) => messages.extend(success_messages(board, label)),
        Err(e) => messages.push(UiMessage::error(&e)),
    }
    messages
}

fn success_messages(board: GeneratedMoodboard, label: &str) -> Vec<UiMessage> {
    let mut capitalized = label.to_string();
    if let Some(first) = capitalized.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    vec![
        UiMessage::ImagesLoaded {
            data: ImagesLoaded {
                images: board.images,
            },
        },
        UiMessage::FontsSuggested {
            data: FontsSuggested { fonts: board.fonts },
        },
        UiMessage::Success {
            message: format!("{capitalized} generated successfully!"),
            moodboard_id: board.moodboard_id,
        },
    ]
}

async fn export(
    state: &AppState,
    format: ExportFormat,
    moodboard_id: Option<NodeId>,
) -> Result<ExportReady, AppError> {
    let document = state.document.read().await;
    let frame = match moodboard_id {
        Some(id) => document
            .frame(id)
            .ok_or_else(|| AppError::NotFound(format!("Moodboard {id} not found")))?,
        None => document.latest_moodboard().ok_or_else(|| {
            AppError::NotFound("Please select a moodboard to export".to_string())
        })?,
    };
    let content = export_frame(frame, format)?;
    Ok(ExportReady { format, content })
}
