//! Axum route handlers for the notes board.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum::Form;
use serde::{Deserialize, Serialize};

use super::render::render_board;
use super::AppState;
use crate::command::Command;
use crate::entity::Note;
use crate::error::StickiesError;

impl IntoResponse for StickiesError {
    fn into_response(self) -> Response {
        let status = match self {
            StickiesError::NoteNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(status = %status, error = %self, "request failed");
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct BoardSnapshot {
    pub notes: Vec<Note>,
    pub edit_cursor: Option<usize>,
}

/// Browsers submit textarea line breaks as CRLF.
fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}

async fn run(state: &AppState, command: Command) -> Result<Redirect, StickiesError> {
    let mut store = state.store.lock().await;
    command.execute(&mut store)?;
    Ok(Redirect::to("/"))
}

// GET /
pub async fn board(State(state): State<Arc<AppState>>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_board(&store, &state.board))
}

// GET /api/notes
pub async fn notes(State(state): State<Arc<AppState>>) -> Json<BoardSnapshot> {
    let store = state.store.lock().await;
    Json(BoardSnapshot {
        notes: store.notes().to_vec(),
        edit_cursor: store.edit_cursor(),
    })
}

// POST /notes
pub async fn add_note(State(state): State<Arc<AppState>>) -> Result<Redirect, StickiesError> {
    run(&state, Command::AddNote).await
}

// POST /notes/{index}/edit
pub async fn select_note(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Redirect, StickiesError> {
    run(&state, Command::SelectForEdit(index)).await
}

// POST /edit/save
pub async fn save_edit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EditForm>,
) -> Result<Redirect, StickiesError> {
    run(
        &state,
        Command::SaveEdit {
            title: normalize_newlines(form.title),
            body: normalize_newlines(form.body),
        },
    )
    .await
}

// POST /edit/delete
pub async fn delete_edit(State(state): State<Arc<AppState>>) -> Result<Redirect, StickiesError> {
    run(&state, Command::DeleteEdit).await
}

// POST /edit/cancel
pub async fn cancel_edit(State(state): State<Arc<AppState>>) -> Result<Redirect, StickiesError> {
    run(&state, Command::CancelEdit).await
}
