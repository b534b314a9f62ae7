//! Web board: an axum app serving the notes grid and its edit forms.
//!
//! Every mutating route executes one [`Command`](crate::command::Command)
//! under the store lock and redirects back to `/`.

mod render;
mod routes;

pub use render::render_board;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::sync::Mutex;

use crate::config::{BoardConfig, ServerConfig};
use crate::error::Result;
use crate::storage::NoteStore;

pub struct AppState {
    pub store: Mutex<NoteStore>,
    pub board: BoardConfig,
}

impl AppState {
    pub fn new(store: NoteStore, board: BoardConfig) -> Self {
        Self {
            store: Mutex::new(store),
            board,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::board))
        .route("/api/notes", get(routes::notes))
        .route("/notes", post(routes::add_note))
        .route("/notes/{index}/edit", post(routes::select_note))
        .route("/edit/save", post(routes::save_edit))
        .route("/edit/delete", post(routes::delete_edit))
        .route("/edit/cancel", post(routes::cancel_edit))
        .with_state(state)
}

/// Serve the board until Ctrl-C.
pub async fn serve(store: NoteStore, board: BoardConfig, server: ServerConfig) -> Result<()> {
    let notes_file = store.path().display().to_string();
    let app = router(Arc::new(AppState::new(store, board)));

    let addr = server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(notes_file = %notes_file, "Sticky notes board listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
    }
}
