use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StickiesError {
    #[error("Notes file {} is corrupt: {source}", .path.display())]
    DataCorruption {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No note at index {0}")]
    NoteNotFound(usize),

    #[error("Use --force to delete in non-interactive mode")]
    NonInteractive,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StickiesError>;
