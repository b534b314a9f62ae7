use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::storage::DEFAULT_NOTES_FILE;

pub const NOTES_FILE_ENV: &str = "STICKIES_FILE";
pub const HOST_ENV: &str = "STICKIES_HOST";
pub const PORT_ENV: &str = "STICKIES_PORT";

/// Resolve the notes file: explicit flag, then `STICKIES_FILE`, then `notes.json`.
pub fn resolve_notes_file(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| env::var_os(NOTES_FILE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_FILE))
}

/// How the board page is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Heading shown above the grid
    pub title: String,
    /// Number of grid columns, at least 1
    pub columns: usize,
    /// Body characters shown in a collapsed note
    pub preview_chars: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Ayani".to_string(),
            columns: 3,
            preview_chars: 100,
        }
    }
}

/// Where the web board listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `STICKIES_HOST` / `STICKIES_PORT`, then by flags.
    pub fn resolve(host: Option<String>, port: Option<u16>) -> Self {
        let defaults = Self::default();

        let host = host
            .or_else(|| env::var(HOST_ENV).ok())
            .unwrap_or(defaults.host);

        let port = port
            .or_else(|| env::var(PORT_ENV).ok().and_then(|s| s.parse().ok()))
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
