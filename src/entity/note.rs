// src/entity/note.rs
use serde::{Deserialize, Serialize};

/// A sticky note.
///
/// Records with keys other than `title` and `body` are rejected rather than
/// silently dropped on the next save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    pub title: String,
    pub body: String,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The first `max_chars` characters of the body, and whether anything was cut.
    pub fn preview(&self, max_chars: usize) -> (&str, bool) {
        match self.body.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => (&self.body[..byte_idx], true),
            None => (self.body.as_str(), false),
        }
    }
}

/// A note as it may appear on disk.
///
/// Older notes files stored each note as a bare string holding only the title.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StoredNote {
    Legacy(String),
    Record(Note),
}

impl From<StoredNote> for Note {
    fn from(stored: StoredNote) -> Self {
        match stored {
            StoredNote::Legacy(title) => Note::new(title, ""),
            StoredNote::Record(note) => note,
        }
    }
}
