use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::entity::{Note, StoredNote};
use crate::error::{Result, StickiesError};

pub const DEFAULT_NOTES_FILE: &str = "notes.json";

/// Read the notes file, normalizing legacy entries into records.
///
/// A missing file is an empty board.
pub fn load_notes(path: &Path) -> Result<Vec<Note>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let stored: Vec<StoredNote> =
        serde_json::from_slice(&bytes).map_err(|source| StickiesError::DataCorruption {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(stored.into_iter().map(Note::from).collect())
}

/// Overwrite the notes file with the given notes in record form.
///
/// The write is not atomic: a crash mid-write can leave a truncated file.
pub fn save_notes(path: &Path, notes: &[Note]) -> Result<()> {
    let json = serde_json::to_string_pretty(notes)?;
    fs::write(path, json)?;
    Ok(())
}

/// The notes board: an ordered list of notes plus the edit cursor.
///
/// Every mutation is written through to disk before it returns.
#[derive(Debug)]
pub struct NoteStore {
    notes: Vec<Note>,
    edit_cursor: Option<usize>,
    path: PathBuf,
}

impl NoteStore {
    /// Open the board stored at `path`
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let notes = load_notes(&path)?;
        tracing::info!(path = %path.display(), count = notes.len(), "loaded notes");

        Ok(Self {
            notes,
            edit_cursor: None,
            path,
        })
    }

    /// Save the board to disk
    pub fn save(&self) -> Result<()> {
        save_notes(&self.path, &self.notes)?;
        tracing::debug!(path = %self.path.display(), count = self.notes.len(), "saved notes");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn edit_cursor(&self) -> Option<usize> {
        self.edit_cursor
    }

    /// The note currently open for editing, if any
    pub fn editing(&self) -> Option<&Note> {
        self.edit_cursor.and_then(|idx| self.notes.get(idx))
    }

    /// Append an empty note and open it for editing
    pub fn add(&mut self) -> Result<()> {
        self.notes.push(Note::default());
        self.edit_cursor = Some(self.notes.len() - 1);
        self.save()
    }

    /// Open the note at `index` for editing
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.notes.len() {
            return Err(StickiesError::NoteNotFound(index));
        }
        self.edit_cursor = Some(index);
        Ok(())
    }

    /// Close the editor without touching any note
    pub fn cancel(&mut self) {
        self.edit_cursor = None;
    }

    /// Replace the note under the cursor. Leaves the cursor in place.
    pub fn update(&mut self, title: String, body: String) -> Result<()> {
        let Some(idx) = self.edit_cursor else {
            return Ok(());
        };

        let note = self
            .notes
            .get_mut(idx)
            .ok_or(StickiesError::NoteNotFound(idx))?;
        *note = Note { title, body };
        self.save()
    }

    /// Remove the note under the cursor and close the editor
    pub fn delete(&mut self) -> Result<()> {
        let Some(idx) = self.edit_cursor.take() else {
            return Ok(());
        };

        if idx >= self.notes.len() {
            return Err(StickiesError::NoteNotFound(idx));
        }
        self.notes.remove(idx);
        self.save()
    }
}
