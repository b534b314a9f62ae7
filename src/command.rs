//! User intents applied to the note store.
//!
//! Both the web board and the CLI go through these handlers; neither touches
//! the store's mutators directly.

use crate::error::Result;
use crate::storage::NoteStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append an empty note and open it in the editor
    AddNote,
    /// Open the note at this index in the editor
    SelectForEdit(usize),
    /// Store the edited note and close the editor
    SaveEdit { title: String, body: String },
    /// Remove the edited note
    DeleteEdit,
    /// Close the editor without saving
    CancelEdit,
}

impl Command {
    pub fn execute(self, store: &mut NoteStore) -> Result<()> {
        tracing::debug!(command = ?self, "executing");

        match self {
            Command::AddNote => store.add(),
            Command::SelectForEdit(index) => store.select(index),
            Command::SaveEdit { title, body } => {
                store.update(title, body)?;
                store.cancel();
                Ok(())
            }
            Command::DeleteEdit => store.delete(),
            Command::CancelEdit => {
                store.cancel();
                Ok(())
            }
        }
    }
}
