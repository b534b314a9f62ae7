mod json_store;

pub use json_store::{load_notes, save_notes, NoteStore, DEFAULT_NOTES_FILE};
