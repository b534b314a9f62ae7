pub mod cli;
pub mod command;
pub mod config;
pub mod entity;
pub mod error;
pub mod storage;
pub mod web;

pub use command::Command;
pub use entity::Note;
pub use error::{Result, StickiesError};
pub use storage::NoteStore;
