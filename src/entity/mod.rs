mod note;

pub use note::{Note, StoredNote};
