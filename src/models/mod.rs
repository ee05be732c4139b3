pub mod note;

pub use note::{CreateNoteRequest, Item, Note, NoteId, UpdateNoteRequest};
