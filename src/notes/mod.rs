//! Note store — the in-memory notes and items collections.
//!
//! All state lives here for the lifetime of the process; nothing is
//! persisted and a restart starts empty.

pub mod store;

pub use store::{NoteStore, NoteStoreError};
