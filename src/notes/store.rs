//! NoteStore — in-memory CRUD over the notes and items collections.
//!
//! Both collections sit behind a single mutex; every operation takes the
//! lock once and runs its whole read-filter-replace sequence inside it, so
//! each operation is atomic against concurrent requests. Failure paths
//! never mutate.

use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Item, Note, NoteId};

#[derive(Debug, Error)]
pub enum NoteStoreError {
    #[error("no title provided")]
    MissingTitle,

    #[error("note {0} does not exist")]
    NotFound(NoteId),
}

/// Snapshot of both collections, as returned by list-all.
#[derive(Debug, Clone, Serialize)]
pub struct NoteListing {
    pub notes: Vec<Note>,
    pub items: Vec<Item>,
}

#[derive(Debug, Default)]
struct Collections {
    notes: Vec<Note>,
    items: Vec<Item>,
}

/// In-memory note store. Insertion order is preserved in both collections;
/// ids are not required to be unique and item linkage is not validated.
pub struct NoteStore {
    inner: Mutex<Collections>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Collections::default()),
        }
    }

    /// Full snapshot of both collections, unfiltered.
    pub fn list_all(&self) -> NoteListing {
        let inner = self.inner.lock();
        NoteListing {
            notes: inner.notes.clone(),
            items: inner.items.clone(),
        }
    }

    /// Append a note and its supplied items.
    ///
    /// The only validation is presence of a title. Items are taken verbatim:
    /// their `noteID` is not checked against `id`, and a duplicate note id is
    /// not rejected.
    pub fn create(&self, id: NoteId, title: &str, items: &[Item]) -> Result<(), NoteStoreError> {
        if title.is_empty() {
            return Err(NoteStoreError::MissingTitle);
        }

        let mut inner = self.inner.lock();
        inner.notes.push(Note {
            id,
            title: title.to_string(),
        });
        inner.items.extend_from_slice(items);
        Ok(())
    }

    /// First note with the given id, plus every item linked to it.
    pub fn get(&self, id: &NoteId) -> Result<(Note, Vec<Item>), NoteStoreError> {
        let inner = self.inner.lock();
        let note = inner
            .notes
            .iter()
            .find(|note| note.id == *id)
            .cloned()
            .ok_or_else(|| NoteStoreError::NotFound(id.clone()))?;
        let items = inner
            .items
            .iter()
            .filter(|item| item.note_id == *id)
            .cloned()
            .collect();
        Ok((note, items))
    }

    /// Remove every note and item matching the id.
    ///
    /// Success is judged solely on the notes collection: if no note matched,
    /// nothing is touched, even if stray items carry that id.
    pub fn delete(&self, id: &NoteId) -> Result<(), NoteStoreError> {
        let mut inner = self.inner.lock();
        let kept: Vec<Note> = inner
            .notes
            .iter()
            .filter(|note| note.id != *id)
            .cloned()
            .collect();
        if kept.len() == inner.notes.len() {
            return Err(NoteStoreError::NotFound(id.clone()));
        }

        inner.notes = kept;
        inner.items.retain(|item| item.note_id != *id);
        Ok(())
    }

    /// Rewrite a note's title and replace its items wholesale.
    ///
    /// The id is untouched. There is no presence check on the title here:
    /// create rejects an empty title, update overwrites with one. The
    /// replacement items are appended verbatim, unchecked like on create.
    pub fn update(&self, id: &NoteId, title: String, items: Vec<Item>) -> Result<(), NoteStoreError> {
        let mut inner = self.inner.lock();
        let note = inner
            .notes
            .iter_mut()
            .find(|note| note.id == *id)
            .ok_or_else(|| NoteStoreError::NotFound(id.clone()))?;
        note.title = title;

        inner.items.retain(|item| item.note_id != *id);
        inner.items.extend(items);
        Ok(())
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
