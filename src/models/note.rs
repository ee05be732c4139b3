//! Note and item data model.
//!
//! Ids are caller-supplied and never generated here. A `NoteId` accepts
//! either a JSON string or a JSON number and canonicalizes to a string, so
//! `1` and `"1"` name the same note; every comparison after the boundary is
//! a strict string comparison.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Canonical note identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Num(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => NoteId(s),
            Raw::Num(n) => NoteId(n.to_string()),
        })
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        NoteId(s)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        NoteId(s.to_string())
    }
}

/// A note: an id and a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
}

/// A checklist-style sub-entry belonging to a note via `noteID`.
///
/// Beyond `noteID` the shape is caller-defined; whatever fields arrive are
/// kept and echoed back verbatim. The linkage is not validated against any
/// existing note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "noteID")]
    pub note_id: NoteId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Body of `POST /api/v1/notes`.
///
/// `title` is optional at the parse stage so that its absence surfaces as a
/// validation error from the store rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub id: NoteId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Body of `PUT /api/v1/notes/{id}`.
///
/// Unlike create, update carries no presence check: a missing or empty title
/// overwrites the stored one with the empty string.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}
