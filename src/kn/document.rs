//! Output document model
//!
//! A [`Document`] is the terminal value of the pipeline. Serializers receive it
//! read-only; the field names below are the serialized field names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tag attached to notes when nothing else is configured
pub const DEFAULT_TAG: &str = "dummy";

/// A converted note file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub author: String,
    pub title: String,
    pub notes: Vec<NoteEntry>,
}

/// A single note with the subtitle and page that were in effect when it was read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub text: String,
    pub subtitle: String,
    pub page: String,
    pub tags: BTreeSet<String>,
}

impl Document {
    /// Notes recorded on the given page, in input order
    pub fn notes_on_page<'a>(&'a self, page: &'a str) -> impl Iterator<Item = &'a NoteEntry> + 'a {
        self.notes.iter().filter(move |note| note.page == page)
    }
}

/// The tag set applied when no tags are configured
pub fn default_tags() -> BTreeSet<String> {
    BTreeSet::from([DEFAULT_TAG.to_string()])
}
