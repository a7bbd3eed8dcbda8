//! Document building
//!
//! Folds a validated line sequence into a [`Document`]. The builder keeps a running
//! context of title, subtitle and page. Subtitle and page are sticky: they apply to
//! every following note until another subtitle or page marker replaces them. Each
//! note copies the context at the moment it is read.
//!
//! The builder only accepts [`ValidatedLines`], so structural checks always run first.

use crate::kn::classification::{ClassifiedLine, LineRole};
use crate::kn::document::{default_tags, Document, NoteEntry};
use crate::kn::validation::ValidatedLines;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
struct Context {
    title: String,
    subtitle: String,
    page: String,
}

/// Reducer from classified lines to a [`Document`]
#[derive(Debug)]
pub struct DocumentBuilder {
    author: String,
    tags: BTreeSet<String>,
    context: Context,
    notes: Vec<NoteEntry>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            author: String::new(),
            tags: default_tags(),
            context: Context::default(),
            notes: Vec::new(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Replace the tag set attached to every note
    pub fn with_default_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(mut self, lines: ValidatedLines) -> Document {
        for line in lines.lines() {
            self.push(line);
        }

        Document {
            author: self.author,
            title: self.context.title,
            notes: self.notes,
        }
    }

    fn push(&mut self, line: &ClassifiedLine) {
        match line.role() {
            // last title wins; validation keeps this to a single one
            LineRole::Title => self.context.title = line.text().to_string(),
            LineRole::Subtitle => self.context.subtitle = line.text().to_string(),
            LineRole::PageMarker => self.context.page = line.text().to_string(),
            LineRole::NoteText => {
                log::debug!(
                    "note on page {:?} under subtitle {:?}",
                    self.context.page,
                    self.context.subtitle
                );
                self.notes.push(NoteEntry {
                    text: line.text().to_string(),
                    subtitle: self.context.subtitle.clone(),
                    page: self.context.page.clone(),
                    tags: self.tags.clone(),
                });
            }
            LineRole::Empty => {}
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
