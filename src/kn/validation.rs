//! Sequence validation
//!
//! Enforces the ordering rules between classified lines before a document is built:
//! - a title may only appear before any other non-empty line
//! - every note must directly follow a page marker (empty lines in between are ignored)
//!
//! Validation is fail-fast: the first violation is reported and scanning stops.
//! A successful run yields [`ValidatedLines`], the only input the
//! [`DocumentBuilder`](crate::kn::building::DocumentBuilder) accepts.

use crate::kn::classification::{ClassifiedLine, LineRole};
use thiserror::Error;

/// First structural violation found in a note file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title starting with # has to be in the first line (line {line})")]
    MisplacedTitle { line: usize },

    #[error("note has to follow page number, note: {text} (line {line})")]
    OrphanedNote { line: usize, text: String },
}

impl ValidationError {
    /// 1-based line number of the offending line
    pub fn line(&self) -> usize {
        match self {
            ValidationError::MisplacedTitle { line } => *line,
            ValidationError::OrphanedNote { line, .. } => *line,
        }
    }
}

/// Classified lines that passed [`validate`].
///
/// Cannot be constructed outside this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLines {
    lines: Vec<ClassifiedLine>,
}

impl ValidatedLines {
    pub fn lines(&self) -> &[ClassifiedLine] {
        &self.lines
    }
}

/// Stateful scanner over a classified line sequence.
///
/// `previous` is `None` at the start of the file and otherwise holds the role of
/// the last non-empty line seen.
#[derive(Debug, Default)]
pub struct SequenceValidator {
    previous: Option<LineRole>,
    line: usize,
}

impl SequenceValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the next line against the lines seen so far.
    pub fn accept(&mut self, classified: &ClassifiedLine) -> Result<(), ValidationError> {
        self.line += 1;

        match classified.role() {
            LineRole::Empty => return Ok(()),
            LineRole::Title if self.previous.is_some() => {
                return Err(ValidationError::MisplacedTitle { line: self.line });
            }
            LineRole::NoteText if self.previous != Some(LineRole::PageMarker) => {
                return Err(ValidationError::OrphanedNote {
                    line: self.line,
                    text: classified.text().to_string(),
                });
            }
            _ => {}
        }

        self.previous = Some(classified.role());
        Ok(())
    }
}

/// Check a sequence without taking ownership of it.
pub fn check(lines: &[ClassifiedLine]) -> Result<(), ValidationError> {
    let mut validator = SequenceValidator::new();
    lines.iter().try_for_each(|line| validator.accept(line))
}

/// Validate a sequence and tag it for building.
pub fn validate(lines: Vec<ClassifiedLine>) -> Result<ValidatedLines, ValidationError> {
    check(&lines)?;
    log::debug!("validated {} lines", lines.len());
    Ok(ValidatedLines { lines })
}
