//! Line Classification
//!
//! Assigns every raw line of a note file exactly one [`LineRole`].
//!
//! Classification is driven by [`LINE_RULES`], an ordered slice of rules that is
//! evaluated top to bottom; the first rule whose pattern matches wins. The order is:
//! 1. Title lines (`# ` prefix)
//! 2. Subtitle lines (`## ` prefix)
//! 3. Page markers (digits only)
//! 4. Empty lines (whitespace only)
//! 5. Note text (matches anything)
//!
//! The last rule matches every string, so classification never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Semantic role of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRole {
    Title,
    Subtitle,
    PageMarker,
    Empty,
    NoteText,
}

impl fmt::Display for LineRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineRole::Title => "title",
            LineRole::Subtitle => "subtitle",
            LineRole::PageMarker => "page-marker",
            LineRole::Empty => "empty",
            LineRole::NoteText => "note-text",
        };
        f.write_str(name)
    }
}

/// A line together with its role and role-specific cleaned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    text: String,
    role: LineRole,
}

impl ClassifiedLine {
    pub fn new(text: impl Into<String>, role: LineRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    /// Cleaned text (headings have their `#` markers and surrounding whitespace removed)
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn role(&self) -> LineRole {
        self.role
    }
}

/// One entry of the classification table
pub struct LineRule {
    pub role: LineRole,
    pattern: Regex,
}

impl LineRule {
    fn new(role: LineRole, pattern: &str) -> Self {
        Self {
            role,
            pattern: Regex::new(pattern).unwrap_or_else(|e| {
                panic!("invalid built-in pattern for {role}: {e}");
            }),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Role patterns in priority order.
/// Order matters: `##` lines would also pass a looser title check, and the note
/// pattern matches everything, so it must stay last.
const LINE_PATTERNS: &[(LineRole, &str)] = &[
    (LineRole::Title, r"^#\s"),
    (LineRole::Subtitle, r"^##\s"),
    (LineRole::PageMarker, r"^[0-9]+$"),
    (LineRole::Empty, r"^\s*$"),
    (LineRole::NoteText, r"(?s)^.*$"),
];

/// Compiled classification rules, in the order of `LINE_PATTERNS`. First match wins.
pub static LINE_RULES: Lazy<Vec<LineRule>> = Lazy::new(|| {
    LINE_PATTERNS
        .iter()
        .map(|&(role, pattern)| LineRule::new(role, pattern))
        .collect()
});

/// Classify a single raw line.
pub fn classify(text: &str) -> ClassifiedLine {
    let role = LINE_RULES
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.role)
        .unwrap_or(LineRole::NoteText);

    ClassifiedLine::new(clean_text(text, role), role)
}

/// Classify a sequence of raw lines, preserving order.
pub fn classify_lines<I, S>(lines: I) -> Vec<ClassifiedLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| classify(line.as_ref()))
        .collect()
}

fn clean_text(text: &str, role: LineRole) -> String {
    match role {
        LineRole::Title | LineRole::Subtitle => text.trim_start_matches('#').trim().to_string(),
        LineRole::Empty => String::new(),
        LineRole::PageMarker | LineRole::NoteText => text.to_string(),
    }
}
