//! # kn
//!
//! Converts plain-text reading notes into structured documents.
//!
//! A note file looks like this:
//!
//! ```text
//! # Book title
//! ## Chapter
//! 12
//! A note taken on page 12
//! ```
//!
//! A single optional `#` title comes first, `##` lines set the current subtitle,
//! digit-only lines set the current page, and every other non-empty line is a note
//! that must directly follow a page number. See [`kn::pipeline`] for the entry points.

pub mod kn;
