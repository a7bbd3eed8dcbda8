//! Main module for kn library functionality
//!
//! Stages, leaf first:
//!   classification  raw line -> (role, cleaned text)
//!   validation      ordering rules over the classified sequence
//!   building        validated sequence -> Document
//!   pipeline        wires the stages together and hands off to a formatter

pub mod building;
pub mod classification;
pub mod config;
pub mod document;
pub mod formats;
pub mod pipeline;
pub mod validation;

pub use building::DocumentBuilder;
pub use classification::{classify, ClassifiedLine, LineRole};
pub use document::{Document, NoteEntry};
pub use pipeline::{NoteLoader, NotePipeline, PipelineError};
pub use validation::{validate, ValidatedLines, ValidationError};
