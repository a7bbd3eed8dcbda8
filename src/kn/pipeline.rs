//! Note processing pipeline
//!
//! Runs the stages in order: classify every line, validate the sequence, build the
//! document, and (optionally) serialize it. A validation error stops the run before
//! building; no partial document is produced.
//!
//! # Examples
//!
//! ```rust,ignore
//! use kn::kn::pipeline::{NoteLoader, NotePipeline};
//!
//! let pipeline = NotePipeline::new();
//! let doc = pipeline.parse("# Title\n5\nhello\n")?;
//!
//! let loader = NoteLoader::new();
//! let written = loader.convert_file("reading.txt", "yaml")?; // reading.yaml
//! ```
//!
//! `NotePipeline` works on strings and line sequences. `NoteLoader` is a thin
//! file wrapper around it.

use crate::kn::building::DocumentBuilder;
use crate::kn::classification::classify_lines;
use crate::kn::config::KnConfig;
use crate::kn::document::{default_tags, Document};
use crate::kn::formats::{FormatError, FormatRegistry};
use crate::kn::validation::{validate, ValidationError};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors during a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("refusing to overwrite input file {}", .0.display())]
    OutputWouldOverwriteInput(PathBuf),
}

/// String and line based processing
pub struct NotePipeline {
    author: String,
    tags: BTreeSet<String>,
    formats: FormatRegistry,
}

impl NotePipeline {
    /// Pipeline with empty author, the default tag set and the built-in formats
    pub fn new() -> Self {
        Self {
            author: String::new(),
            tags: default_tags(),
            formats: FormatRegistry::with_defaults(),
        }
    }

    pub fn from_config(config: &KnConfig) -> Self {
        Self {
            author: config.document.author.clone(),
            tags: config.notes.default_tags.iter().cloned().collect(),
            formats: FormatRegistry::with_defaults(),
        }
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    /// Parse a whole note file held in memory
    pub fn parse(&self, source: &str) -> Result<Document, ValidationError> {
        // `lines` keeps the `\r` of a final CRLF line that has no trailing newline
        self.parse_lines(
            source
                .lines()
                .map(|line| line.strip_suffix('\r').unwrap_or(line)),
        )
    }

    /// Parse lines that were already split by the caller
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<Document, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classified = classify_lines(lines);
        log::debug!("classified {} lines", classified.len());

        let validated = validate(classified)?;
        let doc = DocumentBuilder::new()
            .with_author(self.author.clone())
            .with_default_tags(self.tags.iter().cloned())
            .build(validated);
        log::debug!("built document {:?} with {} notes", doc.title, doc.notes.len());

        Ok(doc)
    }

    /// Parse and serialize with the named format
    pub fn convert(&self, source: &str, format: &str) -> Result<String, PipelineError> {
        let formatter = self.formats.require(format)?;
        let doc = self.parse(source)?;
        Ok(formatter.serialize(&doc)?)
    }
}

impl Default for NotePipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// File based entry point
pub struct NoteLoader {
    pipeline: NotePipeline,
}

impl NoteLoader {
    pub fn new() -> Self {
        Self {
            pipeline: NotePipeline::new(),
        }
    }

    pub fn with_pipeline(pipeline: NotePipeline) -> Self {
        Self { pipeline }
    }

    /// Read and parse a note file
    pub fn load_and_parse(&self, path: impl AsRef<Path>) -> Result<Document, PipelineError> {
        let path = path.as_ref();
        let source = read_source(path)?;
        Ok(self.pipeline.parse(&source)?)
    }

    /// Read a note file and return it serialized in `format`
    pub fn load_and_convert(
        &self,
        path: impl AsRef<Path>,
        format: &str,
    ) -> Result<String, PipelineError> {
        let path = path.as_ref();
        let source = read_source(path)?;
        self.pipeline.convert(&source, format)
    }

    /// Convert a note file and write the result next to it.
    ///
    /// The output path is the input path with its extension replaced by the
    /// format's extension. Returns the path written.
    pub fn convert_file(
        &self,
        path: impl AsRef<Path>,
        format: &str,
    ) -> Result<PathBuf, PipelineError> {
        let path = path.as_ref();
        let output = self.output_path(path, format)?;
        self.convert_file_to(path, format, &output)?;
        Ok(output)
    }

    /// Convert a note file and write the result to `output`
    pub fn convert_file_to(
        &self,
        path: impl AsRef<Path>,
        format: &str,
        output: impl AsRef<Path>,
    ) -> Result<(), PipelineError> {
        let (path, output) = (path.as_ref(), output.as_ref());
        if same_file(path, output) {
            return Err(PipelineError::OutputWouldOverwriteInput(output.to_path_buf()));
        }

        let serialized = self.load_and_convert(path, format)?;
        fs::write(output, serialized).map_err(|source| PipelineError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        log::info!("wrote {}", output.display());
        Ok(())
    }

    /// Where `convert_file` writes for a given input and format
    pub fn output_path(&self, path: &Path, format: &str) -> Result<PathBuf, PipelineError> {
        let formatter = self.pipeline.formats().require(format)?;
        Ok(path.with_extension(formatter.extension()))
    }
}

impl Default for NoteLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether two paths name the same file, however they are spelled
fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(input), Ok(output)) => input == output,
        _ => false,
    }
}

fn read_source(path: &Path) -> Result<String, PipelineError> {
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })
}
