//! Output formats for converted documents
//!
//! - `yaml`: the default note file format
//! - `json`: pretty-printed JSON

pub mod json;
pub mod registry;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use yaml::YamlFormatter;
