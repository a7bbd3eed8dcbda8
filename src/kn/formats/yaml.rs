//! YAML output, the format `kn parse` writes by default

use super::registry::{FormatError, Formatter};
use crate::kn::document::Document;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn extension(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML document with author, title and notes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kn::document::{default_tags, NoteEntry};

    #[test]
    fn test_yaml_reads_back() {
        let doc = Document {
            author: String::new(),
            title: "My Title".to_string(),
            notes: vec![NoteEntry {
                text: "hello".to_string(),
                subtitle: String::new(),
                page: "5".to_string(),
                tags: default_tags(),
            }],
        };

        let yaml = YamlFormatter.serialize(&doc).unwrap();
        assert!(yaml.contains("title: My Title"));
        assert!(yaml.contains("- dummy"));

        let parsed: Document = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_page_stays_a_string() {
        let doc = Document {
            notes: vec![NoteEntry {
                text: "x".to_string(),
                subtitle: String::new(),
                page: "12".to_string(),
                tags: default_tags(),
            }],
            ..Document::default()
        };

        let yaml = YamlFormatter.serialize(&doc).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["notes"][0]["page"].as_str(), Some("12"));
    }
}
