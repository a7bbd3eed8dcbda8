//! Document-level tests for the note pipeline
//!
//! Each case feeds a complete note file through `NotePipeline` and checks the
//! resulting document or the first validation error.

use kn::kn::config::Loader;
use kn::kn::document::{Document, NoteEntry};
use kn::kn::pipeline::NotePipeline;
use kn::kn::validation::ValidationError;
use rstest::rstest;

fn parse(lines: &[&str]) -> Result<Document, ValidationError> {
    NotePipeline::new().parse_lines(lines)
}

fn pages(doc: &Document) -> Vec<(&str, &str, &str)> {
    doc.notes
        .iter()
        .map(|n| (n.text.as_str(), n.subtitle.as_str(), n.page.as_str()))
        .collect()
}

#[test]
fn test_title_page_note() {
    let doc = parse(&["# My Title", "5", "hello"]).unwrap();

    assert_eq!(doc.title, "My Title");
    assert_eq!(pages(&doc), vec![("hello", "", "5")]);
    let tags: Vec<_> = doc.notes[0].tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["dummy"]);
}

#[test]
fn test_sticky_subtitle_across_pages() {
    let doc = parse(&["## Sub1", "5", "note-a", "6", "note-b"]).unwrap();

    assert_eq!(
        pages(&doc),
        vec![("note-a", "Sub1", "5"), ("note-b", "Sub1", "6")]
    );
}

#[test]
fn test_realistic_reading_notes() {
    let source = "\
# The Pragmatic Programmer

## A Pragmatic Philosophy
2
Care about your craft

3
Provide options, don't make lame excuses

## A Pragmatic Approach
27
DRY: every piece of knowledge must have a single representation
";
    let doc = NotePipeline::new().parse(source).unwrap();

    assert_eq!(doc.title, "The Pragmatic Programmer");
    assert_eq!(doc.notes.len(), 3);
    assert_eq!(doc.notes[1].subtitle, "A Pragmatic Philosophy");
    assert_eq!(doc.notes[2].subtitle, "A Pragmatic Approach");
    assert_eq!(doc.notes[2].page, "27");
    assert_eq!(doc.notes_on_page("3").count(), 1);
}

#[rstest]
#[case::empty_between_page_and_note(&["5", "", "hello"])]
#[case::title_after_blank_lines(&["", "# T", "1", "x"])]
#[case::headings_only(&["# T", "## S"])]
#[case::pages_without_notes(&["1", "2", "3"])]
#[case::empty_file(&[])]
fn test_valid_sequences(#[case] lines: &[&str]) {
    assert!(parse(lines).is_ok());
}

#[rstest]
#[case::note_first(&["hello", "5"], ValidationError::OrphanedNote { line: 1, text: "hello".into() })]
#[case::title_not_first(&["5", "# Title"], ValidationError::MisplacedTitle { line: 2 })]
#[case::two_notes_one_page(&["5", "a", "b"], ValidationError::OrphanedNote { line: 3, text: "b".into() })]
#[case::note_after_title(&["# T", "", "x"], ValidationError::OrphanedNote { line: 3, text: "x".into() })]
#[case::hash_without_space(&["# T", "#tag"], ValidationError::OrphanedNote { line: 2, text: "#tag".into() })]
fn test_invalid_sequences(#[case] lines: &[&str], #[case] expected: ValidationError) {
    assert_eq!(parse(lines).unwrap_err(), expected);
}

#[test]
fn test_orphaned_note_message_names_the_note() {
    let err = parse(&["hello", "5"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "note has to follow page number, note: hello (line 1)"
    );
}

#[test]
fn test_pipeline_from_config() {
    let config = Loader::new()
        .set_override("document.author", "Grace")
        .unwrap()
        .set_override("notes.default_tags", vec!["book", "quote"])
        .unwrap()
        .build()
        .unwrap();
    let doc = NotePipeline::from_config(&config)
        .parse("# T\n1\nx\n")
        .unwrap();
    assert_eq!(doc.author, "Grace");
    let tags: Vec<_> = doc.notes[0].tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["book", "quote"]);
}

#[test]
fn test_json_output() {
    let json = NotePipeline::new()
        .convert("# My Title\n5\nhello\n", "json")
        .unwrap();

    insta::assert_snapshot!(json.trim_end(), @r###"
    {
      "author": "",
      "title": "My Title",
      "notes": [
        {
          "text": "hello",
          "subtitle": "",
          "page": "5",
          "tags": [
            "dummy"
          ]
        }
      ]
    }
    "###);
}

#[test]
fn test_yaml_output_reads_back() {
    let yaml = NotePipeline::new()
        .convert("# My Title\n## Part\n5\nhello\n", "yaml")
        .unwrap();
    let doc: Document = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(doc.title, "My Title");
    assert_eq!(
        doc.notes,
        vec![NoteEntry {
            text: "hello".to_string(),
            subtitle: "Part".to_string(),
            page: "5".to_string(),
            tags: ["dummy".to_string()].into_iter().collect(),
        }]
    );
}
