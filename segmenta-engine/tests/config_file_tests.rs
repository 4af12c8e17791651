//! Loading segmenter configuration from TOML files

use segmenta_engine::{SegmentError, SegmentationMode, Segmenter, SegmenterConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_segmentation_table() {
    let file = write_config(
        r#"
# Project settings
[segmentation]
sentences = true
minlength = 5
join = true
separator = " / "
"#,
    );

    let config = SegmenterConfig::from_file(file.path()).unwrap();
    let segmenter = Segmenter::new(config).unwrap();
    assert_eq!(segmenter.mode(), SegmentationMode::Sentences);
    assert_eq!(
        segmenter.segment("Hello there. Ok. Goodbye now.").unwrap().as_joined(),
        Some("Hello there. / Goodbye now.")
    );
}

#[test]
fn test_custom_language_rules_file() {
    let rules = write_config(
        r#"
[metadata]
code = "pipe"
name = "Pipe"

[terminators]
chars = ["|"]
require_whitespace = false

[ellipsis]
patterns = []
treat_as_boundary = false

[enclosures]
pairs = []

[abbreviations]

[sentence_starters]
"#,
    );

    let config = SegmenterConfig::builder()
        .sentences()
        .language_config(rules.path())
        .build()
        .unwrap();
    let segmenter = Segmenter::new(config).unwrap();
    assert_eq!(
        segmenter.segment("one|two|three").unwrap().into_texts(),
        vec!["one|", "two|", "three"]
    );
}

#[test]
fn test_conflicting_modes_in_file() {
    let file = write_config("[segmentation]\nlines = true\nparagraphs = true\n");
    assert!(matches!(
        SegmenterConfig::from_file(file.path()),
        Err(SegmentError::Configuration(_))
    ));
}

#[test]
fn test_missing_file() {
    let err = SegmenterConfig::from_file("/nonexistent/segmenta.toml").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/segmenta.toml"));
}

#[test]
fn test_sentence_chunker_uses_configured_language() {
    let file = write_config(
        r#"
[segmentation]
chunker = "sentence"
language = "ja"
chunk_size = 6
"#,
    );

    let segmenter = Segmenter::new(SegmenterConfig::from_file(file.path()).unwrap()).unwrap();
    assert_eq!(segmenter.mode(), SegmentationMode::Delegate);
    assert_eq!(
        segmenter.segment("今日は晴れ。明日は雨。").unwrap().into_texts(),
        vec!["今日は晴れ。", "明日は雨。"]
    );
}
