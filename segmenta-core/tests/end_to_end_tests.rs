//! End-to-end tests for the rule-based splitters

use segmenta_core::{
    Cleaner, LanguageRules, LineSplitter, ParagraphSplitter, SectionRule, SectionSplitter,
    SentenceSplitter, Splitter,
};

fn texts(splitter: &dyn Splitter, cleaner: &Cleaner, text: &str) -> Vec<String> {
    cleaner
        .clean_all(splitter.split(text))
        .into_iter()
        .map(|c| c.text)
        .collect()
}

fn all_splitters() -> Vec<Box<dyn Splitter>> {
    vec![
        Box::new(SentenceSplitter::english().unwrap()),
        Box::new(LineSplitter::new()),
        Box::new(ParagraphSplitter::new()),
        Box::new(SectionSplitter::new()),
    ]
}

#[test]
fn test_sentence_scenario() {
    let splitter = SentenceSplitter::english().unwrap();
    assert_eq!(
        texts(&splitter, &Cleaner::default(), "This is a test. And another test."),
        vec!["This is a test.", "And another test."]
    );
}

#[test]
fn test_paragraph_scenario() {
    assert_eq!(
        texts(&ParagraphSplitter, &Cleaner::default(), "Para one.\n\nPara two."),
        vec!["Para one.", "Para two."]
    );
}

#[test]
fn test_line_scenario() {
    assert_eq!(
        texts(&LineSplitter, &Cleaner::default(), "a\n\nb\n"),
        vec!["a", "b"]
    );
}

#[test]
fn test_empty_input_every_splitter() {
    for splitter in all_splitters() {
        assert!(
            splitter.split("").is_empty(),
            "{} produced chunks for empty input",
            splitter.name()
        );
    }
}

#[test]
fn test_no_boundaries_every_splitter() {
    let text = "   a single run of words without any boundary   ";
    for splitter in all_splitters() {
        assert_eq!(
            texts(splitter.as_ref(), &Cleaner::default(), text),
            vec!["a single run of words without any boundary"],
            "splitter {}",
            splitter.name()
        );
    }
}

#[test]
fn test_chunks_point_back_into_source() {
    let text = "First paragraph here.\n\n  Second one, indented.\n\n\nThird.";
    for splitter in all_splitters() {
        let chunks = splitter.split(text);
        let mut last_end = 0;
        for chunk in &chunks {
            assert!(chunk.start >= last_end, "overlap in {}", splitter.name());
            assert_eq!(&text[chunk.span()], chunk.text);
            last_end = chunk.end;
        }
    }
}

#[test]
fn test_document_at_every_granularity() {
    let document = "Intro line one.\nIntro line two. Still two.\n\nBody para.\n\n\nAppendix.";

    let sentences = texts(
        &SentenceSplitter::english().unwrap(),
        &Cleaner::default(),
        document,
    );
    assert_eq!(
        sentences,
        vec![
            "Intro line one.",
            "Intro line two.",
            "Still two.",
            "Body para.",
            "Appendix."
        ]
    );

    let lines = texts(&LineSplitter, &Cleaner::default(), document);
    assert_eq!(lines.len(), 4);

    let paragraphs = texts(&ParagraphSplitter, &Cleaner::default(), document);
    assert_eq!(
        paragraphs,
        vec![
            "Intro line one.\nIntro line two. Still two.",
            "Body para.",
            "Appendix."
        ]
    );

    let sections = texts(&SectionSplitter::new(), &Cleaner::default(), document);
    assert_eq!(
        sections,
        vec![
            "Intro line one.\nIntro line two. Still two.\n\nBody para.",
            "Appendix."
        ]
    );
}

#[test]
fn test_minlength_and_collapse() {
    let cleaner = Cleaner::new(true, Some(10));
    let text = "Short.\nThis   line is long enough.\nTiny";
    assert_eq!(
        texts(&LineSplitter, &cleaner, text),
        vec!["This line is long enough."]
    );
}

#[test]
fn test_markdown_sections() {
    let splitter = SectionSplitter::with_rule(SectionRule::markdown_headings());
    let text = "# Title\nIntro.\n\n## Usage\nRun it.\n\n## License\nMIT";
    assert_eq!(
        texts(&splitter, &Cleaner::default(), text),
        vec!["# Title\nIntro.", "## Usage\nRun it.", "## License\nMIT"]
    );
}

#[test]
fn test_custom_language_rules_from_toml() {
    let config = segmenta_core::LanguageConfig::from_toml_str(
        r#"
[metadata]
code = "xx"
name = "Pipes"

[terminators]
chars = ["|"]
require_whitespace = false
"#,
    )
    .unwrap();

    let splitter = SentenceSplitter::new(LanguageRules::from_config(&config).unwrap());
    assert_eq!(
        texts(&splitter, &Cleaner::default(), "one|two|three"),
        vec!["one|", "two|", "three"]
    );
}
