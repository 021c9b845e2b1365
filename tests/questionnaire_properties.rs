//! Property tests for the questionnaire loader.
//!
//! The loader's contract:
//! - entry count equals question prompt count for well-formed input
//! - render/parse round-trips to an equal document
//! - blank answers survive as empty strings

use proptest::prelude::*;

use persona_twin::adapters::document::MarkdownQuestionnaireParser;
use persona_twin::domain::questionnaire::{Questionnaire, QuestionnaireEntry};
use persona_twin::ports::QuestionnaireParser;

/// Plain prose fragments: no markers (`#`, `*`, `→`), no newlines, no
/// leading/trailing whitespace, never all-dashes.
fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ,.'?()]{0,38}".prop_map(|s| s.trim_end().to_string())
}

/// Answers are empty (blank field) or one to three prose lines.
fn answer() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        4 => prop::collection::vec(text(), 1..4).prop_map(|lines| lines.join("\n")),
    ]
}

fn entry() -> impl Strategy<Value = QuestionnaireEntry> {
    (text(), text(), answer())
        .prop_map(|(section, question, answer)| QuestionnaireEntry::new(section, question, answer))
}

fn questionnaire() -> impl Strategy<Value = Questionnaire> {
    (
        prop::option::of(text()),
        prop::collection::vec(entry(), 0..8),
    )
        .prop_map(|(title, entries)| Questionnaire::new(title, entries))
}

proptest! {
    #[test]
    fn rendered_documents_reparse_to_equal_questionnaires(q in questionnaire()) {
        let parser = MarkdownQuestionnaireParser::new();
        let rendered = q.to_markdown();
        let reparsed = parser.parse(&rendered).unwrap();
        prop_assert_eq!(q, reparsed);
    }

    #[test]
    fn entry_count_equals_prompt_count(q in questionnaire()) {
        let parser = MarkdownQuestionnaireParser::new();
        let rendered = q.to_markdown();
        let prompts = rendered.lines().filter(|l| l.trim().starts_with("**")).count();
        let reparsed = parser.parse(&rendered).unwrap();
        prop_assert_eq!(reparsed.len(), prompts);
    }

    #[test]
    fn blank_answers_stay_empty_strings(section in text(), question in text()) {
        let parser = MarkdownQuestionnaireParser::new();
        let q = Questionnaire::new(None, vec![QuestionnaireEntry::new(section, question, "")]);
        let reparsed = parser.parse(&q.to_markdown()).unwrap();
        prop_assert_eq!(reparsed.len(), 1);
        prop_assert_eq!(reparsed.entries()[0].answer.as_str(), "");
    }
}

/// The questionnaire template shipped with the repository must always load.
#[test]
fn shipped_template_parses_with_all_fields_blank() {
    let content = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/data/persona_questionnaire.md"
    ))
    .unwrap();

    let parser = MarkdownQuestionnaireParser::new();
    let q = parser.parse(&content).unwrap();

    assert_eq!(q.title(), Some("Persona Questionnaire"));
    assert!(q.len() >= 15);
    assert!(q.entries().iter().all(|e| e.is_blank()));
    assert!(q
        .sections()
        .contains(&"Required Assignment Behaviors"));
}
