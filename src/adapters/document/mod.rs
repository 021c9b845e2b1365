//! Document adapters - questionnaire parsing.

mod questionnaire_parser;

pub use questionnaire_parser::MarkdownQuestionnaireParser;
