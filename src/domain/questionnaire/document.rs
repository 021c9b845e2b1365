//! Parsed questionnaire document and its entries.

use serde::{Deserialize, Serialize};

/// One prompt/answer pair from the questionnaire, in document order.
///
/// Every entry belongs to exactly one section. Answers may be empty; an
/// empty string means the subject left the field blank, which is distinct
/// from the field being absent from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireEntry {
    /// Section heading the question appeared under.
    pub section: String,
    /// The question prompt, without its bold markers.
    pub question: String,
    /// Free-text answer. Empty when the field was left blank.
    pub answer: String,
}

impl QuestionnaireEntry {
    /// Creates a new entry.
    pub fn new(
        section: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Returns true when the subject left this field blank.
    pub fn is_blank(&self) -> bool {
        self.answer.trim().is_empty()
    }
}

/// An immutable, ordered questionnaire document.
///
/// Built once by the parser; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    title: Option<String>,
    entries: Vec<QuestionnaireEntry>,
}

impl Questionnaire {
    /// Creates a questionnaire from parsed parts.
    pub fn new(title: Option<String>, entries: Vec<QuestionnaireEntry>) -> Self {
        Self { title, entries }
    }

    /// Returns the document title, if the source had an `#` heading.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns all entries in document order.
    pub fn entries(&self) -> &[QuestionnaireEntry] {
        &self.entries
    }

    /// Returns the number of entries (one per question prompt).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the document had no question prompts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the section headings in first-appearance order.
    pub fn sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if sections.last() != Some(&entry.section.as_str()) {
                sections.push(&entry.section);
            }
        }
        sections
    }

    /// Iterates entries whose answer is not blank.
    ///
    /// Blank fields are "unspecified" and are skipped when the profile is
    /// rendered into a prompt.
    pub fn answered(&self) -> impl Iterator<Item = &QuestionnaireEntry> {
        self.entries.iter().filter(|e| !e.is_blank())
    }

    /// Renders the questionnaire back to its document format.
    ///
    /// The inverse of the parser: the output re-parses to an equal
    /// questionnaire, and is whitespace-insensitively equivalent to the
    /// original source. Blank answers render as a bare arrow line.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        if let Some(title) = &self.title {
            out.push_str("# ");
            out.push_str(title);
            out.push_str("\n\n");
        }

        let mut current_section: Option<&str> = None;
        for entry in &self.entries {
            if current_section != Some(entry.section.as_str()) {
                out.push_str("## ");
                out.push_str(&entry.section);
                out.push_str("\n\n");
                current_section = Some(&entry.section);
            }

            out.push_str("**");
            out.push_str(&entry.question);
            out.push_str("**\n");

            if entry.answer.is_empty() {
                out.push_str("→\n\n");
            } else {
                for line in entry.answer.lines() {
                    out.push_str("→ ");
                    out.push_str(line);
                    out.push('\n');
                }
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Questionnaire {
        Questionnaire::new(
            Some("Persona Questionnaire".to_string()),
            vec![
                QuestionnaireEntry::new("Basic Information", "Full name:", "Asha Rao"),
                QuestionnaireEntry::new(
                    "Basic Information",
                    "Current role (what you do today):",
                    "Product engineer.",
                ),
                QuestionnaireEntry::new(
                    "Required Assignment Behaviors",
                    "Greeting style (how you usually say hello):",
                    "",
                ),
            ],
        )
    }

    #[test]
    fn sections_are_deduplicated_in_order() {
        let q = sample();
        assert_eq!(
            q.sections(),
            vec!["Basic Information", "Required Assignment Behaviors"]
        );
    }

    #[test]
    fn answered_skips_blank_entries() {
        let q = sample();
        let answered: Vec<_> = q.answered().collect();
        assert_eq!(answered.len(), 2);
        assert!(answered.iter().all(|e| !e.is_blank()));
    }

    #[test]
    fn blank_answer_renders_as_bare_arrow() {
        let md = sample().to_markdown();
        assert!(md.contains("**Greeting style (how you usually say hello):**\n→\n"));
    }

    #[test]
    fn multiline_answer_renders_one_arrow_per_line() {
        let q = Questionnaire::new(
            None,
            vec![QuestionnaireEntry::new(
                "Voice",
                "Filler phrases:",
                "honestly\nto be fair",
            )],
        );
        let md = q.to_markdown();
        assert!(md.contains("→ honestly\n→ to be fair\n"));
    }

    #[test]
    fn entry_count_matches_question_count() {
        assert_eq!(sample().len(), 3);
    }
}
