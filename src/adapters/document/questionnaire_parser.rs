//! Regex-based questionnaire document parser adapter.
//!
//! Parses the persona questionnaire into ordered section/question/answer
//! entries. This is the inverse of `Questionnaire::to_markdown` for
//! round-trip consistency.

use regex::Regex;

use crate::domain::questionnaire::{
    ParseIssue, Questionnaire, QuestionnaireEntry, QuestionnaireError,
};
use crate::ports::QuestionnaireParser;

/// Regex-based implementation of QuestionnaireParser.
///
/// The document format is line-oriented: `##` headings open sections,
/// bolded lines are question prompts, and `→`-prefixed lines carry the
/// answer for the preceding prompt. Anything else (intro prose, `---`
/// rules, blank lines) is ignored.
#[derive(Debug, Clone)]
pub struct MarkdownQuestionnaireParser {
    title_regex: Regex,
    section_regex: Regex,
    question_regex: Regex,
    answer_regex: Regex,
}

impl Default for MarkdownQuestionnaireParser {
    fn default() -> Self {
        Self::new()
    }
}

/// A question prompt waiting for its arrow line(s).
struct PendingQuestion {
    section: String,
    question: String,
    line: usize,
    answer_lines: Vec<String>,
    has_marker: bool,
}

impl MarkdownQuestionnaireParser {
    /// Creates a new parser with precompiled regexes.
    pub fn new() -> Self {
        Self {
            // Matches "# Persona Questionnaire" but not "## ..."
            title_regex: Regex::new(r"^#\s+(.+)$").unwrap(),
            // Matches "## Basic Information"
            section_regex: Regex::new(r"^##\s+(.+)$").unwrap(),
            // Matches "**Full name:**" with an optional colon outside the bold
            question_regex: Regex::new(r"^\*\*([^*]+)\*\*:?\s*$").unwrap(),
            // Matches "→ answer text" and the bare "→" of a blank field
            answer_regex: Regex::new(r"^→\s?(.*)$").unwrap(),
        }
    }

    /// Closes out a pending question, producing an entry or an issue.
    fn finalize(
        pending: Option<PendingQuestion>,
        entries: &mut Vec<QuestionnaireEntry>,
        issues: &mut Vec<ParseIssue>,
    ) {
        let Some(pending) = pending else {
            return;
        };

        if !pending.has_marker {
            issues.push(ParseIssue::new(
                pending.line,
                format!("question '{}' has no answer marker", pending.question),
            ));
            return;
        }

        let answer = pending.answer_lines.join("\n").trim().to_string();
        entries.push(QuestionnaireEntry::new(
            pending.section,
            pending.question,
            answer,
        ));
    }
}

impl QuestionnaireParser for MarkdownQuestionnaireParser {
    fn parse(&self, content: &str) -> Result<Questionnaire, QuestionnaireError> {
        let mut title: Option<String> = None;
        let mut current_section: Option<String> = None;
        let mut pending: Option<PendingQuestion> = None;

        let mut entries = Vec::new();
        let mut issues = Vec::new();

        for (i, raw_line) in content.lines().enumerate() {
            let line_num = i + 1;
            let line = raw_line.trim();

            // Blank lines and horizontal rules never close an answer.
            if line.is_empty() || line.chars().all(|c| c == '-') {
                continue;
            }

            if let Some(caps) = self.answer_regex.captures(line) {
                let text = caps.get(1).map(|m| m.as_str()).unwrap_or("").trim();
                match pending.as_mut() {
                    Some(p) => {
                        p.has_marker = true;
                        p.answer_lines.push(text.to_string());
                    }
                    None => {
                        issues.push(ParseIssue::new(
                            line_num,
                            "answer line without a preceding question",
                        ));
                    }
                }
                continue;
            }

            if let Some(caps) = self.question_regex.captures(line) {
                Self::finalize(pending.take(), &mut entries, &mut issues);

                let question = caps.get(1).map(|m| m.as_str()).unwrap_or("").trim();
                match &current_section {
                    Some(section) => {
                        pending = Some(PendingQuestion {
                            section: section.clone(),
                            question: question.to_string(),
                            line: line_num,
                            answer_lines: Vec::new(),
                            has_marker: false,
                        });
                    }
                    None => {
                        issues.push(ParseIssue::new(
                            line_num,
                            format!("question '{}' appears before any section heading", question),
                        ));
                    }
                }
                continue;
            }

            if let Some(caps) = self.section_regex.captures(line) {
                Self::finalize(pending.take(), &mut entries, &mut issues);
                let heading = caps.get(1).map(|m| m.as_str()).unwrap_or("").trim();
                current_section = Some(heading.to_string());
                continue;
            }

            // Section headings were consumed above, so a match here is a
            // plain "#" title. Only the first one, before any content.
            if let Some(caps) = self.title_regex.captures(line) {
                if title.is_none() && pending.is_none() && current_section.is_none() {
                    title = Some(caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string());
                }
                continue;
            }

            // Anything else is surrounding prose; markers are the only
            // structure the format defines.
        }

        Self::finalize(pending.take(), &mut entries, &mut issues);

        if issues.is_empty() {
            Ok(Questionnaire::new(title, entries))
        } else {
            Err(QuestionnaireError::malformed(issues))
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn test_parser() -> MarkdownQuestionnaireParser {
        MarkdownQuestionnaireParser::new()
    }

    const WELL_FORMED: &str = r#"# Persona Questionnaire

Fill in every field; leave a bare arrow for anything you want to skip.

## Basic Information

**Full name:**
→ Asha Rao

**Current role (what you do today):**
→ Product engineer at a fintech startup.

---

## Communication Style

**Typical sentence length:**
→ Short. Two or three sentences.
→ Longer when explaining technical tradeoffs.

## Required Assignment Behaviors

**Greeting style (how you usually say hello):**
→
"#;

    // ───────────────────────────────────────────────────────────────
    // Well-formed documents
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn entry_count_equals_question_count() {
        let q = test_parser().parse(WELL_FORMED).unwrap();
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn entries_preserve_document_order() {
        let q = test_parser().parse(WELL_FORMED).unwrap();
        let questions: Vec<&str> = q.entries().iter().map(|e| e.question.as_str()).collect();
        assert_eq!(
            questions,
            vec![
                "Full name:",
                "Current role (what you do today):",
                "Typical sentence length:",
                "Greeting style (how you usually say hello):",
            ]
        );
    }

    #[test]
    fn each_entry_belongs_to_its_section() {
        let q = test_parser().parse(WELL_FORMED).unwrap();
        assert_eq!(q.entries()[0].section, "Basic Information");
        assert_eq!(q.entries()[2].section, "Communication Style");
        assert_eq!(q.entries()[3].section, "Required Assignment Behaviors");
    }

    #[test]
    fn title_is_extracted() {
        let q = test_parser().parse(WELL_FORMED).unwrap();
        assert_eq!(q.title(), Some("Persona Questionnaire"));
    }

    #[test]
    fn consecutive_arrow_lines_join_into_one_answer() {
        let q = test_parser().parse(WELL_FORMED).unwrap();
        assert_eq!(
            q.entries()[2].answer,
            "Short. Two or three sentences.\nLonger when explaining technical tradeoffs."
        );
    }

    #[test]
    fn blank_field_parses_to_empty_string() {
        let q = test_parser().parse(WELL_FORMED).unwrap();
        let greeting = &q.entries()[3];
        assert_eq!(greeting.section, "Required Assignment Behaviors");
        assert_eq!(greeting.answer, "");
        assert!(greeting.is_blank());
    }

    #[test]
    fn blank_field_does_not_halt_parsing() {
        let content = r#"## A

**First:**
→

**Second:**
→ still parsed
"#;
        let q = test_parser().parse(content).unwrap();
        assert_eq!(q.len(), 2);
        assert_eq!(q.entries()[1].answer, "still parsed");
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let content = r#"## A

Some instructions to the subject, not a question.

**Q:**
→ answer
"#;
        let q = test_parser().parse(content).unwrap();
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn colon_outside_bold_is_accepted() {
        let content = "## A\n\n**Q**:\n→ answer\n";
        let q = test_parser().parse(content).unwrap();
        assert_eq!(q.entries()[0].question, "Q");
        assert_eq!(q.entries()[0].answer, "answer");
    }

    // ───────────────────────────────────────────────────────────────
    // Round-trip
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn roundtrip_reparses_to_equal_questionnaire() {
        let parser = test_parser();
        let q = parser.parse(WELL_FORMED).unwrap();
        let rendered = q.to_markdown();
        let reparsed = parser.parse(&rendered).unwrap();
        assert_eq!(q, reparsed);
    }

    // ───────────────────────────────────────────────────────────────
    // Malformed documents
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn question_without_marker_is_a_load_failure() {
        let content = r#"## A

**Answered:**
→ fine

**Unanswered:**

## B

**Other:**
→ fine
"#;
        let err = test_parser().parse(content).unwrap_err();
        let issues = err.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 6);
        assert!(issues[0].message.contains("Unanswered"));
        assert!(issues[0].message.contains("no answer marker"));
    }

    #[test]
    fn question_without_marker_at_eof_is_reported() {
        let content = "## A\n\n**Dangling:**\n";
        let err = test_parser().parse(content).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].line, 3);
    }

    #[test]
    fn answer_without_question_is_reported() {
        let content = "## A\n\n→ orphaned answer\n";
        let err = test_parser().parse(content).unwrap_err();
        assert!(err.issues()[0].message.contains("without a preceding question"));
    }

    #[test]
    fn question_before_any_section_is_reported() {
        let content = "**Too early:**\n→ answer\n";
        let err = test_parser().parse(content).unwrap_err();
        // The orphaned arrow line is also reported; nothing is dropped silently.
        assert!(err
            .issues()
            .iter()
            .any(|i| i.message.contains("before any section heading")));
    }

    #[test]
    fn all_issues_are_collected_in_one_failure() {
        let content = r#"## A

**First:**

**Second:**

→ stray after a failed question was finalized? no - belongs to Second
"#;
        // "First" has no marker; the arrow attaches to "Second".
        let result = test_parser().parse(content);
        let err = result.unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert!(err.issues()[0].message.contains("First"));
    }

    #[test]
    fn empty_document_is_well_formed_and_empty() {
        let q = test_parser().parse("").unwrap();
        assert!(q.is_empty());
        assert_eq!(q.title(), None);
    }
}
