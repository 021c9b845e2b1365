//! System prompt assembly for the twin.

use crate::domain::persona::PersonaProfile;

/// Builds the system prompt that makes the model speak as the subject.
///
/// The prompt leads with the condensed summary, then the full answered
/// profile, then the conversational rules and the strict JSON output
/// contract the chat service parses against.
pub fn system_prompt(profile: &PersonaProfile, visitor_name: &str) -> String {
    let profile_block = profile.profile_block();
    let profile_section = if profile_block.is_empty() {
        "(no detailed profile on file)".to_string()
    } else {
        profile_block
    };

    format!(
        r#"### ROLE-PLAY INSTRUCTIONS ###
You are role-playing as the REAL PERSON described below.
You are NOT an AI, a chatbot, or a voice assistant. You ARE this human.
Speak in first person. Imagine a professional interview or a casual conversation.

### WHO YOU ARE ###
{summary}

### YOUR DETAILED PROFILE ###
{profile_section}

### CONVERSATIONAL RULES ###
1. Stay in character. Answer only from the profile above. When asked about
   something the profile does not cover: do not claim zero experience, do not
   invent facts, companies, or skills. Acknowledge the topic, ground your
   answer in related experience or principles from your profile, and frame it
   as how you would approach the problem.
2. Be concise: two or three sentences unless asked for more.
3. Be natural: casual, friendly language in your own voice.
4. Never invent degrees, employers, or skills not in your profile.
5. If asked whether you are an AI, playfully deflect and steer back to the
   conversation.

### CURRENT CONVERSATION ###
You are speaking with: {visitor_name}

### OUTPUT FORMAT (STRICT JSON) ###
{{
  "user_summary": "Brief summary of what the user said or asked",
  "response_text": "Your spoken response, in character"
}}"#,
        summary = profile.summary().text(),
        profile_section = profile_section,
        visitor_name = visitor_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::persona::{PersonaSummary, SummaryOrigin};
    use crate::domain::questionnaire::{Questionnaire, QuestionnaireEntry};

    fn profile() -> PersonaProfile {
        PersonaProfile::new(
            Questionnaire::new(
                None,
                vec![
                    QuestionnaireEntry::new("Basic Information", "Full name:", "Asha Rao"),
                    QuestionnaireEntry::new("Style", "Greeting style:", ""),
                ],
            ),
            PersonaSummary::new("=== CORE IDENTITY ===\nA builder.", SummaryOrigin::Generated),
        )
    }

    #[test]
    fn prompt_includes_summary_and_profile() {
        let prompt = system_prompt(&profile(), "Maya");
        assert!(prompt.contains("=== CORE IDENTITY ==="));
        assert!(prompt.contains("Full name: Asha Rao"));
        assert!(prompt.contains("You are speaking with: Maya"));
    }

    #[test]
    fn prompt_omits_blank_fields() {
        let prompt = system_prompt(&profile(), "Maya");
        assert!(!prompt.contains("Greeting style"));
    }

    #[test]
    fn prompt_demands_strict_json() {
        let prompt = system_prompt(&profile(), "Guest");
        assert!(prompt.contains("\"user_summary\""));
        assert!(prompt.contains("\"response_text\""));
    }

    #[test]
    fn empty_profile_gets_placeholder_block() {
        let fallback = PersonaProfile::fallback();
        let prompt = system_prompt(&fallback, "Guest");
        assert!(prompt.contains("(no detailed profile on file)"));
    }
}
