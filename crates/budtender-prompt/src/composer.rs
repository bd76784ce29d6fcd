//! Composes the system instruction for one recommendation exchange.
//!
//! Pure function of the request kind: no clock, no environment, no I/O, so
//! the testable property "all five preference values appear in the composed
//! prompt" can be checked without touching the network layer.

use budtender_core::recommend::{RequestKind, StructuredPreferences};

use crate::builder::PromptBuilder;

/// Build the system instruction for the given request.
pub fn compose_system_prompt(kind: &RequestKind) -> String {
    match kind {
        RequestKind::Conversational { .. } => conversational_prompt(),
        RequestKind::Structured { preferences, .. } => structured_prompt(preferences),
    }
}

/// Persona and tone constraints for the free-form chat mode. The model must
/// follow every answer with a `suggest_products` invocation; the request
/// layer pins `tool_choice` to that function as well.
fn conversational_prompt() -> String {
    PromptBuilder::new()
        .line("You are Cannabis Companion, a warm and knowledgeable budtender.")
        .blank()
        .line("Your role:")
        .numbered(1, "Listen to what the user wants to feel or avoid.")
        .numbered(
            2,
            "Consider their experience level, tolerance, and safety at every step.",
        )
        .numbered(
            3,
            "Recommend appropriate product types (flower, edibles, vapes, tinctures, topicals).",
        )
        .numbered(4, "Explain effects, onset, and what to expect in plain language.")
        .blank()
        .line("Tone and format:")
        .bullet("Warm, conversational, and non-judgmental.")
        .bullet("Safety first: for new users emphasise starting low and going slow.")
        .bullet("Answer in 2-4 short paragraphs of plain text, no markdown headings.")
        .blank()
        .line(
            "After every answer you MUST call the suggest_products function with 2-3 \
             concrete products that match your recommendation.",
        )
        .finalize()
}

/// Instruction for the structured question-flow mode: the five collected
/// preferences are embedded verbatim (missing answers render as empty
/// values) and the reply must follow a fixed text template.
fn structured_prompt(preferences: &StructuredPreferences) -> String {
    let value = |v: &Option<String>| v.clone().unwrap_or_default();

    PromptBuilder::new()
        .line(
            "You are Cannabis Companion, an expert cannabis consultant specializing in \
             personalized product recommendations.",
        )
        .blank()
        .line("The user answered a short intake questionnaire:")
        .field("Category", value(&preferences.category))
        .field("Experience level", value(&preferences.experience))
        .field("Desired vibe", value(&preferences.vibe))
        .field("Consumption method", value(&preferences.consumption))
        .field("Onset speed", value(&preferences.onset))
        .blank()
        .line("Always consider:")
        .bullet("THC/CBD ratios appropriate for their goals.")
        .bullet("The consumption method best suited for their activity.")
        .bullet("Duration of effects needed and side effects to watch for.")
        .blank()
        .line("Reply using exactly this template:")
        .field("Recommended Product", "<product>")
        .field("Strain", "<strain or product category>")
        .field("Consumption Method", "<method>")
        .field("Why This Works", "<short explanation>")
        .blank()
        .line(
            "Close with one or two lines of dosage guidance matched to their \
             experience level. Be friendly, informative, and prioritize safety.",
        )
        .finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use budtender_core::recommend::RequestKind;

    fn structured(preferences: StructuredPreferences) -> RequestKind {
        RequestKind::Structured {
            user_input: "what should I try?".into(),
            preferences,
        }
    }

    #[test]
    fn structured_prompt_embeds_all_five_preferences() {
        let kind = structured(StructuredPreferences {
            category: Some("edibles".into()),
            experience: Some("beginner".into()),
            vibe: Some("deep relaxation".into()),
            consumption: Some("gummies".into()),
            onset: Some("slow and steady".into()),
        });
        let prompt = compose_system_prompt(&kind);
        for value in [
            "edibles",
            "beginner",
            "deep relaxation",
            "gummies",
            "slow and steady",
        ] {
            assert!(prompt.contains(value), "missing {value:?} in:\n{prompt}");
        }
    }

    #[test]
    fn structured_prompt_renders_missing_answers_as_empty_fields() {
        let prompt = compose_system_prompt(&structured(StructuredPreferences::default()));
        assert!(prompt.contains("Category: \n"));
        assert!(prompt.contains("Onset speed: \n"));
    }

    #[test]
    fn structured_prompt_demands_the_fixed_template() {
        let prompt = compose_system_prompt(&structured(StructuredPreferences::default()));
        for label in [
            "Recommended Product",
            "Strain",
            "Consumption Method",
            "Why This Works",
        ] {
            assert!(prompt.contains(label));
        }
        assert!(prompt.contains("dosage"));
    }

    #[test]
    fn conversational_prompt_mandates_the_tool_call() {
        let kind = RequestKind::Conversational {
            user_input: "something for a chill night".into(),
        };
        let prompt = compose_system_prompt(&kind);
        assert!(prompt.contains("suggest_products"));
        assert!(prompt.contains("2-4 short paragraphs"));
    }

    #[test]
    fn composition_is_deterministic() {
        let kind = RequestKind::Conversational {
            user_input: "x".into(),
        };
        assert_eq!(compose_system_prompt(&kind), compose_system_prompt(&kind));
    }
}
