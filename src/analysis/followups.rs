use crate::models::{ThemeSummary, TopicCoverageRecord, TopicStatus};

const COPING_QUESTION: &str = "How do you currently work around the challenges you mentioned?";
const FALLBACK_QUESTION: &str =
    "Is there anything else about your experience that we haven't discussed today?";

/// Template-based follow-up questions, in a fixed order: missed topics,
/// half-covered topics, the top theme, a coping question when pain points
/// surfaced, then a single generic fallback if nothing else applied.
/// The result is never empty.
pub fn suggest_follow_ups(
    records: &[TopicCoverageRecord],
    themes: &[ThemeSummary],
    has_pain_points: bool,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    for record in records
        .iter()
        .filter(|r| r.status == TopicStatus::NotCovered)
        .take(2)
    {
        suggestions.push(format!(
            "Can you tell me more about your experience with {}?",
            record.topic_name.to_lowercase()
        ));
    }

    for record in records
        .iter()
        .filter(|r| r.status == TopicStatus::PartialCoverage)
        .take(2)
    {
        suggestions.push(format!(
            "You mentioned {} earlier. Could you elaborate on that?",
            record.topic_name.to_lowercase()
        ));
    }

    if let Some(top_theme) = themes.first() {
        suggestions.push(format!(
            "The topic of {} came up frequently. What would your ideal solution look like?",
            top_theme.name.to_lowercase()
        ));
    }

    if has_pain_points {
        suggestions.push(COPING_QUESTION.to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(FALLBACK_QUESTION.to_string());
    }

    suggestions
}
