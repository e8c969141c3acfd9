use crate::analysis::config::{AnalysisConfig, PAIN_KEYWORDS, POSITIVE_KEYWORDS};
use crate::analysis::tokenize::excerpt;
use crate::models::{Speaker, Utterance};

/// Participant utterances containing any pain keyword, in utterance order.
/// Entries keep the original casing, truncated to 200 chars.
pub fn detect_pain_points(utterances: &[Utterance], config: &AnalysisConfig) -> Vec<String> {
    scan(utterances, PAIN_KEYWORDS, config.detector_excerpt_chars)
}

/// Participant utterances containing any positive keyword. An utterance may
/// land in both lists when it matches both keyword sets.
pub fn detect_positive_highlights(utterances: &[Utterance], config: &AnalysisConfig) -> Vec<String> {
    scan(utterances, POSITIVE_KEYWORDS, config.detector_excerpt_chars)
}

fn scan(utterances: &[Utterance], keywords: &[&str], max_chars: usize) -> Vec<String> {
    utterances
        .iter()
        .filter(|u| u.speaker == Speaker::Participant)
        .filter(|u| contains_any(&u.text, keywords))
        .map(|u| excerpt(&u.text, max_chars))
        .collect()
}

/// Case-insensitive substring containment against a keyword table.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k))
}
