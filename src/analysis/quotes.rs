use crate::analysis::config::{
    AnalysisConfig, EMOTIONAL_KEYWORDS, PAIN_KEYWORDS, POSITIVE_KEYWORDS,
};
use crate::analysis::detectors::contains_any;
use crate::analysis::tokenize::excerpt;
use crate::models::{InsightMarker, KeyQuote, Speaker, Utterance};

pub const SIGNIFICANCE_INSIGHT: &str = "Flagged as an insight moment";
pub const SIGNIFICANCE_EMOTIONAL: &str = "Contains strong emotional language";
pub const SIGNIFICANCE_PAIN: &str = "Reveals a pain point";
pub const SIGNIFICANCE_POSITIVE: &str = "Highlights a positive experience";
pub const SIGNIFICANCE_DEFAULT: &str = "Substantive response";

/// Rank all utterances (both speakers) by additive signal score and keep
/// the top few as key quotes.
pub fn rank_key_quotes(
    utterances: &[Utterance],
    insights: &[InsightMarker],
    config: &AnalysisConfig,
) -> Vec<KeyQuote> {
    let mut scored: Vec<(f64, KeyQuote)> = utterances
        .iter()
        .map(|u| score_utterance(u, insights, config))
        .filter(|(score, _)| *score > config.min_quote_score)
        .collect();

    // Stable sort keeps utterance order for equal scores.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(config.max_quotes)
        .map(|(_, quote)| quote)
        .collect()
}

fn score_utterance(
    utterance: &Utterance,
    insights: &[InsightMarker],
    config: &AnalysisConfig,
) -> (f64, KeyQuote) {
    let mut score = 0.0;

    let word_count = utterance.text.split_whitespace().count();
    if word_count > 15 {
        score += word_count.min(60) as f64 / 60.0 * 30.0;
    }

    if utterance.speaker == Speaker::Participant {
        score += 20.0;
    }

    let near_insight = insights.iter().any(|marker| {
        (marker.timestamp_seconds - utterance.timestamp_seconds).abs() <= config.insight_window_secs
    });
    if near_insight {
        score += 30.0;
    }

    let lowered = utterance.text.to_lowercase();
    let emotional_hits = EMOTIONAL_KEYWORDS
        .iter()
        .filter(|k| lowered.contains(*k))
        .count();
    score += emotional_hits as f64 * 10.0;

    // First-match-wins priority order; exactly one tag regardless of how
    // many signals fired.
    let checks: [(bool, &str); 4] = [
        (near_insight, SIGNIFICANCE_INSIGHT),
        (emotional_hits > 0, SIGNIFICANCE_EMOTIONAL),
        (contains_any(&utterance.text, PAIN_KEYWORDS), SIGNIFICANCE_PAIN),
        (
            contains_any(&utterance.text, POSITIVE_KEYWORDS),
            SIGNIFICANCE_POSITIVE,
        ),
    ];
    let significance = checks
        .iter()
        .find(|(fired, _)| *fired)
        .map(|(_, label)| *label)
        .unwrap_or(SIGNIFICANCE_DEFAULT);

    (
        score,
        KeyQuote {
            text: excerpt(&utterance.text, config.quote_chars),
            speaker: utterance.speaker.as_str().to_string(),
            timestamp_seconds: utterance.timestamp_seconds,
            significance: significance.to_string(),
        },
    )
}
