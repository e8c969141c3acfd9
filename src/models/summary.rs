use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A frequently-mentioned content word with its supporting evidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSummary {
    /// Capitalized content word, e.g. "Onboarding".
    pub name: String,
    pub mention_count: usize,
    /// Up to 3 excerpts (150 chars each), in first-seen order.
    pub supporting_quotes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyQuote {
    /// Quote text, truncated to 300 chars.
    pub text: String,
    /// Display label, e.g. "Participant".
    pub speaker: String,
    pub timestamp_seconds: f64,
    /// Fixed-vocabulary reason this quote was selected.
    pub significance: String,
}

/// The engine's sole output. Built once per generate call and never
/// partially updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub key_themes: Vec<ThemeSummary>,
    pub participant_pain_points: Vec<String>,
    pub positive_highlights: Vec<String>,
    pub key_quotes: Vec<KeyQuote>,
    pub topic_gaps: Vec<String>,
    /// Never empty; falls back to one generic closing question.
    pub suggested_follow_ups: Vec<String>,
    /// Composite quality score in [0, 100].
    pub session_quality_score: f64,
    /// When this summary was generated, not when the session ran.
    pub generated_at: DateTime<Utc>,
}
