use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Speaker {
    Interviewer,
    Participant,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::Interviewer => "Interviewer",
            Speaker::Participant => "Participant",
        }
    }
}

/// One timestamped, speaker-attributed line of transcript text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utterance {
    pub speaker: Speaker,
    pub text: String,
    /// Seconds from session start; monotonic within a session.
    pub timestamp_seconds: f64,
}

/// A moment flagged as notable during the interview. The analysis engine
/// only reads the timestamp; `quote` and `theme` are carried for the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightMarker {
    pub timestamp_seconds: f64,
    pub quote: Option<String>,
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TopicStatus {
    NotCovered,
    PartialCoverage,
    FullyCovered,
    Skipped,
}

impl TopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::NotCovered => "NotCovered",
            TopicStatus::PartialCoverage => "PartialCoverage",
            TopicStatus::FullyCovered => "FullyCovered",
            TopicStatus::Skipped => "Skipped",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCoverageRecord {
    pub topic_name: String,
    pub status: TopicStatus,
}

/// Everything the analysis engine consumes for one finished session.
/// Immutable input; the engine never writes back into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub participant_name: String,
    pub project_name: String,
    pub utterances: Vec<Utterance>,
    pub insight_markers: Vec<InsightMarker>,
    pub topic_records: Vec<TopicCoverageRecord>,
    pub total_duration_seconds: f64,
}
