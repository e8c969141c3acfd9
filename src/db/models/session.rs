use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    InProgress,
    Completed,
    Interrupted,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::InProgress => "InProgress",
            SessionStatus::Completed => "Completed",
            SessionStatus::Interrupted => "Interrupted",
        }
    }
}

/// One recorded interview session as stored in SQLite. The transcript,
/// insight markers, and topic records live in their own tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub participant_name: String,
    pub project_name: String,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub total_duration_secs: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List-view projection with transcript counts, for the sessions screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionListItem {
    pub id: String,
    pub participant_name: String,
    pub project_name: String,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub total_duration_secs: f64,
    pub utterance_count: usize,
    pub insight_count: usize,
}
