use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};

use crate::db::models::SessionStatus;
use crate::models::{Speaker, TopicStatus};

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

pub fn parse_session_status(value: &str) -> Result<SessionStatus> {
    match value {
        "InProgress" => Ok(SessionStatus::InProgress),
        "Completed" => Ok(SessionStatus::Completed),
        "Interrupted" => Ok(SessionStatus::Interrupted),
        other => Err(anyhow!("unknown session status {other}")),
    }
}

pub fn parse_speaker(value: &str) -> Result<Speaker> {
    match value {
        "Interviewer" => Ok(Speaker::Interviewer),
        "Participant" => Ok(Speaker::Participant),
        other => Err(anyhow!("unknown speaker {other}")),
    }
}

pub fn parse_topic_status(value: &str) -> Result<TopicStatus> {
    match value {
        "NotCovered" => Ok(TopicStatus::NotCovered),
        "PartialCoverage" => Ok(TopicStatus::PartialCoverage),
        "FullyCovered" => Ok(TopicStatus::FullyCovered),
        "Skipped" => Ok(TopicStatus::Skipped),
        other => Err(anyhow!("unknown topic status {other}")),
    }
}
