use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tauri::State;
use uuid::Uuid;

use crate::db::models::{Session, SessionListItem, SessionStatus};
use crate::models::{InsightMarker, SessionSnapshot, TopicCoverageRecord, Utterance};
use crate::AppState;

/// Payload for persisting a finished interview from the recording view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionImport {
    pub participant_name: String,
    pub project_name: String,
    pub started_at: DateTime<Utc>,
    pub total_duration_seconds: f64,
    pub utterances: Vec<Utterance>,
    pub insight_markers: Vec<InsightMarker>,
    pub topic_records: Vec<TopicCoverageRecord>,
}

#[tauri::command]
pub async fn save_session(
    state: State<'_, AppState>,
    import: SessionImport,
) -> Result<Session, String> {
    let now = Utc::now();
    let session = Session {
        id: Uuid::new_v4().to_string(),
        participant_name: import.participant_name,
        project_name: import.project_name,
        status: SessionStatus::Completed,
        started_at: import.started_at,
        total_duration_secs: import.total_duration_seconds,
        created_at: now,
        updated_at: now,
    };

    let db = &state.db;
    db.insert_session(&session).await.map_err(|e| e.to_string())?;
    db.insert_transcript(
        &session.id,
        import.utterances,
        import.insight_markers,
        import.topic_records,
    )
    .await
    .map_err(|e| e.to_string())?;

    Ok(session)
}

#[tauri::command]
pub async fn list_sessions(
    state: State<'_, AppState>,
    limit: Option<usize>,
    offset: Option<usize>,
) -> Result<Vec<SessionListItem>, String> {
    let db = &state.db;
    db.list_sessions_paginated(limit.unwrap_or(50), offset.unwrap_or(0))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_session_snapshot(
    state: State<'_, AppState>,
    session_id: String,
) -> Result<SessionSnapshot, String> {
    let db = &state.db;
    db.load_snapshot(&session_id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_session(
    state: State<'_, AppState>,
    session_id: String,
) -> Result<(), String> {
    let db = &state.db;
    db.delete_session(&session_id).await.map_err(|e| e.to_string())
}
