use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use crate::db::{
    connection::Database,
    helpers::{parse_datetime, parse_session_status},
    models::{Session, SessionListItem, SessionStatus},
};

fn row_to_session(row: &Row) -> Result<Session> {
    let started_at: String = row.get("started_at")?;
    let created_at: String = row.get("created_at")?;
    let updated_at: String = row.get("updated_at")?;
    let status: String = row.get("status")?;

    Ok(Session {
        id: row.get("id")?,
        participant_name: row.get("participant_name")?,
        project_name: row.get("project_name")?,
        status: parse_session_status(&status)?,
        started_at: parse_datetime(&started_at, "started_at")?,
        total_duration_secs: row.get("total_duration_secs")?,
        created_at: parse_datetime(&created_at, "created_at")?,
        updated_at: parse_datetime(&updated_at, "updated_at")?,
    })
}

impl Database {
    pub async fn insert_session(&self, session: &Session) -> Result<()> {
        let record = session.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO sessions (id, participant_name, project_name, status, started_at, total_duration_secs, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    record.id,
                    record.participant_name,
                    record.project_name,
                    record.status.as_str(),
                    record.started_at.to_rfc3339(),
                    record.total_duration_secs,
                    record.created_at.to_rfc3339(),
                    record.updated_at.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Session> {
        let session_id = session_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, participant_name, project_name, status, started_at, total_duration_secs, created_at, updated_at
                 FROM sessions
                 WHERE id = ?1",
            )?;

            let mut rows = stmt.query(params![session_id])?;
            match rows.next()? {
                Some(row) => row_to_session(row),
                None => Err(anyhow::anyhow!("Session not found")),
            }
        })
        .await
    }

    pub async fn get_in_progress_session(&self) -> Result<Option<Session>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, participant_name, project_name, status, started_at, total_duration_secs, created_at, updated_at
                 FROM sessions
                 WHERE status = 'InProgress'
                 ORDER BY started_at DESC
                 LIMIT 1",
            )?;

            let mut rows = stmt.query([])?;
            let session = match rows.next()? {
                Some(row) => Some(row_to_session(row)?),
                None => None,
            };
            Ok(session)
        })
        .await
    }

    pub async fn mark_session_interrupted(
        &self,
        session_id: &str,
        stopped_at: DateTime<Utc>,
    ) -> Result<()> {
        let session_id = session_id.to_string();
        self.execute(move |conn| {
            conn.execute(
                "UPDATE sessions
                 SET status = ?1,
                     updated_at = ?2
                 WHERE id = ?3",
                params![
                    SessionStatus::Interrupted.as_str(),
                    stopped_at.to_rfc3339(),
                    session_id,
                ],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn list_sessions_paginated(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<SessionListItem>> {
        let limit = limit as i64;
        let offset = offset as i64;
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT s.id, s.participant_name, s.project_name, s.status, s.started_at, s.total_duration_secs,
                        (SELECT COUNT(*) FROM utterances u WHERE u.session_id = s.id) AS utterance_count,
                        (SELECT COUNT(*) FROM insight_markers m WHERE m.session_id = s.id) AS insight_count
                 FROM sessions s
                 WHERE s.status IN ('Completed', 'Interrupted')
                 ORDER BY s.started_at DESC
                 LIMIT ?1 OFFSET ?2",
            )?;

            let mut rows = stmt.query(params![limit, offset])?;
            let mut sessions = Vec::new();
            while let Some(row) = rows.next()? {
                let started_at: String = row.get("started_at")?;
                let status: String = row.get("status")?;
                let utterance_count: i64 = row.get("utterance_count")?;
                let insight_count: i64 = row.get("insight_count")?;
                sessions.push(SessionListItem {
                    id: row.get("id")?,
                    participant_name: row.get("participant_name")?,
                    project_name: row.get("project_name")?,
                    status: parse_session_status(&status)?,
                    started_at: parse_datetime(&started_at, "started_at")?,
                    total_duration_secs: row.get("total_duration_secs")?,
                    utterance_count: utterance_count.max(0) as usize,
                    insight_count: insight_count.max(0) as usize,
                });
            }

            Ok(sessions)
        })
        .await
    }

    /// Delete a session. Utterances, insight markers, and topic records go
    /// with it via ON DELETE CASCADE (schema_v1.sql).
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        let session_id = session_id.to_string();
        self.execute(move |conn| {
            conn.execute("DELETE FROM sessions WHERE id = ?1", params![session_id])?;
            Ok(())
        })
        .await
    }
}
