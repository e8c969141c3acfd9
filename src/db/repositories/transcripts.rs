use anyhow::Result;
use rusqlite::params;
use uuid::Uuid;

use crate::db::{
    connection::Database,
    helpers::{parse_speaker, parse_topic_status},
};
use crate::models::{InsightMarker, SessionSnapshot, TopicCoverageRecord, Utterance};

impl Database {
    /// Store the full transcript payload of a finished session in one
    /// transaction: utterances, insight markers, and topic records.
    pub async fn insert_transcript(
        &self,
        session_id: &str,
        utterances: Vec<Utterance>,
        insight_markers: Vec<InsightMarker>,
        topic_records: Vec<TopicCoverageRecord>,
    ) -> Result<()> {
        let session_id = session_id.to_string();
        self.execute(move |conn| {
            let tx = conn.transaction()?;

            for (position, utterance) in utterances.iter().enumerate() {
                tx.execute(
                    "INSERT INTO utterances (id, session_id, position, speaker, text, timestamp_seconds)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        Uuid::new_v4().to_string(),
                        session_id,
                        position as i64,
                        utterance.speaker.as_str(),
                        utterance.text,
                        utterance.timestamp_seconds,
                    ],
                )?;
            }

            for marker in &insight_markers {
                tx.execute(
                    "INSERT INTO insight_markers (id, session_id, timestamp_seconds, quote, theme)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        Uuid::new_v4().to_string(),
                        session_id,
                        marker.timestamp_seconds,
                        marker.quote,
                        marker.theme,
                    ],
                )?;
            }

            for (position, record) in topic_records.iter().enumerate() {
                tx.execute(
                    "INSERT INTO topic_records (id, session_id, position, topic_name, status)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        Uuid::new_v4().to_string(),
                        session_id,
                        position as i64,
                        record.topic_name,
                        record.status.as_str(),
                    ],
                )?;
            }

            tx.commit()?;
            Ok(())
        })
        .await
    }

    /// Assemble the immutable analysis input for one session: metadata plus
    /// transcript, markers, and topic records in stored order.
    pub async fn load_snapshot(&self, session_id: &str) -> Result<SessionSnapshot> {
        let session = self.get_session(session_id).await?;
        let session_id = session_id.to_string();

        self.execute(move |conn| {
            let mut utterances = Vec::new();
            {
                let mut stmt = conn.prepare(
                    "SELECT speaker, text, timestamp_seconds
                     FROM utterances
                     WHERE session_id = ?1
                     ORDER BY position ASC",
                )?;
                let mut rows = stmt.query(params![session_id])?;
                while let Some(row) = rows.next()? {
                    let speaker: String = row.get("speaker")?;
                    utterances.push(Utterance {
                        speaker: parse_speaker(&speaker)?,
                        text: row.get("text")?,
                        timestamp_seconds: row.get("timestamp_seconds")?,
                    });
                }
            }

            let mut insight_markers = Vec::new();
            {
                let mut stmt = conn.prepare(
                    "SELECT timestamp_seconds, quote, theme
                     FROM insight_markers
                     WHERE session_id = ?1
                     ORDER BY timestamp_seconds ASC",
                )?;
                let mut rows = stmt.query(params![session_id])?;
                while let Some(row) = rows.next()? {
                    insight_markers.push(InsightMarker {
                        timestamp_seconds: row.get("timestamp_seconds")?,
                        quote: row.get("quote")?,
                        theme: row.get("theme")?,
                    });
                }
            }

            let mut topic_records = Vec::new();
            {
                let mut stmt = conn.prepare(
                    "SELECT topic_name, status
                     FROM topic_records
                     WHERE session_id = ?1
                     ORDER BY position ASC",
                )?;
                let mut rows = stmt.query(params![session_id])?;
                while let Some(row) = rows.next()? {
                    let status: String = row.get("status")?;
                    topic_records.push(TopicCoverageRecord {
                        topic_name: row.get("topic_name")?,
                        status: parse_topic_status(&status)?,
                    });
                }
            }

            Ok(SessionSnapshot {
                participant_name: session.participant_name,
                project_name: session.project_name,
                utterances,
                insight_markers,
                topic_records,
                total_duration_seconds: session.total_duration_secs,
            })
        })
        .await
    }
}
