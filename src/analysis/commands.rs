use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use tauri::State;

use crate::analysis::{generate_summary, to_markdown, AnalysisConfig};
use crate::models::SessionSummary;
use crate::AppState;

#[tauri::command]
pub async fn generate_session_summary(
    state: State<'_, AppState>,
    session_id: String,
) -> Result<SessionSummary, String> {
    let db = &state.db;
    let snapshot = db
        .load_snapshot(&session_id)
        .await
        .map_err(|e| e.to_string())?;

    let summary = generate_summary(&snapshot, &AnalysisConfig::default());
    info!(
        "Generated summary for session {} ({} quotes, score {:.1})",
        session_id,
        summary.key_quotes.len(),
        summary.session_quality_score
    );
    Ok(summary)
}

#[tauri::command]
pub async fn export_summary_markdown(
    state: State<'_, AppState>,
    session_id: String,
    directory: String,
) -> Result<String, String> {
    let db = &state.db;
    let snapshot = db
        .load_snapshot(&session_id)
        .await
        .map_err(|e| e.to_string())?;
    let summary = generate_summary(&snapshot, &AnalysisConfig::default());
    let document = to_markdown(&summary);

    let prefix = state.settings.export().filename_prefix;
    let path = write_export(&directory, &prefix, &snapshot.participant_name, &document)
        .map_err(|e| e.to_string())?;

    let mut export_settings = state.settings.export();
    export_settings.last_export_dir = Some(directory);
    state
        .settings
        .update_export(export_settings)
        .map_err(|e| e.to_string())?;

    Ok(path.display().to_string())
}

fn write_export(
    directory: &str,
    prefix: &str,
    participant_name: &str,
    document: &str,
) -> Result<PathBuf> {
    let dir = PathBuf::from(directory);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let filename = format!(
        "{}-{}-{}.md",
        sanitize_filename(prefix),
        sanitize_filename(participant_name),
        Utc::now().format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(filename);
    std::fs::write(&path, document)
        .with_context(|| format!("failed to write export to {}", path.display()))?;

    info!("Exported summary to {}", path.display());
    Ok(path)
}

/// Keep alphanumerics, dashes, and underscores; collapse runs of anything
/// else to a single dash so the name stays readable on every filesystem.
fn sanitize_filename(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_dash = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && !out.is_empty() {
            out.push('-');
            last_was_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        "session".to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_and_lowercases() {
        assert_eq!(sanitize_filename("Jordan Q. Tester"), "jordan-q-tester");
        assert_eq!(sanitize_filename("  //  "), "session");
        assert_eq!(sanitize_filename("ok_name-1"), "ok_name-1");
    }
}
