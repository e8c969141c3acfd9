mod analysis;
mod db;
mod models;
mod sessions;
mod settings;

use analysis::commands::{export_summary_markdown, generate_session_summary};
use chrono::Utc;
use db::Database;
use log::warn;
use sessions::commands::{delete_session, get_session_snapshot, list_sessions, save_session};
use settings::{ExportSettings, SettingsStore};
use tauri::{Manager, State};

pub(crate) struct AppState {
    pub(crate) db: Database,
    pub(crate) settings: SettingsStore,
}

#[tauri::command]
fn get_export_settings(state: State<AppState>) -> Result<ExportSettings, String> {
    Ok(state.settings.export())
}

#[tauri::command]
fn set_export_settings(
    settings: ExportSettings,
    state: State<AppState>,
) -> Result<(), String> {
    state
        .settings
        .update_export(settings)
        .map_err(|e| e.to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Debrief starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let db_path = app_data_dir.join("debrief.sqlite3");
                let database = Database::new(db_path)?;

                // Close out sessions that were recording when the app last crashed.
                {
                    let db_for_recovery = database.clone();
                    tauri::async_runtime::block_on(async move {
                        if let Some(session) = db_for_recovery.get_in_progress_session().await? {
                            let now = Utc::now();
                            warn!(
                                "Recovered in-progress session {}; marking as Interrupted",
                                session.id
                            );
                            db_for_recovery
                                .mark_session_interrupted(&session.id, now)
                                .await?;
                        }
                        Ok::<(), anyhow::Error>(())
                    })?;
                }

                let settings_path = app_data_dir.join("settings.json");
                let settings_store = SettingsStore::new(settings_path)?;

                app.manage(AppState {
                    db: database,
                    settings: settings_store,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            save_session,
            list_sessions,
            get_session_snapshot,
            delete_session,
            generate_session_summary,
            export_summary_markdown,
            get_export_settings,
            set_export_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
