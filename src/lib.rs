mod commands;
pub mod config;
mod events;
pub mod labels;
pub mod logging;
pub mod models;
pub mod state;
pub mod store;
pub mod view;

#[cfg(all(feature = "app", not(test)))]
use tauri::Manager;

#[cfg(all(feature = "app", not(test)))]
use crate::commands::*;
#[cfg(all(feature = "app", not(test)))]
use crate::config::Config;
#[cfg(all(feature = "app", not(test)))]
use crate::models::Settings;
#[cfg(all(feature = "app", not(test)))]
use crate::state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
#[cfg(all(feature = "app", not(test)))]
pub fn run() {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logger: {err}");
    }

    tauri::Builder::default()
        .setup(|app| {
            let settings = match app.path().app_config_dir() {
                Ok(dir) => Config::new(dir).load_settings(),
                Err(err) => {
                    log::warn!("setup: app_config_dir unavailable, using defaults: {err}");
                    Settings::default()
                }
            };
            log::info!(
                "setup: screen ready language={} auto_delete_done={}",
                settings.language,
                settings.auto_delete_done
            );
            app.manage(AppState::new(settings));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            load_state,
            load_screen,
            edit_draft,
            add_task,
            toggle_done,
            remove_task,
            begin_edit,
            update_details,
            finish_edit,
            set_auto_delete,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
