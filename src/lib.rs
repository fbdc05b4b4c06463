mod commands;
mod error;
mod models;
mod services;

use commands::*;
use services::dispatch;
use services::panel::PanelController;
use services::selection_store::SelectionStore;
use tauri::{Manager, RunEvent};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(services::logging::get_builder().build())
        .plugin(tauri_plugin_notification::init())
        .setup(|app| {
            app.manage(PanelController::new(SelectionStore::in_app_data_dir()?));
            dispatch::on_menu_register(app.handle())?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Config commands
            get_config,
            set_endpoint,
            set_dispatch_strategy,
            // Analysis commands
            panel_ready,
            analyze_text,
            get_last_selection,
            check_service_health,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app, event| {
            // Closing the panel must not quit the tray app; only an explicit exit does.
            if let RunEvent::ExitRequested { api, code, .. } = event {
                if code.is_none() {
                    api.prevent_exit();
                }
            }
        });
}
