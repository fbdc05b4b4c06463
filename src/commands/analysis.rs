use crate::models::PanelUpdate;
use crate::services::config_service;
use crate::services::panel::PanelController;
use crate::services::pipeline::AnalysisPipeline;
use crate::services::renderer;
use crate::services::sentiment_client::SentimentClient;
use crate::services::surfaces::PanelSurface;
use tauri::{AppHandle, State};

async fn run_panel_cycle(app: AppHandle, text: &str) -> Result<PanelUpdate, String> {
    let config = config_service::load_config_or_default();
    let client = SentimentClient::from_config(&config).map_err(|e| {
        log::error!("Failed to create sentiment client: {}", e);
        e.user_message().to_string()
    })?;

    let surface = PanelSurface::new(app, config.icons.clone(), config.bar_delay_ms);
    let state = AnalysisPipeline::new(client).run(text, &surface).await;

    Ok(renderer::panel_update(&state, text, &config.icons, config.bar_delay_ms))
}

/// Called by the panel once loaded; analyzes the staged selection if any.
#[tauri::command]
pub async fn panel_ready(
    app: AppHandle,
    controller: State<'_, PanelController>,
) -> Result<PanelUpdate, String> {
    match controller.take_pending() {
        Some(text) => run_panel_cycle(app, &text).await,
        None => Ok(PanelUpdate::Idle),
    }
}

#[tauri::command]
pub async fn analyze_text(app: AppHandle, text: String) -> Result<PanelUpdate, String> {
    run_panel_cycle(app, &text).await
}

#[tauri::command]
pub fn get_last_selection(controller: State<'_, PanelController>) -> Option<String> {
    controller.peek()
}

#[tauri::command]
pub async fn check_service_health() -> Result<String, String> {
    let config = config_service::load_config_or_default();
    let client = SentimentClient::from_config(&config).map_err(|e| e.to_string())?;
    client.check_health().await.map_err(|e| {
        log::warn!("Health check failed: {}", e);
        "Service is unreachable.".to_string()
    })
}
