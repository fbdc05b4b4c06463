use tauri::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tauri::tray::TrayIconBuilder;
use tauri::{AppHandle, Manager};

use crate::error::AnalysisError;
use crate::models::{DispatchStrategy, NotificationContent};
use super::config_service::{self, Config};
use super::panel::{open_panel, PanelController};
use super::pipeline::AnalysisPipeline;
use super::selection_service::read_selection;
use super::sentiment_client::SentimentClient;
use super::surfaces::{show_notification, NotificationSurface};

pub const TRAY_ID: &str = "sentiment-tray";
pub const MENU_ANALYZE: &str = "analyze_sentiment";
pub const MENU_STATUS: &str = "check_status";
pub const MENU_QUIT: &str = "quit";

/// What a trigger resolves to once the selection has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchAction {
    Ignore,
    Notify(String),
    OpenPanel(String),
}

pub fn plan_dispatch(selection: Option<String>, strategy: DispatchStrategy) -> DispatchAction {
    match selection {
        Some(text) if !text.trim().is_empty() => match strategy {
            DispatchStrategy::Notify => DispatchAction::Notify(text),
            DispatchStrategy::OpenPanel => DispatchAction::OpenPanel(text),
        },
        _ => DispatchAction::Ignore,
    }
}

/// Registers the tray entry. Calling it again leaves the existing tray alone.
pub fn on_menu_register(app: &AppHandle) -> tauri::Result<()> {
    if app.tray_by_id(TRAY_ID).is_some() {
        log::debug!("Tray menu already registered");
        return Ok(());
    }

    let analyze = MenuItem::with_id(app, MENU_ANALYZE, "Analyze Sentiment", true, None::<&str>)?;
    let status = MenuItem::with_id(app, MENU_STATUS, "Check Service Status", true, None::<&str>)?;
    let quit = MenuItem::with_id(app, MENU_QUIT, "Quit", true, None::<&str>)?;
    let separator = PredefinedMenuItem::separator(app)?;
    let menu = Menu::with_items(app, &[&analyze, &status, &separator, &quit])?;

    let mut tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .menu(&menu)
        .tooltip("Sentiment Analyzer")
        .on_menu_event(handle_menu_event);

    if let Some(icon) = app.default_window_icon() {
        tray_builder = tray_builder.icon(icon.clone());
    }

    tray_builder.build(app)?;
    log::info!("Registered \"Analyze Sentiment\" tray entry");
    Ok(())
}

fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    match event.id().as_ref() {
        MENU_ANALYZE => on_selection_triggered(app, read_selection()),
        MENU_STATUS => {
            let handle = app.clone();
            tauri::async_runtime::spawn(async move {
                report_service_status(&handle).await;
            });
        }
        MENU_QUIT => app.exit(0),
        _ => {}
    }
}

/// Entry point for an "analyze" trigger carrying the user's selection.
pub fn on_selection_triggered(app: &AppHandle, selection: Option<String>) {
    let config = config_service::load_config_or_default();

    match plan_dispatch(selection, config.dispatch) {
        DispatchAction::Ignore => log::debug!("Analyze triggered without a selection"),
        DispatchAction::Notify(text) => {
            let handle = app.clone();
            tauri::async_runtime::spawn(async move {
                notify_cycle(handle, config, text).await;
            });
        }
        DispatchAction::OpenPanel(text) => {
            let controller = app.state::<PanelController>();
            if let Err(e) = controller.stage(&text) {
                log::error!("Failed to store selection: {}", e);
                show_notification(app, &error_content(&config));
                return;
            }
            open_panel(app);
        }
    }
}

async fn notify_cycle(app: AppHandle, config: Config, text: String) {
    let client = match SentimentClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create sentiment client: {}", e);
            show_notification(&app, &error_content(&config));
            return;
        }
    };

    let surface = NotificationSurface::new(app, config.icons.clone());
    AnalysisPipeline::new(client).run(&text, &surface).await;
}

fn error_content(config: &Config) -> NotificationContent {
    super::renderer::notification_for_error(&config.icons)
}

/// Body of the status notification for a health check outcome.
pub fn status_message(outcome: &Result<String, AnalysisError>) -> String {
    match outcome {
        Ok(status) if !status.is_empty() => status.clone(),
        Ok(_) => "Service is online.".to_string(),
        Err(_) => "Service is unreachable.".to_string(),
    }
}

async fn report_service_status(app: &AppHandle) {
    let config = config_service::load_config_or_default();
    let outcome = match SentimentClient::from_config(&config) {
        Ok(client) => client.check_health().await,
        Err(e) => Err(e),
    };
    if let Err(e) = &outcome {
        log::warn!("Service status check failed: {}", e);
    }

    show_notification(
        app,
        &NotificationContent {
            title: "Service Status".to_string(),
            message: status_message(&outcome),
            icon: config.icons.neutral.clone(),
        },
    );
}
