use std::path::Path;
use tauri::{AppHandle, Emitter, Manager};
use tauri_plugin_notification::NotificationExt;

use crate::models::{NotificationContent, PresentationState};
use super::config_service::IconSet;
use super::pipeline::PresentationSurface;
use super::renderer;

pub const PANEL_LABEL: &str = "panel";
pub const ANALYSIS_STATE_EVENT: &str = "analysis-state";

/// Icons are bundled resources; the notification daemon needs an absolute path.
pub fn notification_icon_path(resource_dir: Option<&Path>, icon: &str) -> String {
    match resource_dir {
        Some(dir) if !Path::new(icon).is_absolute() => dir.join(icon).to_string_lossy().into_owned(),
        _ => icon.to_string(),
    }
}

pub fn show_notification(app: &AppHandle, content: &NotificationContent) {
    let resource_dir = app
        .path()
        .resource_dir()
        .map_err(|e| log::warn!("Resource directory unavailable: {}", e))
        .ok();
    let icon = notification_icon_path(resource_dir.as_deref(), &content.icon);

    let shown = app
        .notification()
        .builder()
        .title(&content.title)
        .body(&content.message)
        .icon(icon)
        .show();

    if let Err(e) = shown {
        log::warn!("Failed to show notification: {}", e);
    }
}

/// Passive surface: a single system notification once the cycle ends.
pub struct NotificationSurface {
    app: AppHandle,
    icons: IconSet,
}

impl NotificationSurface {
    pub fn new(app: AppHandle, icons: IconSet) -> Self {
        Self { app, icons }
    }
}

impl PresentationSurface for NotificationSurface {
    fn is_interactive(&self) -> bool {
        false
    }

    fn render(&self, state: &PresentationState, _selected_text: &str) {
        let content = match state {
            PresentationState::Result(result) => renderer::notification_for_result(result, &self.icons),
            PresentationState::Error { .. } => renderer::notification_for_error(&self.icons),
            PresentationState::Idle | PresentationState::Loading => return,
        };
        show_notification(&self.app, &content);
    }
}

/// Interactive surface: pushes every state to the panel window.
pub struct PanelSurface {
    app: AppHandle,
    icons: IconSet,
    bar_delay_ms: u64,
}

impl PanelSurface {
    pub fn new(app: AppHandle, icons: IconSet, bar_delay_ms: u64) -> Self {
        Self { app, icons, bar_delay_ms }
    }
}

impl PresentationSurface for PanelSurface {
    fn is_interactive(&self) -> bool {
        true
    }

    fn render(&self, state: &PresentationState, selected_text: &str) {
        let update = renderer::panel_update(state, selected_text, &self.icons, self.bar_delay_ms);
        if let Err(e) = self.app.emit_to(PANEL_LABEL, ANALYSIS_STATE_EVENT, update) {
            log::warn!("Failed to update panel: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn relative_icon_resolves_under_resource_dir() {
        let dir = PathBuf::from("/opt/sentiment-analyzer");
        assert_eq!(
            notification_icon_path(Some(&dir), "icons/positive.png"),
            dir.join("icons/positive.png").to_string_lossy()
        );
    }

    #[test]
    fn each_category_gets_its_own_resolved_icon() {
        let dir = PathBuf::from("/opt/sentiment-analyzer");
        let icons = IconSet::default();
        let resolved: Vec<String> = [&icons.positive, &icons.negative, &icons.neutral]
            .iter()
            .map(|icon| notification_icon_path(Some(&dir), icon))
            .collect();

        assert!(resolved.iter().all(|p| Path::new(p).is_absolute()));
        assert_eq!(resolved[2], dir.join("icons/neutral.png").to_string_lossy());
        assert_ne!(resolved[0], resolved[1]);
    }

    #[test]
    fn absolute_icon_or_missing_dir_passes_through() {
        let dir = PathBuf::from("/opt/sentiment-analyzer");
        let absolute = dir.join("custom.png").to_string_lossy().into_owned();
        assert_eq!(notification_icon_path(Some(&dir), &absolute), absolute);
        assert_eq!(notification_icon_path(None, "icons/neutral.png"), "icons/neutral.png");
    }
}
