use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindowBuilder};

use super::selection_store::SelectionStore;
use super::surfaces::PANEL_LABEL;

pub const SELECTION_CHANGED_EVENT: &str = "selection-changed";

/// Owns the panel's pending selection.
pub struct PanelController {
    store: SelectionStore,
}

impl PanelController {
    pub fn new(store: SelectionStore) -> Self {
        Self { store }
    }

    pub fn stage(&self, text: &str) -> Result<(), String> {
        self.store.put(text)
    }

    /// The staged selection, consumed so a reload does not re-run it.
    pub fn take_pending(&self) -> Option<String> {
        self.store.take()
    }

    pub fn peek(&self) -> Option<String> {
        self.store.get()
    }
}

/// Shows the panel, creating it on first use. An already open panel is told
/// to pick up the new selection instead of being rebuilt.
pub fn open_panel(app: &AppHandle) {
    let app_clone = app.clone();

    let _ = app.run_on_main_thread(move || {
        let app = app_clone;

        if let Some(window) = app.get_webview_window(PANEL_LABEL) {
            let _ = window.show();
            let _ = window.set_focus();
            if let Err(e) = app.emit_to(PANEL_LABEL, SELECTION_CHANGED_EVENT, ()) {
                log::warn!("Failed to notify panel: {}", e);
            }
            return;
        }

        match WebviewWindowBuilder::new(&app, PANEL_LABEL, WebviewUrl::App("index.html".into()))
            .title("Sentiment Analyzer")
            .inner_size(360.0, 460.0)
            .resizable(false)
            .always_on_top(true)
            .center()
            .visible(true)
            .build()
        {
            Ok(window) => {
                let _ = window.set_focus();
            }
            Err(e) => log::error!("Failed to open panel: {}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_selection_is_consumed_once() {
        let dir = tempfile::tempdir().unwrap();
        let controller = PanelController::new(SelectionStore::new(dir.path().join("slot.json")));

        controller.stage("old").unwrap();
        controller.stage("new").unwrap();
        assert_eq!(controller.peek().as_deref(), Some("new"));
        assert_eq!(controller.take_pending().as_deref(), Some("new"));
        assert_eq!(controller.take_pending(), None);
    }
}
