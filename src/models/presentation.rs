use serde::{Deserialize, Serialize};

use super::AnalysisResult;

/// Exactly one state is active per panel at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PresentationState {
    Idle,
    Loading,
    Result(AnalysisResult),
    Error { message: String },
}

impl PresentationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PresentationState::Result(_) | PresentationState::Error { .. })
    }
}

/// Everything the panel needs to paint a finished analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub label: String,
    pub badge_class: String,
    pub dot_class: String,
    pub icon: String,
    pub score_text: String,
    pub bar_width: String,
    /// Delay before the bar is widened so the CSS transition is visible.
    pub bar_delay_ms: u64,
    pub certainty: String,
    pub selected_text: String,
}

/// Payload of the `analysis-state` event and of the panel commands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PanelUpdate {
    Idle,
    #[serde(rename_all = "camelCase")]
    Loading { selected_text: String },
    Result(PanelView),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationContent {
    pub title: String,
    pub message: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DispatchStrategy {
    /// Analyze straight away and report through a system notification.
    #[default]
    Notify,
    /// Store the selection and open the panel, which runs the analysis.
    OpenPanel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loading_update_is_tagged() {
        let update = PanelUpdate::Loading { selected_text: "hello".into() };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({ "state": "loading", "selectedText": "hello" })
        );
    }

    #[test]
    fn only_result_and_error_are_terminal() {
        assert!(!PresentationState::Idle.is_terminal());
        assert!(!PresentationState::Loading.is_terminal());
        assert!(PresentationState::Error { message: "x".into() }.is_terminal());
        assert!(PresentationState::Result(AnalysisResult::new("Positive", 0.9, None)).is_terminal());
    }

    #[test]
    fn dispatch_strategy_round_trips_through_config_names() {
        let strategy: DispatchStrategy = serde_json::from_value(json!("openPanel")).unwrap();
        assert_eq!(strategy, DispatchStrategy::OpenPanel);
        assert_eq!(DispatchStrategy::default(), DispatchStrategy::Notify);
    }
}
