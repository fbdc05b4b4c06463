//! Maps analysis outcomes onto what the notification and the panel display.

use crate::error::GENERIC_ERROR_MESSAGE;
use crate::models::{
    AnalysisResult, NotificationContent, PanelUpdate, PanelView, PresentationState, Sentiment,
};
use super::config_service::IconSet;

const DEFAULT_CERTAINTY: &str = "Normal";

/// `score * 100` rounded to one decimal, e.g. `0.873` -> `"87.3"`.
pub fn score_percent(score: f64) -> String {
    let percent = (score * 1000.0).round() / 10.0 + 0.0;
    format!("{:.1}", percent)
}

pub fn icon_for(sentiment: Sentiment, icons: &IconSet) -> &str {
    match sentiment {
        Sentiment::Positive => &icons.positive,
        Sentiment::Negative => &icons.negative,
        Sentiment::Neutral => &icons.neutral,
    }
}

pub fn certainty_text(confidence_flag: Option<&str>) -> String {
    let flag = confidence_flag
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_CERTAINTY);
    format!("{} certainty", flag)
}

pub fn notification_for_result(result: &AnalysisResult, icons: &IconSet) -> NotificationContent {
    NotificationContent {
        title: format!("Sentiment: {}", result.label),
        message: format!("Confidence Score: {}%", score_percent(result.score)),
        icon: icon_for(result.sentiment, icons).to_string(),
    }
}

pub fn notification_for_error(icons: &IconSet) -> NotificationContent {
    NotificationContent {
        title: "Error".to_string(),
        message: GENERIC_ERROR_MESSAGE.to_string(),
        icon: icons.neutral.clone(),
    }
}

pub fn panel_view(
    result: &AnalysisResult,
    selected_text: &str,
    icons: &IconSet,
    bar_delay_ms: u64,
) -> PanelView {
    let percent = format!("{}%", score_percent(result.score));
    let class = result.sentiment.css_class().to_string();

    PanelView {
        label: result.label.clone(),
        badge_class: class.clone(),
        dot_class: class,
        icon: icon_for(result.sentiment, icons).to_string(),
        score_text: percent.clone(),
        bar_width: percent,
        bar_delay_ms,
        certainty: certainty_text(result.confidence_flag.as_deref()),
        selected_text: selected_text.to_string(),
    }
}

/// Translates a pipeline state into the panel's DOM update.
pub fn panel_update(
    state: &PresentationState,
    selected_text: &str,
    icons: &IconSet,
    bar_delay_ms: u64,
) -> PanelUpdate {
    match state {
        PresentationState::Idle => PanelUpdate::Idle,
        PresentationState::Loading => PanelUpdate::Loading {
            selected_text: selected_text.to_string(),
        },
        PresentationState::Result(result) => {
            PanelUpdate::Result(panel_view(result, selected_text, icons, bar_delay_ms))
        }
        PresentationState::Error { message } => PanelUpdate::Error {
            message: message.clone(),
        },
    }
}
