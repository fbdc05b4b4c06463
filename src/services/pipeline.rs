use uuid::Uuid;

use crate::models::PresentationState;
use super::sentiment_client::SentimentClient;

/// Somewhere an analysis cycle can be shown.
pub trait PresentationSurface {
    /// Passive surfaces only show the terminal state.
    fn is_interactive(&self) -> bool;

    fn render(&self, state: &PresentationState, selected_text: &str);
}

/// Drives one request through `Idle -> Loading -> Result | Error`.
pub struct AnalysisPipeline {
    client: SentimentClient,
}

impl AnalysisPipeline {
    pub fn new(client: SentimentClient) -> Self {
        Self { client }
    }

    /// Runs one full cycle and returns the state it ended in.
    ///
    /// Blank text leaves the surface untouched and returns `Idle`. Otherwise
    /// exactly one terminal state is rendered, whatever the request does.
    pub async fn run<S>(&self, text: &str, surface: &S) -> PresentationState
    where
        S: PresentationSurface + ?Sized,
    {
        if text.trim().is_empty() {
            log::debug!("Ignoring analysis request with empty selection");
            return PresentationState::Idle;
        }

        let cycle = Uuid::new_v4();
        log::info!("[{}] Analyzing {} chars via {}", cycle, text.chars().count(), self.client.endpoint());

        if surface.is_interactive() {
            surface.render(&PresentationState::Loading, text);
        }

        let state = match self.client.analyze(text).await {
            Ok(result) => {
                log::info!("[{}] Result: {} ({:.4})", cycle, result.label, result.score);
                PresentationState::Result(result)
            }
            Err(err) => {
                log::error!("[{}] Analysis failed: {}", cycle, err);
                PresentationState::Error {
                    message: err.user_message().to_string(),
                }
            }
        };

        debug_assert!(state.is_terminal());
        surface.render(&state, text);
        state
    }
}
