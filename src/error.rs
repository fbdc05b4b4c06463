use thiserror::Error;

/// The one message shown to the user for every failed analysis.
pub const GENERIC_ERROR_MESSAGE: &str =
    "Failed to analyze sentiment. Please check your connection and try again.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("no text selected")]
    EmptySelection,

    #[error("server returned status {0}")]
    HttpStatus(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    /// Diagnostics stay in the log; the user only ever sees the generic message.
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AnalysisError::HttpStatus(status.as_u16()),
            None => AnalysisError::Transport(err.to_string()),
        }
    }
}
