use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AnalysisError;

/// Label shown when the service answers without a `sentiment` field.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Anything that is not "positive" or "negative" (any casing) is neutral,
    /// including empty strings and labels such as "Neutral / Mixed".
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("positive") {
            Sentiment::Positive
        } else if label.eq_ignore_ascii_case("negative") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// CSS class used for the badge and the status dot.
    pub fn css_class(self) -> &'static str {
        match self {
            Sentiment::Positive => "pos",
            Sentiment::Negative => "neg",
            Sentiment::Neutral => "neu",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The label exactly as the service returned it.
    pub label: String,
    pub sentiment: Sentiment,
    /// Always within `[0, 1]`.
    pub score: f64,
    pub confidence_flag: Option<String>,
}

impl AnalysisResult {
    pub fn new(label: &str, score: f64, confidence_flag: Option<&str>) -> Self {
        // `+ 0.0` folds a negative zero into positive zero.
        let score = if score.is_finite() { score.clamp(0.0, 1.0) + 0.0 } else { 0.0 };
        Self {
            label: label.to_string(),
            sentiment: Sentiment::from_label(label),
            score,
            confidence_flag: confidence_flag.map(str::to_string),
        }
    }

    /// Builds a result from the service's JSON body.
    ///
    /// Only a body that is not a JSON object is rejected. Missing or mistyped
    /// fields fall back to the neutral category with a zero score.
    pub fn from_json(body: &Value) -> Result<Self, AnalysisError> {
        let obj = body.as_object().ok_or_else(|| {
            AnalysisError::MalformedResponse(format!("expected a JSON object, got {}", body))
        })?;

        let label = match obj.get("sentiment").and_then(Value::as_str) {
            Some(label) => label,
            None => {
                log::warn!("Response has no sentiment label, treating as neutral");
                UNKNOWN_LABEL
            }
        };
        let score = match obj.get("score").and_then(Value::as_f64) {
            Some(score) => score,
            None => {
                log::warn!("Response has no numeric score, using 0");
                0.0
            }
        };
        let flag = obj.get("confidence_flag").and_then(Value::as_str);

        Ok(Self::new(label, score, flag))
    }
}
