use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::error::AnalysisError;
use crate::models::{AnalysisRequest, AnalysisResult};
use super::config_service::Config;

/// Client for the remote sentiment prediction endpoint.
pub struct SentimentClient {
    client: Client,
    endpoint: String,
}

impl SentimentClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalysisError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AnalysisError> {
        Self::new(&config.endpoint, Duration::from_secs(config.request_timeout_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one prediction request for `text`. Never retries.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptySelection);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&AnalysisRequest { text })
            .send()
            .await
            .map_err(|e| {
                log::error!("Sentiment request to {} failed: {}", self.endpoint, e);
                AnalysisError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Sentiment API error ({}): {}", status, body);
            return Err(AnalysisError::HttpStatus(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(|e| {
            log::warn!("Sentiment API returned an unreadable body: {}", e);
            AnalysisError::MalformedResponse(e.to_string())
        })?;

        AnalysisResult::from_json(&body)
    }

    /// Root of the service the endpoint lives on.
    pub fn health_url(&self) -> Result<String, AnalysisError> {
        let mut url = url::Url::parse(&self.endpoint)
            .map_err(|e| AnalysisError::Transport(format!("Invalid endpoint URL: {}", e)))?;
        url.set_path("/");
        url.set_query(None);
        Ok(url.to_string())
    }

    /// Asks the service root whether it is up and returns its status line.
    pub async fn check_health(&self) -> Result<String, AnalysisError> {
        let url = self.health_url()?;
        let response = self.client.get(&url).send().await.map_err(|e| {
            log::error!("Health check against {} failed: {}", url, e);
            AnalysisError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Health check returned {}", status);
            return Err(AnalysisError::HttpStatus(status.as_u16()));
        }

        let text = response.text().await?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> SentimentClient {
        SentimentClient::new(&format!("{}/predict", server.url()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn posts_text_once_and_parses_result() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/predict")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "text": "I love this product!" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"sentiment":"Positive","score":0.95}"#)
            .expect(1)
            .create_async()
            .await;

        let result = client_for(&server).analyze("I love this product!").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.score, 0.95);
        assert!(result.confidence_flag.is_none());
    }

    #[tokio::test]
    async fn empty_text_sends_nothing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/predict").expect(0).create_async().await;

        let client = client_for(&server);
        assert_eq!(client.analyze("").await, Err(AnalysisError::EmptySelection));
        assert_eq!(client.analyze("   \n").await, Err(AnalysisError::EmptySelection));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/predict")
            .with_status(503)
            .with_body("model loading")
            .expect(1)
            .create_async()
            .await;

        let err = client_for(&server).analyze("Terrible service.").await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err, AnalysisError::HttpStatus(503));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/predict")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let err = client_for(&server).analyze("hello").await.unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let client =
            SentimentClient::new("http://127.0.0.1:1/predict", Duration::from_secs(5)).unwrap();
        let err = client.analyze("hello").await.unwrap_err();
        assert!(matches!(err, AnalysisError::Transport(_)));
    }

    #[tokio::test]
    async fn health_check_hits_service_root() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("Sentiment Analyzer Pro API is online.\n")
            .create_async()
            .await;

        let status = client_for(&server).check_health().await.unwrap();

        mock.assert_async().await;
        assert_eq!(status, "Sentiment Analyzer Pro API is online.");
    }

    #[test]
    fn health_url_drops_path_and_query() {
        let client = SentimentClient::new(
            "https://example.hf.space/predict?v=2",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.health_url().unwrap(), "https://example.hf.space/");
    }
}
