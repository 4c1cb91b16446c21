//! HTTP client for the external ML inference service.

mod types;

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::config::{endpoints, BackendConfig};
use crate::error::{EngineError, EngineResult};
use crate::types::BackendPrediction;

pub use types::{FrameAnalyzeRequest, ImageAnalyzeRequest, TextAnalyzeRequest};

/// Client for the ML backend. Timeouts are applied per request so the
/// real-time frame path can give up faster than the image path.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::builder()
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Sends text to the backend for model inference.
    pub async fn analyze_text(&self, text: &str) -> EngineResult<BackendPrediction> {
        self.post_prediction(
            endpoints::ANALYZE_TEXT,
            &TextAnalyzeRequest { text },
            Duration::from_millis(self.config.text_timeout_ms),
        )
        .await
    }

    /// Sends a base64 image to the backend for face emotion inference.
    pub async fn analyze_image(&self, image: &str) -> EngineResult<BackendPrediction> {
        self.post_prediction(
            endpoints::ANALYZE_IMAGE,
            &ImageAnalyzeRequest { image },
            Duration::from_millis(self.config.image_timeout_ms),
        )
        .await
    }

    /// Sends a webcam frame. Short timeout: a stale frame result is worse
    /// than a synthetic one.
    pub async fn analyze_frame(&self, frame: &str) -> EngineResult<BackendPrediction> {
        self.post_prediction(
            endpoints::ANALYZE_FRAME,
            &FrameAnalyzeRequest { frame },
            Duration::from_millis(self.config.frame_timeout_ms),
        )
        .await
    }

    async fn post_prediction<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> EngineResult<BackendPrediction> {
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| EngineError::backend(format!("backend request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::backend(format!(
                "backend returned {}: {}",
                status, body
            )));
        }

        response
            .json::<BackendPrediction>()
            .await
            .map_err(|e| EngineError::backend(format!("failed to parse backend response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_configured_base_url() {
        let client = BackendClient::new(BackendConfig {
            base_url: "http://127.0.0.1:8001".to_string(),
            ..BackendConfig::default()
        });
        assert_eq!(client.base_url(), "http://127.0.0.1:8001");
    }
}
