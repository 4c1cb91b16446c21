//! Analysis front door: backend first, local fallback second.
//!
//! Every public operation returns a structurally valid [`EmotionResult`].
//! A dead or slow backend is not an error to the caller; it just changes
//! which producer fills the result.

use async_trait::async_trait;

use crate::backend_client::BackendClient;
use crate::config::BackendConfig;
use crate::error::EngineResult;
use crate::scorer::EmotionScorer;
use crate::types::{EmotionResult, EmotionSource};

/// Seam for the analysis operations so servers and tests can swap the
/// engine implementation.
#[async_trait]
pub trait EmotionAnalysis: Send + Sync {
    async fn analyze_text(&self, text: &str) -> EngineResult<EmotionResult>;
    async fn analyze_image(&self, image: &str) -> EngineResult<EmotionResult>;
    async fn analyze_frame(&self, frame: &str) -> EngineResult<EmotionResult>;
}

/// Production analysis service. Tries the ML backend under its per-endpoint
/// timeout; on any failure falls back to the keyword scorer (text) or the
/// demo generator (image/webcam).
pub struct AnalysisService {
    backend: BackendClient,
    scorer: EmotionScorer,
}

impl AnalysisService {
    pub fn new(config: BackendConfig) -> Self {
        Self::with_scorer(config, EmotionScorer::new())
    }

    pub fn with_scorer(config: BackendConfig, scorer: EmotionScorer) -> Self {
        Self {
            backend: BackendClient::new(config),
            scorer,
        }
    }

    pub fn scorer(&self) -> &EmotionScorer {
        &self.scorer
    }
}

#[async_trait]
impl EmotionAnalysis for AnalysisService {
    async fn analyze_text(&self, text: &str) -> EngineResult<EmotionResult> {
        match self.backend.analyze_text(text).await {
            Ok(prediction) => Ok(self
                .scorer
                .transform_predictions(&prediction, EmotionSource::Text)),
            Err(e) => {
                tracing::info!("ML backend unavailable, using local text analysis: {}", e);
                Ok(self.scorer.score_text(text))
            }
        }
    }

    async fn analyze_image(&self, image: &str) -> EngineResult<EmotionResult> {
        match self.backend.analyze_image(image).await {
            Ok(prediction) => Ok(self
                .scorer
                .transform_predictions(&prediction, EmotionSource::Image)),
            Err(e) => {
                tracing::info!("ML backend unavailable, using demo mode for image: {}", e);
                Ok(self.scorer.generate_demo(EmotionSource::Image))
            }
        }
    }

    async fn analyze_frame(&self, frame: &str) -> EngineResult<EmotionResult> {
        match self.backend.analyze_frame(frame).await {
            Ok(prediction) => Ok(self
                .scorer
                .transform_predictions(&prediction, EmotionSource::Webcam)),
            Err(e) => {
                // Expected under real-time load; keep it quiet.
                tracing::debug!("frame analysis fell back to demo mode: {}", e);
                Ok(self.scorer.generate_demo(EmotionSource::Webcam))
            }
        }
    }
}
