//! Analysis service fallback paths with an unreachable backend.

use std::sync::Arc;

use emotion_engine::analysis::{AnalysisService, EmotionAnalysis};
use emotion_engine::config::BackendConfig;
use emotion_engine::scorer::{EmotionScorer, NoJitter};
use emotion_engine::types::{EmotionLabel, EmotionSource};

fn dead_backend_config() -> BackendConfig {
    BackendConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        text_timeout_ms: 500,
        image_timeout_ms: 500,
        frame_timeout_ms: 500,
        health_timeout_ms: 500,
    }
}

fn deterministic_service() -> AnalysisService {
    AnalysisService::with_scorer(
        dead_backend_config(),
        EmotionScorer::with_jitter(Arc::new(NoJitter)),
    )
}

#[tokio::test]
async fn text_falls_back_to_the_keyword_scorer() {
    let service = deterministic_service();
    let result = service
        .analyze_text("I am so happy and excited")
        .await
        .unwrap();

    assert_eq!(result.source, EmotionSource::Text);
    assert_eq!(result.primary_emotion, EmotionLabel::Happy);
    assert!((99..=101).contains(&result.distribution.sum()));
}

#[tokio::test]
async fn image_falls_back_to_demo_mode() {
    let service = AnalysisService::new(dead_backend_config());
    let result = service.analyze_image("aGVsbG8=").await.unwrap();

    assert_eq!(result.source, EmotionSource::Image);
    assert!(result.face_data.is_none());
    assert!(result.confidence <= 98.0);
}

#[tokio::test]
async fn frame_falls_back_to_demo_mode_with_a_face_box() {
    let service = AnalysisService::new(dead_backend_config());
    let result = service.analyze_frame("aGVsbG8=").await.unwrap();

    assert_eq!(result.source, EmotionSource::Webcam);
    let face = result.face_data.expect("webcam fallback carries a face box");
    assert!(face.width > 0.0 && face.height > 0.0);
}

#[tokio::test]
async fn analysis_never_surfaces_a_backend_failure() {
    let service = deterministic_service();
    for _ in 0..3 {
        assert!(service.analyze_text("anything at all").await.is_ok());
        assert!(service.analyze_frame("AAAA").await.is_ok());
    }
}
