use serde::Deserialize;

/// Webcam frame cadence clients should use between `/api/analyze/frame`
/// calls, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 500;

/// Face detection confidence threshold, matching the backend model.
pub const CONFIDENCE_THRESHOLD: f64 = 0.25;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// ML backend connection settings. Timeouts are per endpoint: frame
/// analysis is real-time and gives up quickly, image analysis waits the
/// longest.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub text_timeout_ms: u64,
    pub image_timeout_ms: u64,
    pub frame_timeout_ms: u64,
    pub health_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            text_timeout_ms: 5_000,
            image_timeout_ms: 10_000,
            frame_timeout_ms: 2_000,
            health_timeout_ms: 3_000,
        }
    }
}

impl BackendConfig {
    /// Default settings with the base URL taken from `EMOTION_BACKEND_URL`
    /// when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("EMOTION_BACKEND_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        config
    }
}

/// Backend endpoint paths.
pub mod endpoints {
    pub const ANALYZE_TEXT: &str = "/api/analyze/text";
    pub const ANALYZE_IMAGE: &str = "/api/analyze/image";
    pub const ANALYZE_FRAME: &str = "/api/analyze/frame";
    pub const HEALTH: &str = "/api/health";
}
