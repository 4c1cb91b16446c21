use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use emotion_engine::analysis::{AnalysisService, EmotionAnalysis};
use emotion_engine::config::{endpoints, BackendConfig, CONFIDENCE_THRESHOLD, FRAME_INTERVAL_MS};
use emotion_engine::health_check::HealthChecker;
use emotion_engine::types::EmotionResult;

/// Runtime configuration, loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RuntimeConfig {
    server: ServerConfig,
    backend: BackendFileConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ServerConfig {
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8000 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BackendFileConfig {
    url: Option<String>,
}

#[derive(Clone)]
struct AppState {
    service: Arc<AnalysisService>,
    backend: BackendConfig,
}

#[derive(Debug, Deserialize)]
struct TextBody {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageBody {
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FrameBody {
    frame: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    frontend: String,
    #[serde(rename = "mlBackend")]
    ml_backend: String,
    #[serde(rename = "backendUrl")]
    backend_url: String,
    timestamp: u64,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("emotion_engine.toml"));

    let runtime_config = load_runtime_config(&config_path)?;

    let mut backend = BackendConfig::from_env();
    if let Some(url) = runtime_config.backend.url.clone() {
        backend.base_url = url;
    }

    tracing::info!("ML backend URL: {}", backend.base_url);

    let state = AppState {
        service: Arc::new(AnalysisService::new(backend.clone())),
        backend,
    };

    let app = Router::new()
        .route("/api/analyze/text", post(analyze_text))
        .route("/api/analyze/image", post(analyze_image))
        .route("/api/analyze/frame", post(analyze_frame))
        .route("/api/health", get(health))
        .route("/api/status", get(status))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", runtime_config.server.port);
    tracing::info!("starting emotion engine server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_runtime_config(path: &PathBuf) -> anyhow::Result<RuntimeConfig> {
    if !path.exists() {
        tracing::info!("config file {} not found, using defaults", path.display());
        return Ok(RuntimeConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config file: {}", e))?;
    toml::from_str(&content).map_err(|e| anyhow::anyhow!("failed to parse config file: {}", e))
}

async fn analyze_text(
    State(state): State<AppState>,
    Json(body): Json<TextBody>,
) -> Result<Json<EmotionResult>, ApiError> {
    let text = match body.text.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => return Err(bad_request("Invalid text input")),
    };

    let result = state
        .service
        .analyze_text(text)
        .await
        .map_err(|e| bad_request(e.message()))?;
    Ok(Json(result))
}

async fn analyze_image(
    State(state): State<AppState>,
    Json(body): Json<ImageBody>,
) -> Result<Json<EmotionResult>, ApiError> {
    let image = match body.image.as_deref() {
        Some(i) if !i.is_empty() => i,
        _ => return Err(bad_request("Invalid image input")),
    };
    log_payload_size("image", image);

    let result = state
        .service
        .analyze_image(image)
        .await
        .map_err(|e| bad_request(e.message()))?;
    Ok(Json(result))
}

async fn analyze_frame(
    State(state): State<AppState>,
    Json(body): Json<FrameBody>,
) -> Result<Json<EmotionResult>, ApiError> {
    let frame = match body.frame.as_deref() {
        Some(f) if !f.is_empty() => f,
        _ => return Err(bad_request("Invalid frame input")),
    };
    log_payload_size("frame", frame);

    let result = state
        .service
        .analyze_frame(frame)
        .await
        .map_err(|e| bad_request(e.message()))?;
    Ok(Json(result))
}

/// Payloads arrive as base64, optionally wrapped in a data URL.
fn log_payload_size(kind: &str, payload: &str) {
    let encoded = payload
        .split_once(";base64,")
        .map(|(_, data)| data)
        .unwrap_or(payload);
    match BASE64.decode(encoded) {
        Ok(bytes) => tracing::debug!("{} payload: {} bytes", kind, bytes.len()),
        Err(_) => tracing::debug!("{} payload: {} chars (not plain base64)", kind, payload.len()),
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let checker =
        HealthChecker::with_timeout(Duration::from_millis(state.backend.health_timeout_ms));
    let backend_health = checker.check_backend(&state.backend.base_url).await;

    Json(HealthResponse {
        status: "ok".to_string(),
        frontend: "connected".to_string(),
        ml_backend: backend_health.status_str().to_string(),
        backend_url: state.backend.base_url.clone(),
        timestamp: now_millis(),
    })
}

async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "backend_url": state.backend.base_url,
        "timestamp": now_millis(),
        "checks": {
            "backend_configured": true,
            "endpoints": {
                "health": endpoints::HEALTH,
                "analyze_text": endpoints::ANALYZE_TEXT,
                "analyze_image": endpoints::ANALYZE_IMAGE,
                "analyze_frame": endpoints::ANALYZE_FRAME,
            },
            "frame_interval_ms": FRAME_INTERVAL_MS,
            "confidence_threshold": CONFIDENCE_THRESHOLD,
        },
    }))
}

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
