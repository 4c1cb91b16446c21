pub mod analysis;
pub mod backend_client;
pub mod config;
pub mod error;
pub mod health_check;
pub mod scorer;
pub mod types;

pub use analysis::{AnalysisService, EmotionAnalysis};
pub use backend_client::BackendClient;
pub use config::BackendConfig;
pub use error::{EngineError, EngineResult, ErrorKind};
pub use health_check::{BackendHealth, HealthChecker};
pub use scorer::{EmotionScorer, JitterSource, NoJitter, RandomJitter};
pub use types::{
    BackendPrediction, EmotionDistribution, EmotionLabel, EmotionResult, EmotionSource, FaceBox,
};
