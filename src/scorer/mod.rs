//! Local emotion scoring.
//!
//! Three producers share one output shape: a keyword scorer for text, a
//! transform that coerces raw backend prediction vectors into the canonical
//! result, and a synthetic generator that keeps the UI demonstrable with no
//! backend at all. All three are pure and stateless; the only impurity is
//! the confidence jitter, which sits behind [`JitterSource`] so tests can
//! pin it to zero.

mod demo;
mod keywords;
mod text;
mod vector;

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::types::{BackendPrediction, EmotionResult, EmotionSource};

pub use keywords::keyword_table;

/// Uniform random samples for confidence jitter and demo distributions.
pub trait JitterSource: Send + Sync {
    /// A sample in `[0, span)`.
    fn sample(&self, span: f64) -> f64;
}

/// Production source backed by the thread-local RNG.
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn sample(&self, span: f64) -> f64 {
        if span <= 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(0.0..span)
    }
}

/// Always returns zero. Deterministic scorer for tests.
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn sample(&self, _span: f64) -> f64 {
        0.0
    }
}

/// The local scorer. Safe to share and call concurrently; holds no state
/// beyond its jitter source.
#[derive(Clone)]
pub struct EmotionScorer {
    jitter: Arc<dyn JitterSource>,
}

impl EmotionScorer {
    pub fn new() -> Self {
        Self::with_jitter(Arc::new(RandomJitter))
    }

    pub fn with_jitter(jitter: Arc<dyn JitterSource>) -> Self {
        Self { jitter }
    }

    /// Keyword-based text analysis. Never fails: empty or unmatched text
    /// settles on Neutral via its base score.
    pub fn score_text(&self, text: &str) -> EmotionResult {
        text::score_text(text, self.jitter.as_ref())
    }

    /// Coerces a backend payload into the canonical result shape. A
    /// malformed prediction vector degrades to a zeroed distribution and
    /// the backend's own label/confidence when usable.
    pub fn transform_predictions(
        &self,
        prediction: &BackendPrediction,
        source: EmotionSource,
    ) -> EmotionResult {
        vector::transform_predictions(prediction, source)
    }

    /// Synthetic result for demo mode. Webcam results get a placeholder
    /// face box so the overlay stays exercisable.
    pub fn generate_demo(&self, source: EmotionSource) -> EmotionResult {
        demo::generate_demo(source, self.jitter.as_ref())
    }
}

impl Default for EmotionScorer {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
