//! Synthetic results for demo mode.

use crate::types::{EmotionDistribution, EmotionLabel, EmotionResult, EmotionSource, FaceBox};

use super::{now_millis, JitterSource};

/// Demo confidence may run a little hotter than text confidence.
const CONFIDENCE_CAP: f64 = 98.0;

/// Placeholder face region reported for webcam demo results.
const PLACEHOLDER_FACE: FaceBox = FaceBox {
    x: 150.0,
    y: 80.0,
    width: 200.0,
    height: 250.0,
};

pub(super) fn generate_demo(source: EmotionSource, jitter: &dyn JitterSource) -> EmotionResult {
    let raw: Vec<f64> = (0..EmotionLabel::ALL.len())
        .map(|_| jitter.sample(100.0))
        .collect();
    let raw_total: f64 = raw.iter().sum();
    let total = if raw_total == 0.0 { 1.0 } else { raw_total };

    let mut distribution = EmotionDistribution::default();
    for label in EmotionLabel::ALL {
        let share = raw[label.index()] / total * 100.0;
        distribution.set(label, share.round() as u32);
    }

    let primary = distribution.primary();
    let confidence = (distribution.max_value() as f64 + jitter.sample(20.0)).min(CONFIDENCE_CAP);

    let face_data = match source {
        EmotionSource::Webcam => Some(PLACEHOLDER_FACE),
        _ => None,
    };

    EmotionResult {
        primary_emotion: primary,
        confidence,
        distribution,
        timestamp: now_millis(),
        source,
        face_data,
    }
}
