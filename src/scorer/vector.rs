//! Canonicalization of raw backend prediction vectors.

use crate::types::{
    BackendPrediction, EmotionDistribution, EmotionLabel, EmotionResult, EmotionSource, FaceBox,
};

use super::now_millis;

pub(super) fn transform_predictions(
    prediction: &BackendPrediction,
    source: EmotionSource,
) -> EmotionResult {
    let face_data = prediction
        .face_bbox
        .map(|[x, y, w, h]| FaceBox {
            x,
            y,
            width: w,
            height: h,
        });

    let predictions: Vec<f64> = prediction
        .predictions
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|v| if v.is_finite() { *v } else { 0.0 })
        .collect();

    if predictions.len() == EmotionLabel::ALL.len() {
        let raw_total: f64 = predictions.iter().sum();
        let total = if raw_total == 0.0 { 1.0 } else { raw_total };

        let mut distribution = EmotionDistribution::default();
        for label in EmotionLabel::ALL {
            let share = predictions[label.index()] / total * 100.0;
            distribution.set(label, share.max(0.0).round() as u32);
        }

        // First occurrence wins on ties.
        let mut max_index = 0;
        for (i, v) in predictions.iter().enumerate() {
            if *v > predictions[max_index] {
                max_index = i;
            }
        }

        // Derived from the raw ratio, not the rounded distribution, to keep
        // sub-percent precision.
        let confidence = round_to_tenth(predictions[max_index] / total * 100.0);

        return EmotionResult {
            primary_emotion: EmotionLabel::ALL[max_index],
            confidence,
            distribution,
            timestamp: now_millis(),
            source,
            face_data,
        };
    }

    // Degraded path for malformed payloads: zeroed distribution, the
    // backend's own label when it is in the closed set, Neutral otherwise.
    let primary = prediction
        .emotion
        .as_deref()
        .and_then(EmotionLabel::parse)
        .unwrap_or(EmotionLabel::Neutral);
    let confidence = (prediction.confidence.unwrap_or(0.0) * 100.0).clamp(0.0, 100.0);

    EmotionResult {
        primary_emotion: primary,
        confidence,
        distribution: EmotionDistribution::default(),
        timestamp: now_millis(),
        source,
        face_data,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
