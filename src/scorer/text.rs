//! Keyword-based text scoring, the fallback path when no ML backend is
//! reachable. Cheap and explainable rather than accurate.

use crate::types::{EmotionDistribution, EmotionLabel, EmotionResult, EmotionSource};

use super::keywords::keyword_table;
use super::{now_millis, JitterSource};

/// Neutral starts with a non-zero score so the denominator can never be
/// zero and short or ambiguous text settles on Neutral.
const NEUTRAL_BASE: u32 = 10;

/// Added per keyword hit; distinct hits for the same label accumulate.
const KEYWORD_HIT: u32 = 15;

/// Text confidence never reports above this.
const CONFIDENCE_CAP: f64 = 95.0;

pub(super) fn score_text(text: &str, jitter: &dyn JitterSource) -> EmotionResult {
    let lower = text.to_lowercase();

    let mut scores = [0u32; 7];
    scores[EmotionLabel::Neutral.index()] = NEUTRAL_BASE;

    for (label, words) in keyword_table() {
        for word in *words {
            if lower.contains(word) {
                scores[label.index()] += KEYWORD_HIT;
            }
        }
    }

    // Repeated exclamation reads as excitement, with an angry edge.
    let exclamations = text.chars().filter(|&c| c == '!').count();
    if exclamations > 2 {
        scores[EmotionLabel::Happy.index()] += 5;
        scores[EmotionLabel::Surprise.index()] += 5;
        scores[EmotionLabel::Angry.index()] += 3;
    }

    // Mostly-caps text over a minimum length reads as shouting.
    let total_chars = text.chars().count();
    if total_chars > 10 {
        let caps = text.chars().filter(char::is_ascii_uppercase).count();
        if caps as f64 / total_chars as f64 > 0.5 {
            scores[EmotionLabel::Angry.index()] += 10;
            scores[EmotionLabel::Surprise.index()] += 5;
        }
    }

    let total: u32 = scores.iter().sum();
    let mut distribution = EmotionDistribution::default();
    if total == 0 {
        // Unreachable given the Neutral base, guarded anyway.
        distribution.neutral = 100;
    } else {
        for label in EmotionLabel::ALL {
            let share = scores[label.index()] as f64 / total as f64 * 100.0;
            distribution.set(label, share.round() as u32);
        }
    }

    let primary = distribution.primary();
    let confidence = (distribution.max_value() as f64 + jitter.sample(15.0)).min(CONFIDENCE_CAP);

    EmotionResult {
        primary_emotion: primary,
        confidence,
        distribution,
        timestamp: now_millis(),
        source: EmotionSource::Text,
        face_data: None,
    }
}
