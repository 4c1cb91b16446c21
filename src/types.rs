use serde::{Deserialize, Serialize};

/// The closed emotion label set. Serialized names match the backend model's
/// label strings exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmotionLabel {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
}

impl EmotionLabel {
    /// Backend model output order. Raw prediction vectors are positional
    /// against this sequence, and argmax ties resolve to the first match
    /// when scanning in this order.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Angry,
        EmotionLabel::Disgust,
        EmotionLabel::Fear,
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    /// Position of this label in [`EmotionLabel::ALL`].
    pub fn index(self) -> usize {
        match self {
            EmotionLabel::Angry => 0,
            EmotionLabel::Disgust => 1,
            EmotionLabel::Fear => 2,
            EmotionLabel::Happy => 3,
            EmotionLabel::Sad => 4,
            EmotionLabel::Surprise => 5,
            EmotionLabel::Neutral => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Angry => "Angry",
            EmotionLabel::Disgust => "Disgust",
            EmotionLabel::Fear => "Fear",
            EmotionLabel::Happy => "Happy",
            EmotionLabel::Sad => "Sad",
            EmotionLabel::Surprise => "Surprise",
            EmotionLabel::Neutral => "Neutral",
        }
    }

    /// Parses an exact label string. Anything outside the closed set is
    /// rejected so unknown backend labels degrade to Neutral upstream.
    pub fn parse(s: &str) -> Option<Self> {
        EmotionLabel::ALL.iter().copied().find(|l| l.as_str() == s)
    }
}

/// Integer percentage weight per label. All seven keys are always present,
/// and the values sum to roughly 100 (rounding may drift by one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmotionDistribution {
    #[serde(rename = "Angry")]
    pub angry: u32,
    #[serde(rename = "Disgust")]
    pub disgust: u32,
    #[serde(rename = "Fear")]
    pub fear: u32,
    #[serde(rename = "Happy")]
    pub happy: u32,
    #[serde(rename = "Sad")]
    pub sad: u32,
    #[serde(rename = "Surprise")]
    pub surprise: u32,
    #[serde(rename = "Neutral")]
    pub neutral: u32,
}

impl EmotionDistribution {
    pub fn get(&self, label: EmotionLabel) -> u32 {
        match label {
            EmotionLabel::Angry => self.angry,
            EmotionLabel::Disgust => self.disgust,
            EmotionLabel::Fear => self.fear,
            EmotionLabel::Happy => self.happy,
            EmotionLabel::Sad => self.sad,
            EmotionLabel::Surprise => self.surprise,
            EmotionLabel::Neutral => self.neutral,
        }
    }

    pub fn set(&mut self, label: EmotionLabel, value: u32) {
        match label {
            EmotionLabel::Angry => self.angry = value,
            EmotionLabel::Disgust => self.disgust = value,
            EmotionLabel::Fear => self.fear = value,
            EmotionLabel::Happy => self.happy = value,
            EmotionLabel::Sad => self.sad = value,
            EmotionLabel::Surprise => self.surprise = value,
            EmotionLabel::Neutral => self.neutral = value,
        }
    }

    /// Values in backend label order.
    pub fn values(&self) -> [u32; 7] {
        [
            self.angry,
            self.disgust,
            self.fear,
            self.happy,
            self.sad,
            self.surprise,
            self.neutral,
        ]
    }

    pub fn sum(&self) -> u32 {
        self.values().iter().sum()
    }

    pub fn max_value(&self) -> u32 {
        self.values().into_iter().max().unwrap_or(0)
    }

    /// Label with the highest weight; ties go to the first label in
    /// backend order.
    pub fn primary(&self) -> EmotionLabel {
        let mut best = EmotionLabel::Neutral;
        let mut best_value = None;
        for label in EmotionLabel::ALL {
            let value = self.get(label);
            if best_value.map_or(true, |v| value > v) {
                best = label;
                best_value = Some(value);
            }
        }
        best
    }
}

/// Provenance of an analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionSource {
    Text,
    Image,
    Webcam,
}

impl EmotionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionSource::Text => "text",
            EmotionSource::Image => "image",
            EmotionSource::Webcam => "webcam",
        }
    }
}

/// Face bounding box, present for image/webcam results when a face region
/// is known or synthetically assigned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One analysis result. Created fresh per call, immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionResult {
    pub primary_emotion: EmotionLabel,
    pub confidence: f64,
    pub distribution: EmotionDistribution,
    /// Capture time, milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub source: EmotionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_data: Option<FaceBox>,
}

/// Raw payload from the ML backend. Every field is optional because the
/// degraded path must cope with partial or malformed bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendPrediction {
    #[serde(default)]
    pub emotion: Option<String>,
    /// Certainty in [0, 1] as the backend reports it.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Raw scores positionally aligned to [`EmotionLabel::ALL`].
    #[serde(default)]
    pub predictions: Option<Vec<f64>>,
    #[serde(default)]
    pub face_detected: Option<bool>,
    /// `[x, y, w, h]`
    #[serde(default)]
    pub face_bbox: Option<[f64; 4]>,
}
