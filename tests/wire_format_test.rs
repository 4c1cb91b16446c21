//! JSON wire shape. Downstream consumers key on these exact field names.

use emotion_engine::types::{
    BackendPrediction, EmotionDistribution, EmotionLabel, EmotionResult, EmotionSource, FaceBox,
};

fn sample_result(face: Option<FaceBox>) -> EmotionResult {
    EmotionResult {
        primary_emotion: EmotionLabel::Happy,
        confidence: 76.9,
        distribution: EmotionDistribution {
            happy: 77,
            angry: 15,
            neutral: 8,
            ..EmotionDistribution::default()
        },
        timestamp: 1_700_000_000_000,
        source: EmotionSource::Webcam,
        face_data: face,
    }
}

#[test]
fn result_serializes_with_the_expected_field_names() {
    let json = serde_json::to_value(sample_result(Some(FaceBox {
        x: 150.0,
        y: 80.0,
        width: 200.0,
        height: 250.0,
    })))
    .unwrap();

    assert_eq!(json["primaryEmotion"], "Happy");
    assert_eq!(json["confidence"], 76.9);
    assert_eq!(json["source"], "webcam");
    assert_eq!(json["timestamp"], 1_700_000_000_000u64);
    assert_eq!(json["faceData"]["x"], 150.0);
    assert_eq!(json["faceData"]["width"], 200.0);

    let distribution = json["distribution"].as_object().unwrap();
    assert_eq!(distribution.len(), 7);
    for label in EmotionLabel::ALL {
        assert!(
            distribution.contains_key(label.as_str()),
            "missing key {}",
            label.as_str()
        );
    }
    assert_eq!(json["distribution"]["Happy"], 77);
    assert_eq!(json["distribution"]["Disgust"], 0);
}

#[test]
fn face_data_is_omitted_when_absent() {
    let json = serde_json::to_value(sample_result(None)).unwrap();
    assert!(json.get("faceData").is_none());
}

#[test]
fn backend_prediction_tolerates_partial_payloads() {
    let full: BackendPrediction = serde_json::from_str(
        r#"{
            "emotion": "Happy",
            "confidence": 0.92,
            "predictions": [0.1, 0.0, 0.0, 0.7, 0.1, 0.05, 0.05],
            "face_detected": true,
            "face_bbox": [12, 34, 56, 78]
        }"#,
    )
    .unwrap();
    assert_eq!(full.emotion.as_deref(), Some("Happy"));
    assert_eq!(full.predictions.as_ref().map(Vec::len), Some(7));
    assert_eq!(full.face_bbox, Some([12.0, 34.0, 56.0, 78.0]));

    let empty: BackendPrediction = serde_json::from_str("{}").unwrap();
    assert!(empty.emotion.is_none());
    assert!(empty.predictions.is_none());
    assert!(empty.face_bbox.is_none());
}

#[test]
fn result_round_trips_through_json() {
    let original = sample_result(None);
    let json = serde_json::to_string(&original).unwrap();
    let back: EmotionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
}
