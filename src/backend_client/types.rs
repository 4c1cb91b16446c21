//! Request bodies for the ML backend endpoints.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TextAnalyzeRequest<'a> {
    pub text: &'a str,
}

/// Base64-encoded image, optionally a full data URL.
#[derive(Debug, Clone, Serialize)]
pub struct ImageAnalyzeRequest<'a> {
    pub image: &'a str,
}

/// Base64-encoded webcam frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameAnalyzeRequest<'a> {
    pub frame: &'a str,
}
