//! `POST /v1/audio/speech`: OpenAI-compatible speech endpoint that answers in Morse.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::synth::DEFAULT_SPEED;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;

/// Effective keying speed of the returned audio
pub const WPM_HEADER: &str = "x-morse-wpm";

/// Request body, matching the OpenAI `audio/speech` shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Accepted for compatibility, always Morse
    #[serde(default = "default_model")]
    pub model: String,
    /// Text to key
    pub input: String,
    /// Selects WPM from the voice table; falls back to the configured default
    #[serde(default)]
    pub voice: Option<String>,
    /// Multiplier on the base WPM, only used when the voice is not mapped
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Accepted for compatibility, output is always WAV
    #[serde(default = "default_response_format")]
    pub response_format: String,
}

fn default_model() -> String {
    "morse-code".to_string()
}

fn default_speed() -> f32 {
    DEFAULT_SPEED
}

fn default_response_format() -> String {
    "wav".to_string()
}

pub async fn create_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SpeechRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = payload?;
    let voice = request
        .voice
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(state.synthesizer.default_voice())
        .to_string();

    info!(
        model = %request.model,
        voice = %voice,
        speed = request.speed,
        input_chars = request.input.chars().count(),
        "Received speech request"
    );
    if !request.response_format.eq_ignore_ascii_case("wav") {
        debug!(
            response_format = %request.response_format,
            "Ignoring requested response_format, returning WAV"
        );
    }

    let started = Instant::now();
    let worker_state = state.clone();
    let speed = request.speed;
    let audio = tokio::task::spawn_blocking(move || {
        worker_state
            .synthesizer
            .synthesize(&request.input, &voice, speed)
    })
    .await
    .map_err(|e| AppError::Internal(format!("synthesis task failed: {e}")))??;

    info!(
        wpm = audio.wpm,
        voice_mapped = audio.voice_mapped,
        bytes = audio.wav.len(),
        duration_secs = audio.duration_secs(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Generated Morse audio"
    );

    let wpm = HeaderValue::from_str(&format!("{:.2}", audio.wpm))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("audio/wav")),
            (HeaderName::from_static(WPM_HEADER), wpm),
        ],
        audio.wav,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: SpeechRequest = serde_json::from_str(r#"{"input": "SOS"}"#).unwrap();
        assert_eq!(request.input, "SOS");
        assert_eq!(request.model, "morse-code");
        assert_eq!(request.voice, None);
        assert_eq!(request.speed, 1.0);
        assert_eq!(request.response_format, "wav");
    }

    #[test]
    fn test_request_openai_shape() {
        let request: SpeechRequest = serde_json::from_str(
            r#"{"model": "tts-1", "input": "hi", "voice": "onyx", "speed": 1.5, "response_format": "mp3"}"#,
        )
        .unwrap();
        assert_eq!(request.model, "tts-1");
        assert_eq!(request.voice.as_deref(), Some("onyx"));
        assert_eq!(request.speed, 1.5);
        assert_eq!(request.response_format, "mp3");
    }

    #[test]
    fn test_request_requires_input() {
        assert!(serde_json::from_str::<SpeechRequest>(r#"{"voice": "echo"}"#).is_err());
    }
}
