use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;

/// A voice name and the keying speed it selects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub voice: String,
    pub wpm: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoicesResponse {
    /// Sorted by name
    pub voices: Vec<Voice>,
    /// Used when a request omits `voice`
    pub default_voice: String,
    /// Multiplied by `speed` for voices not listed here
    pub base_wpm: f64,
}

/// List the configured voice-to-WPM table
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<VoicesResponse> {
    let synth = &state.synthesizer;
    let voices = synth
        .voices()
        .iter()
        .map(|(voice, wpm)| Voice {
            voice: voice.to_string(),
            wpm,
        })
        .collect();

    Json(VoicesResponse {
        voices,
        default_voice: synth.default_voice().to_string(),
        base_wpm: synth.base_wpm(),
    })
}
