//! Error types for Morse synthesis.

use thiserror::Error;

/// Result type for synthesis operations
pub type MorseResult<T> = Result<T, MorseError>;

/// Errors produced while turning text into Morse audio.
#[derive(Error, Debug)]
pub enum MorseError {
    /// Text had no characters present in the Morse table
    #[error("Input contains no characters that can be encoded as Morse code")]
    EmptyInput,

    /// Input longer than the configured limit
    #[error("Input is {len} characters long, the maximum is {max}")]
    InputTooLong { len: usize, max: usize },

    /// Rendered audio would exceed the configured duration limit
    #[error("Input would produce {secs:.1} s of audio, the maximum is {max:.1} s")]
    AudioTooLong { secs: f64, max: f64 },

    /// Speed multiplier outside the accepted range
    #[error("Speed {0} is out of range, expected a value between 0.25 and 4.0")]
    InvalidSpeed(f32),

    /// Waveform rendering failed
    #[error("Failed to render audio: {0}")]
    Render(String),

    /// WAV container could not be written
    #[error("Failed to encode WAV container: {0}")]
    Encoding(#[from] hound::Error),
}

impl MorseError {
    /// Whether the error was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Encoding(_))
    }

    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InputTooLong { .. } => "input_too_long",
            Self::AudioTooLong { .. } => "audio_too_long",
            Self::InvalidSpeed(_) => "invalid_speed",
            Self::Render(_) => "render_error",
            Self::Encoding(_) => "internal_error",
        }
    }
}
