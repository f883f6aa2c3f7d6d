//! Text to Morse WAV pipeline.
//!
//! [`MorseSynthesizer`] is built once from [`MorseConfig`] and shared by every
//! request. It holds no mutable state, so concurrent calls never contend.

use std::time::Instant;

use tracing::debug;

use crate::config::MorseConfig;
use crate::core::audio::{WaveformRenderer, encode_wav};
use crate::core::error::{MorseError, MorseResult};
use crate::core::morse::{ResolvedWpm, Segment, Timing, VoiceTable, encode};

pub const MIN_SPEED: f32 = 0.25;
pub const MAX_SPEED: f32 = 4.0;
pub const DEFAULT_SPEED: f32 = 1.0;

/// Rendered Morse audio and the parameters it was produced with.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// Complete WAV file
    pub wav: Vec<u8>,
    pub wpm: f64,
    pub voice_mapped: bool,
    pub sample_count: usize,
    pub sample_rate: u32,
}

impl SynthesizedAudio {
    /// Playback length in seconds
    pub fn duration_secs(&self) -> f64 {
        self.sample_count as f64 / f64::from(self.sample_rate)
    }
}

/// Converts text into Morse code audio.
#[derive(Debug, Clone)]
pub struct MorseSynthesizer {
    voices: VoiceTable,
    renderer: WaveformRenderer,
    base_wpm: f64,
    max_input_chars: usize,
    max_audio_secs: f64,
    default_voice: String,
}

impl MorseSynthesizer {
    pub fn new(config: &MorseConfig) -> Self {
        Self {
            voices: config.voice_table(),
            renderer: WaveformRenderer::new(
                config.sample_rate,
                config.tone_frequency_hz,
                config.amplitude,
            ),
            base_wpm: config.base_wpm,
            max_input_chars: config.max_input_chars,
            max_audio_secs: config.max_audio_secs,
            default_voice: config.default_voice.clone(),
        }
    }

    pub fn voices(&self) -> &VoiceTable {
        &self.voices
    }

    pub fn base_wpm(&self) -> f64 {
        self.base_wpm
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    pub fn sample_rate(&self) -> u32 {
        self.renderer.sample_rate()
    }

    /// Resolve the keying speed for a voice and speed multiplier.
    pub fn resolve_wpm(&self, voice: &str, speed: f32) -> ResolvedWpm {
        self.voices.resolve(voice, speed, self.base_wpm)
    }

    /// Encode text into segments at the WPM implied by `voice` and `speed`.
    pub fn encode(&self, text: &str, voice: &str, speed: f32) -> MorseResult<Vec<Segment>> {
        let resolved = self.resolve_wpm(voice, speed);
        encode(text, &Timing::from_wpm(resolved.wpm))
    }

    /// Synthesize `text` into a WAV file.
    ///
    /// # Errors
    /// - [`MorseError::InvalidSpeed`] if `speed` is outside `0.25..=4.0`
    /// - [`MorseError::InputTooLong`] if `text` exceeds the configured limit
    /// - [`MorseError::EmptyInput`] if nothing in `text` is encodable
    /// - [`MorseError::AudioTooLong`] if the audio would outlast `max_audio_secs`
    /// - [`MorseError::Encoding`] if the WAV writer fails
    pub fn synthesize(
        &self,
        text: &str,
        voice: &str,
        speed: f32,
    ) -> MorseResult<SynthesizedAudio> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(MorseError::InvalidSpeed(speed));
        }

        let len = text.chars().count();
        if len > self.max_input_chars {
            return Err(MorseError::InputTooLong {
                len,
                max: self.max_input_chars,
            });
        }

        let started = Instant::now();
        let resolved = self.resolve_wpm(voice, speed);
        let segments = encode(text, &Timing::from_wpm(resolved.wpm))?;

        // Checked before rendering so oversized requests never allocate
        let planned = self.renderer.total_samples(&segments);
        if planned > self.renderer.sample_count(self.max_audio_secs) {
            return Err(MorseError::AudioTooLong {
                secs: planned as f64 / f64::from(self.renderer.sample_rate()),
                max: self.max_audio_secs,
            });
        }

        let samples = self.renderer.render(&segments)?;
        let wav = encode_wav(&samples, self.renderer.sample_rate())?;

        debug!(
            segments = segments.len(),
            samples = samples.len(),
            bytes = wav.len(),
            wpm = resolved.wpm,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Synthesized Morse audio"
        );

        Ok(SynthesizedAudio {
            wav,
            wpm: resolved.wpm,
            voice_mapped: resolved.voice_mapped,
            sample_count: samples.len(),
            sample_rate: self.renderer.sample_rate(),
        })
    }
}

impl Default for MorseSynthesizer {
    fn default() -> Self {
        Self::new(&MorseConfig::default())
    }
}
