use std::f64::consts::TAU;

use crate::core::error::{MorseError, MorseResult};
use crate::core::morse::{Segment, Signal};

/// Converts Morse segments into 16-bit PCM samples.
///
/// Tones are plain sine bursts with the phase reset at the start of every
/// tone. There is no attack/release envelope, so keying edges are hard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformRenderer {
    sample_rate: u32,
    frequency_hz: f64,
    amplitude: f64,
}

impl WaveformRenderer {
    pub fn new(sample_rate: u32, frequency_hz: f64, amplitude: f64) -> Self {
        Self {
            sample_rate,
            frequency_hz,
            amplitude,
        }
    }

    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples for a duration, truncated toward zero.
    #[inline]
    pub fn sample_count(&self, duration_secs: f64) -> usize {
        (duration_secs * f64::from(self.sample_rate)).floor() as usize
    }

    /// Number of samples [`render`](Self::render) would produce for `segments`.
    pub fn total_samples(&self, segments: &[Segment]) -> usize {
        segments
            .iter()
            .map(|s| self.sample_count(s.duration_secs))
            .sum()
    }

    /// Render the full segment sequence.
    ///
    /// Sample counts are computed per segment, so rounding never carries over
    /// from one segment to the next.
    ///
    /// # Errors
    /// Returns [`MorseError::Render`] when `segments` is empty.
    pub fn render(&self, segments: &[Segment]) -> MorseResult<Vec<i16>> {
        if segments.is_empty() {
            return Err(MorseError::Render("segment sequence is empty".to_string()));
        }

        let mut samples = Vec::with_capacity(self.total_samples(segments));

        for segment in segments {
            let count = self.sample_count(segment.duration_secs);
            match segment.signal {
                Signal::Tone => self.push_tone(&mut samples, count),
                Signal::Silence => samples.resize(samples.len() + count, 0),
            }
        }

        Ok(samples)
    }

    fn push_tone(&self, samples: &mut Vec<i16>, count: usize) {
        let step = TAU * self.frequency_hz / f64::from(self.sample_rate);
        samples.extend(
            (0..count).map(|n| quantize_sample(self.amplitude * (step * n as f64).sin())),
        );
    }
}

/// Quantize a sample in `[-1.0, 1.0]` to signed 16-bit, clipping out-of-range values.
#[inline]
pub fn quantize_sample(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * f64::from(i16::MAX)).round() as i16
}
