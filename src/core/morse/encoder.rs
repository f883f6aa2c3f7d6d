use tracing::debug;

use super::table::{lookup, symbols};
use super::{Segment, Signal};
use crate::core::error::{MorseError, MorseResult};

/// Units in the reference word "PARIS " including its trailing word gap.
pub const PARIS_UNITS_PER_WORD: f64 = 50.0;

pub const SYMBOL_GAP_UNITS: u32 = 1;
pub const CHARACTER_GAP_UNITS: u32 = 3;
pub const WORD_GAP_UNITS: u32 = 7;
/// Silence appended after the final character so playback does not end on a key-up click.
pub const TRAILING_GAP_UNITS: u32 = 1;

/// Unit timing for a given keying speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    wpm: f64,
    unit_secs: f64,
}

impl Timing {
    /// Build the timing for `wpm` words per minute.
    ///
    /// One unit lasts `60 / (wpm * 50)` seconds. `wpm` must be positive.
    pub fn from_wpm(wpm: f64) -> Self {
        Self {
            wpm,
            unit_secs: 60.0 / (wpm * PARIS_UNITS_PER_WORD),
        }
    }

    #[inline]
    pub fn wpm(&self) -> f64 {
        self.wpm
    }

    #[inline]
    pub fn unit_secs(&self) -> f64 {
        self.unit_secs
    }

    #[inline]
    pub fn duration_of(&self, units: u32) -> f64 {
        self.unit_secs * f64::from(units)
    }

    fn segment(&self, signal: Signal, units: u32) -> Segment {
        Segment {
            signal,
            units,
            duration_secs: self.duration_of(units),
        }
    }
}

/// Encode `text` into timed tone and silence segments.
///
/// Characters missing from the Morse table are skipped. Any run of whitespace
/// separates words; words left empty after skipping produce no gap.
///
/// # Errors
/// Returns [`MorseError::EmptyInput`] when nothing in `text` can be encoded.
pub fn encode(text: &str, timing: &Timing) -> MorseResult<Vec<Segment>> {
    let mut skipped = 0usize;
    let words: Vec<Vec<&'static str>> = text
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(|c| {
                    let pattern = lookup(c);
                    if pattern.is_none() {
                        skipped += 1;
                    }
                    pattern
                })
                .collect::<Vec<_>>()
        })
        .filter(|patterns| !patterns.is_empty())
        .collect();

    if skipped > 0 {
        debug!(skipped, "Skipped characters not present in the Morse table");
    }

    if words.is_empty() {
        return Err(MorseError::EmptyInput);
    }

    let mut segments = Vec::new();
    for (word_index, word) in words.iter().enumerate() {
        if word_index > 0 {
            segments.push(timing.segment(Signal::Silence, WORD_GAP_UNITS));
        }
        for (char_index, &pattern) in word.iter().enumerate() {
            if char_index > 0 {
                segments.push(timing.segment(Signal::Silence, CHARACTER_GAP_UNITS));
            }
            for (symbol_index, symbol) in symbols(pattern).enumerate() {
                if symbol_index > 0 {
                    segments.push(timing.segment(Signal::Silence, SYMBOL_GAP_UNITS));
                }
                segments.push(timing.segment(Signal::Tone, symbol.units()));
            }
        }
    }
    segments.push(timing.segment(Signal::Silence, TRAILING_GAP_UNITS));

    Ok(segments)
}
