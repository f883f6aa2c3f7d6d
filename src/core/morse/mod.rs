//! Morse encoding: character tables, PARIS timing and voice-to-WPM resolution.
//!
//! The encoder turns text into an ordered list of [`Segment`]s, each of which is
//! either a tone or a silence lasting a whole number of timing units:
//!
//! | element                  | units |
//! |--------------------------|-------|
//! | dot                      | 1     |
//! | dash                     | 3     |
//! | gap between symbols      | 1     |
//! | gap between characters   | 3     |
//! | gap between words        | 7     |

mod encoder;
pub mod table;
mod voices;

pub use encoder::{
    CHARACTER_GAP_UNITS, PARIS_UNITS_PER_WORD, SYMBOL_GAP_UNITS, Timing, TRAILING_GAP_UNITS,
    WORD_GAP_UNITS, encode,
};
pub use voices::{ResolvedWpm, VoiceTable};

/// A single Morse element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// Length of the tone in timing units.
    #[inline]
    pub fn units(&self) -> u32 {
        match self {
            Self::Dot => 1,
            Self::Dash => 3,
        }
    }
}

/// Whether a segment is keyed or silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Tone,
    Silence,
}

/// A timed run of tone or silence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub signal: Signal,
    /// Length in timing units
    pub units: u32,
    /// Length in seconds at the encoding WPM
    pub duration_secs: f64,
}

impl Segment {
    #[inline]
    pub fn is_tone(&self) -> bool {
        self.signal == Signal::Tone
    }
}
