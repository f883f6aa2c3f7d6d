pub mod audio;
pub mod error;
pub mod morse;
pub mod synth;

pub use error::{MorseError, MorseResult};
pub use synth::{MorseSynthesizer, SynthesizedAudio};
