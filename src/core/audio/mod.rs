//! Waveform rendering and WAV packaging for Morse segments.

mod renderer;
mod wav;

pub use renderer::{WaveformRenderer, quantize_sample};
pub use wav::{WAV_BITS_PER_SAMPLE, WAV_CHANNELS, WAV_HEADER_LEN, encode_wav};
