use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::core::error::{MorseError, MorseResult};

/// Output is always mono
pub const WAV_CHANNELS: u16 = 1;
/// Signed 16-bit little-endian PCM
pub const WAV_BITS_PER_SAMPLE: u16 = 16;
/// Size of the canonical RIFF/fmt/data header written for PCM
pub const WAV_HEADER_LEN: usize = 44;

/// Wrap 16-bit mono samples in an in-memory WAV container.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> MorseResult<Vec<u8>> {
    let spec = WavSpec {
        channels: WAV_CHANNELS,
        sample_rate,
        bits_per_sample: WAV_BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let sample_count = u32::try_from(samples.len()).map_err(|_| {
        MorseError::Render(format!(
            "{} samples do not fit in a WAV container",
            samples.len()
        ))
    })?;

    let mut buffer = Cursor::new(Vec::with_capacity(WAV_HEADER_LEN + samples.len() * 2));
    {
        let mut writer = WavWriter::new(&mut buffer, spec)?;
        let mut pcm = writer.get_i16_writer(sample_count);
        for &sample in samples {
            pcm.write_sample(sample);
        }
        pcm.flush()?;
        writer.finalize()?;
    }

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::WavReader;

    #[test]
    fn test_header_fields() {
        let wav = encode_wav(&[0, 1000, -1000, i16::MAX, i16::MIN], 44100).unwrap();

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(wav.len(), WAV_HEADER_LEN + 5 * 2);

        let reader = WavReader::new(Cursor::new(wav)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);
    }

    #[test]
    fn test_samples_preserved() {
        let samples = [0i16, 12, -12, 32767, -32768];
        let wav = encode_wav(&samples, 8000).unwrap();

        let mut reader = WavReader::new(Cursor::new(wav)).unwrap();
        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }
}
