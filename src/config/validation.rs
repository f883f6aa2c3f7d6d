use super::{ConfigError, ConfigResult, MorseConfig, ServerConfig};
use crate::core::audio::WAV_HEADER_LEN;

/// Lowest sample rate we are willing to render at
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Most 16-bit mono samples a WAV data chunk can describe
pub const MAX_WAV_SAMPLES: u64 = (u32::MAX as u64 - WAV_HEADER_LEN as u64) / 2;

/// Validate a fully merged configuration
pub(super) fn validate(config: &ServerConfig) -> ConfigResult<()> {
    validate_morse(&config.morse)?;
    validate_rate_limit(config.rate_limit_requests_per_second, config.rate_limit_burst_size)?;
    Ok(())
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}

fn validate_morse(morse: &MorseConfig) -> ConfigResult<()> {
    if !(morse.base_wpm.is_finite() && morse.base_wpm > 0.0) {
        return Err(invalid(format!(
            "morse base_wpm must be positive, got {}",
            morse.base_wpm
        )));
    }

    if !(morse.amplitude > 0.0 && morse.amplitude <= 1.0) {
        return Err(invalid(format!(
            "morse amplitude must be in (0.0, 1.0], got {}",
            morse.amplitude
        )));
    }

    if morse.sample_rate < MIN_SAMPLE_RATE {
        return Err(invalid(format!(
            "morse sample_rate must be at least {MIN_SAMPLE_RATE} Hz, got {}",
            morse.sample_rate
        )));
    }

    let nyquist = f64::from(morse.sample_rate) / 2.0;
    if !(morse.tone_frequency_hz > 0.0 && morse.tone_frequency_hz < nyquist) {
        return Err(invalid(format!(
            "morse tone_frequency_hz must be between 0 and {nyquist} Hz, got {}",
            morse.tone_frequency_hz
        )));
    }

    if morse.max_input_chars == 0 {
        return Err(invalid("morse max_input_chars must be positive".to_string()));
    }

    if !(morse.max_audio_secs.is_finite() && morse.max_audio_secs > 0.0) {
        return Err(invalid(format!(
            "morse max_audio_secs must be positive, got {}",
            morse.max_audio_secs
        )));
    }

    let max_samples = morse.max_audio_secs * f64::from(morse.sample_rate);
    if max_samples > MAX_WAV_SAMPLES as f64 {
        return Err(invalid(format!(
            "morse max_audio_secs of {} s at {} Hz exceeds the WAV size limit",
            morse.max_audio_secs, morse.sample_rate
        )));
    }

    if morse.default_voice.is_empty() {
        return Err(invalid("morse default_voice must not be empty".to_string()));
    }

    if let Some((name, _)) = morse.voices.iter().find(|(_, wpm)| **wpm == 0) {
        return Err(invalid(format!(
            "voice '{name}' must map to a positive WPM"
        )));
    }

    Ok(())
}

fn validate_rate_limit(rps: u32, burst: u32) -> ConfigResult<()> {
    if rps == 0 || burst == 0 {
        return Err(invalid(
            "rate limit requests per second and burst size must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_bad_wpm() {
        for wpm in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let mut config = ServerConfig::default();
            config.morse.base_wpm = wpm;
            assert!(validate(&config).is_err(), "wpm {wpm} accepted");
        }
    }

    #[test]
    fn test_rejects_bad_amplitude() {
        let mut config = ServerConfig::default();
        config.morse.amplitude = 0.0;
        assert!(validate(&config).is_err());

        config.morse.amplitude = 1.0;
        assert!(validate(&config).is_ok());

        config.morse.amplitude = 1.01;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_frequency_above_nyquist() {
        let mut config = ServerConfig::default();
        config.morse.sample_rate = 8000;
        config.morse.tone_frequency_hz = 4000.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("tone_frequency_hz"));

        config.morse.tone_frequency_hz = 3999.0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_low_sample_rate() {
        let mut config = ServerConfig::default();
        config.morse.sample_rate = 4000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_limits() {
        let mut config = ServerConfig::default();
        config.morse.max_input_chars = 0;
        assert!(validate(&config).is_err());

        let mut config = ServerConfig::default();
        config.rate_limit_burst_size = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_audio_limit_bounds() {
        for secs in [0.0, -1.0, f64::NAN] {
            let mut config = ServerConfig::default();
            config.morse.max_audio_secs = secs;
            assert!(validate(&config).is_err(), "max_audio_secs {secs} accepted");
        }

        // A day at 48 kHz no longer fits a 32-bit WAV data chunk
        let mut config = ServerConfig::default();
        config.morse.sample_rate = 48000;
        config.morse.max_audio_secs = 86_400.0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("max_audio_secs"));

        config.morse.max_audio_secs = 3600.0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_zero_voice_wpm() {
        let mut config = ServerConfig::default();
        config.morse.voices.insert("silent".to_string(), 0);
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("silent"));
    }
}
