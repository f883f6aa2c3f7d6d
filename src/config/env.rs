use std::path::PathBuf;
use std::str::FromStr;

use super::{ConfigError, ConfigResult, ServerConfig, TlsConfig};

/// Read an environment variable, treating empty values as unset
fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable into `T`
fn env_parse<T: FromStr>(name: &'static str) -> ConfigResult<Option<T>> {
    match env_string(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { name, value }),
        None => Ok(None),
    }
}

/// Build a configuration from defaults overlaid with environment variables
pub(super) fn load_from_env() -> ConfigResult<ServerConfig> {
    let mut config = ServerConfig::default();

    if let Some(host) = env_string("HOST") {
        config.host = host;
    }
    if let Some(port) = env_parse("PORT")? {
        config.port = port;
    }

    config.tls = match (env_string("TLS_CERT_PATH"), env_string("TLS_KEY_PATH")) {
        (Some(cert), Some(key)) => Some(TlsConfig {
            cert_path: PathBuf::from(cert),
            key_path: PathBuf::from(key),
        }),
        (None, None) => None,
        _ => {
            return Err(ConfigError::Invalid(
                "TLS_CERT_PATH and TLS_KEY_PATH must be set together".to_string(),
            ));
        }
    };

    config.cors_allowed_origins = env_string("CORS_ALLOWED_ORIGINS");
    if let Some(rps) = env_parse("RATE_LIMIT_REQUESTS_PER_SECOND")? {
        config.rate_limit_requests_per_second = rps;
    }
    if let Some(burst) = env_parse("RATE_LIMIT_BURST_SIZE")? {
        config.rate_limit_burst_size = burst;
    }

    let morse = &mut config.morse;
    if let Some(wpm) = env_parse("MORSE_BASE_WPM")? {
        morse.base_wpm = wpm;
    }
    if let Some(freq) = env_parse("MORSE_TONE_FREQUENCY_HZ")? {
        morse.tone_frequency_hz = freq;
    }
    if let Some(amplitude) = env_parse("MORSE_AMPLITUDE")? {
        morse.amplitude = amplitude;
    }
    if let Some(rate) = env_parse("MORSE_SAMPLE_RATE")? {
        morse.sample_rate = rate;
    }
    if let Some(max) = env_parse("MORSE_MAX_INPUT_CHARS")? {
        morse.max_input_chars = max;
    }
    if let Some(secs) = env_parse("MORSE_MAX_AUDIO_SECS")? {
        morse.max_audio_secs = secs;
    }
    if let Some(voice) = env_string("MORSE_DEFAULT_VOICE") {
        morse.default_voice = voice.trim().to_lowercase();
    }

    Ok(config)
}
