use std::path::PathBuf;

use super::yaml::YamlConfig;
use super::{ConfigError, ConfigResult, ServerConfig, TlsConfig, env};

/// Merge environment configuration (base) with optional YAML overrides
pub(super) fn merge_config(yaml: Option<YamlConfig>) -> ConfigResult<ServerConfig> {
    let mut config = env::load_from_env()?;

    let Some(yaml) = yaml else {
        return Ok(config);
    };

    if let Some(server) = yaml.server {
        if let Some(host) = server.host {
            config.host = host;
        }
        if let Some(port) = server.port {
            config.port = port;
        }
        if let Some(tls) = server.tls {
            config.tls = if tls.enabled == Some(false) {
                None
            } else {
                match (tls.cert_path, tls.key_path) {
                    (Some(cert), Some(key)) => Some(TlsConfig {
                        cert_path: PathBuf::from(cert),
                        key_path: PathBuf::from(key),
                    }),
                    (None, None) => config.tls.take(),
                    _ => {
                        return Err(ConfigError::Invalid(
                            "server.tls requires both cert_path and key_path".to_string(),
                        ));
                    }
                }
            };
        }
    }

    if let Some(security) = yaml.security {
        if security.cors_allowed_origins.is_some() {
            config.cors_allowed_origins = security.cors_allowed_origins;
        }
        if let Some(rps) = security.rate_limit_requests_per_second {
            config.rate_limit_requests_per_second = rps;
        }
        if let Some(burst) = security.rate_limit_burst_size {
            config.rate_limit_burst_size = burst;
        }
    }

    if let Some(morse) = yaml.morse {
        let target = &mut config.morse;
        if let Some(wpm) = morse.base_wpm {
            target.base_wpm = wpm;
        }
        if let Some(freq) = morse.tone_frequency_hz {
            target.tone_frequency_hz = freq;
        }
        if let Some(amplitude) = morse.amplitude {
            target.amplitude = amplitude;
        }
        if let Some(rate) = morse.sample_rate {
            target.sample_rate = rate;
        }
        if let Some(max) = morse.max_input_chars {
            target.max_input_chars = max;
        }
        if let Some(secs) = morse.max_audio_secs {
            target.max_audio_secs = secs;
        }
        if let Some(voice) = morse.default_voice {
            target.default_voice = voice.trim().to_lowercase();
        }
        for (name, wpm) in morse.voices {
            target.voices.insert(name.trim().to_lowercase(), wpm);
        }
    }

    Ok(config)
}
