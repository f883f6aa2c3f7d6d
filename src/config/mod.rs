//! Configuration module for the Morse gateway
//!
//! Server and synthesis settings come from several sources: .env files, YAML
//! files and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//! All values are read once at startup and never change while the server runs.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//! - `validation`: Configuration validation logic
//!
//! # Example
//! ```rust,no_run
//! use morse_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::morse::VoiceTable;
use crate::core::morse::table::DEFAULT_VOICE_WPM;

mod env;
mod merge;
mod validation;
mod yaml;

pub use yaml::YamlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_RATE_LIMIT_RPS: u32 = 60;
pub const DEFAULT_RATE_LIMIT_BURST: u32 = 10;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// TLS configuration for HTTPS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Morse synthesis settings
///
/// # Example YAML
/// ```yaml
/// morse:
///   base_wpm: 20
///   tone_frequency_hz: 600
///   amplitude: 0.5
///   sample_rate: 44100
///   voices:
///     qrq: 40
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MorseConfig {
    /// WPM used for unmapped voices, multiplied by the request speed
    pub base_wpm: f64,
    /// Sidetone frequency in Hz
    pub tone_frequency_hz: f64,
    /// Peak amplitude in (0.0, 1.0]
    pub amplitude: f64,
    /// Output sample rate in Hz
    pub sample_rate: u32,
    /// Longest accepted `input`, in characters
    pub max_input_chars: usize,
    /// Longest audio a single request may produce, in seconds
    pub max_audio_secs: f64,
    /// Voice used when the request omits one
    pub default_voice: String,
    /// Voice name (lowercase) to WPM
    pub voices: BTreeMap<String, u32>,
}

impl Default for MorseConfig {
    fn default() -> Self {
        Self {
            base_wpm: 20.0,
            tone_frequency_hz: 600.0,
            amplitude: 0.5,
            sample_rate: 44100,
            max_input_chars: 4096,
            max_audio_secs: 600.0,
            default_voice: "echo".to_string(),
            voices: DEFAULT_VOICE_WPM
                .entries()
                .map(|(name, wpm)| (name.to_string(), *wpm))
                .collect(),
        }
    }
}

impl MorseConfig {
    /// Build the voice lookup table from the configured entries.
    pub fn voice_table(&self) -> VoiceTable {
        VoiceTable::from_entries(self.voices.iter().map(|(k, v)| (k.clone(), *v)))
    }
}

/// Server configuration
///
/// Contains all configuration needed to run the gateway:
/// - Server settings (host, port, TLS)
/// - Security settings (CORS, rate limiting)
/// - Morse synthesis settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (same-origin only)
    pub cors_allowed_origins: Option<String>,

    // Rate limiting configuration
    /// Maximum requests per second per IP address
    /// Default: 60
    pub rate_limit_requests_per_second: u32,
    /// Maximum burst size for rate limiting
    /// Default: 10
    pub rate_limit_burst_size: u32,

    pub morse: MorseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            tls: None,
            cors_allowed_origins: None,
            rate_limit_requests_per_second: DEFAULT_RATE_LIMIT_RPS,
            rate_limit_burst_size: DEFAULT_RATE_LIMIT_BURST,
            morse: MorseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables only
    ///
    /// Missing variables fall back to defaults. The result is validated.
    pub fn from_env() -> ConfigResult<Self> {
        let config = merge::merge_config(None)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    /// - Configuration validation fails
    pub fn from_file(path: &PathBuf) -> ConfigResult<Self> {
        // .env is loaded in main.rs before we get here
        let yaml_config = YamlConfig::from_file(path)?;
        let config = merge::merge_config(Some(yaml_config))?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if TLS is enabled
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }

    /// Rate limiting is switched off at or above 100000 requests per second
    pub fn is_rate_limit_enabled(&self) -> bool {
        self.rate_limit_requests_per_second < 100_000
    }
}
