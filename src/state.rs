use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::MorseSynthesizer;

/// Shared, read-only state handed to every request handler
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub synthesizer: MorseSynthesizer,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let synthesizer = MorseSynthesizer::new(&config.morse);
        tracing::info!(
            voices = synthesizer.voices().len(),
            base_wpm = synthesizer.base_wpm(),
            sample_rate = synthesizer.sample_rate(),
            "Morse synthesizer ready"
        );
        Arc::new(Self { config, synthesizer })
    }
}
