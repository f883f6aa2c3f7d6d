use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use axum_server::tls_rustls::RustlsConfig;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use morse_gateway::{MorseSynthesizer, ServerConfig, routes, state::AppState};

/// Morse Gateway - OpenAI-compatible text-to-speech server that speaks Morse code
#[derive(Parser, Debug)]
#[command(name = "morse-gateway")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render text to a WAV file without starting the server
    Render {
        /// Text to encode
        #[arg(short = 't', long = "text")]
        text: String,

        /// Voice name selecting the WPM (defaults to the configured voice)
        #[arg(short = 'v', long = "voice")]
        voice: Option<String>,

        /// Speed multiplier for voices that are not mapped
        #[arg(short = 's', long = "speed", default_value_t = 1.0)]
        speed: f32,

        /// Output WAV path
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = match path {
        Some(config_path) => {
            info!("Loading configuration from {}", config_path.display());
            ServerConfig::from_file(&config_path)?
        }
        None => ServerConfig::from_env()?,
    };
    Ok(config)
}

fn render(
    config: &ServerConfig,
    text: &str,
    voice: Option<&str>,
    speed: f32,
    output: &PathBuf,
) -> anyhow::Result<()> {
    let synthesizer = MorseSynthesizer::new(&config.morse);
    let voice = voice.unwrap_or(synthesizer.default_voice());
    let audio = synthesizer.synthesize(text, voice, speed)?;

    std::fs::write(output, &audio.wav)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} ({:.2} s at {:.2} WPM)",
        output.display(),
        audio.duration_secs(),
        audio.wpm
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    if let Some(Commands::Render {
        text,
        voice,
        speed,
        output,
    }) = cli.command
    {
        return render(&config, &text, voice.as_deref(), speed, &output);
    }

    let address = config.address();
    let tls_config = config.tls.clone();
    println!("Starting server on {address}");

    let app_state = AppState::new(config);
    let app = routes::create_app(app_state);

    // Parse socket address
    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid server address '{}': {}", address, e))?;

    // Start server with or without TLS
    if let Some(tls) = tls_config {
        // Crypto provider must be installed before the first TLS handshake
        rustls::crypto::ring::default_provider()
            .install_default()
            .map_err(|_| anyhow!("Failed to install default crypto provider"))?;

        // Load TLS configuration from certificate and key files
        let rustls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
            .await
            .map_err(|e| {
                anyhow!(
                    "Failed to load TLS certificates from {} and {}: {}",
                    tls.cert_path.display(),
                    tls.key_path.display(),
                    e
                )
            })?;

        println!("Server listening on https://{} (TLS enabled)", socket_addr);

        axum_server::bind_rustls(socket_addr, rustls_config)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await
            .map_err(|e| anyhow!("TLS server error: {}", e))?;
    } else {
        println!("Server listening on http://{}", socket_addr);

        let listener = TcpListener::bind(&socket_addr).await?;
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;
    }

    Ok(())
}
