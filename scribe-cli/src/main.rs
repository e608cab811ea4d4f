use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use scribe::{ClientConfig, ElevenLabsClient, Error, Transcription};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "scribe=warn";

#[derive(Parser)]
#[command(
    name = "scribe",
    about = "Transcribe a Bengali audio file with ElevenLabs Scribe"
)]
struct Cli {
    /// Audio file to transcribe (flac, wav, mp3, m4a, ogg, webm).
    audio_file: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Extra positional arguments are accepted and ignored.
    #[arg(hide = true)]
    extra: Vec<String>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Transcript text only.
    Text,
    /// Full response including word timestamps.
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    // Diagnostics go to stdout alongside the transcript; logs stay on stderr.
    match run(cli, None).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            println!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// `env_file` of `None` searches for `.env` from the working directory up.
async fn run(cli: Cli, env_file: Option<&Path>) -> scribe::Result<String> {
    let path = cli.audio_file.ok_or(Error::Usage)?;

    if !cli.extra.is_empty() {
        tracing::warn!(ignored = ?cli.extra, "extra arguments ignored");
    }

    let transcription = scribe::transcribe_file_with(&path, || connect(env_file)).await?;

    render(&transcription, &cli.format)
}

/// Load `.env`, then build the client from the environment.
///
/// Variables already set in the process are not overwritten. A missing
/// `.env` is fine.
fn connect(env_file: Option<&Path>) -> scribe::Result<ElevenLabsClient> {
    let loaded = match env_file {
        Some(path) => dotenv::from_path(path),
        None => dotenv::dotenv().map(|_| ()),
    };
    if let Err(e) = loaded {
        tracing::debug!(error = %e, "no .env loaded");
    }

    ElevenLabsClient::new(ClientConfig::from_env()?)
}

fn render(transcription: &Transcription, format: &OutputFormat) -> scribe::Result<String> {
    match format {
        OutputFormat::Text => Ok(transcription.text().to_string()),
        OutputFormat::Json => transcription.to_json_pretty(),
    }
}
