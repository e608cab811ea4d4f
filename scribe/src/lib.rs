//! Bengali speech-to-text for a single audio file via the ElevenLabs Scribe API.
//!
//! **scribe** checks that the file exists and that a credential is configured,
//! uploads the audio with a fixed request (`scribe_v1`, language `ben`, no
//! diarization, no audio event tags) and hands back the transcript.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> scribe::Result<()> {
//! // Reads ELEVENLABS_API_KEY from the environment
//! let transcription = scribe::transcribe_file("speech.flac").await?;
//! println!("{}", transcription.text());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod transcribe;
pub mod types;

pub use config::{ApiKey, ClientConfig, RequestParams};
pub use error::{Error, Result};
pub use transcribe::{AudioUpload, ElevenLabsClient, SpeechToText};
pub use types::{Transcription, Word};

use std::path::Path;

use tracing::info;

/// Transcribe a local audio file, taking the credential and base URL from
/// the environment.
pub async fn transcribe_file(path: impl AsRef<Path>) -> Result<Transcription> {
    transcribe_file_with(path, || ElevenLabsClient::new(ClientConfig::from_env()?)).await
}

/// Transcribe a local audio file with a caller-supplied client.
///
/// Checks run in order: the file must exist, then `connect` must produce a
/// client (this is where a missing credential surfaces). Nothing is sent
/// unless both pass. Any failure while reading or submitting the audio is
/// reported as [`Error::Transcription`].
pub async fn transcribe_file_with<S, F>(path: impl AsRef<Path>, connect: F) -> Result<Transcription>
where
    S: SpeechToText,
    F: FnOnce() -> Result<S>,
{
    let path = path.as_ref();

    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let client = connect()?;

    info!(path = %path.display(), "transcribing");

    let audio = AudioUpload::open(path)
        .await
        .map_err(|e| Error::Transcription(e.to_string()))?;

    client
        .convert(audio, &RequestParams::BENGALI)
        .await
        .map_err(|e| match e {
            Error::Transcription(msg) => Error::Transcription(msg),
            other => Error::Transcription(other.to_string()),
        })
}
