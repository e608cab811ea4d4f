use std::future::Future;
use std::path::Path;

use reqwest::multipart::{Form, Part};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::config::{ClientConfig, RequestParams};
use crate::error::{Error, Result};
use crate::types::Transcription;

/// Audio file contents ready for upload.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AudioUpload {
    /// Read the whole file. The handle is closed before this returns,
    /// whether the read succeeded or not.
    pub async fn open(path: &Path) -> Result<Self> {
        let mut bytes = Vec::new();
        {
            let mut file = tokio::fs::File::open(path).await?;
            file.read_to_end(&mut bytes).await?;
        }

        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".into());

        Ok(Self { file_name, bytes })
    }

    /// MIME type guessed from the file extension.
    pub fn mime_type(&self) -> &'static str {
        let ext = Path::new(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        match ext.as_deref() {
            Some("flac") => "audio/flac",
            Some("wav") => "audio/wav",
            Some("mp3") => "audio/mpeg",
            Some("m4a") => "audio/mp4",
            Some("ogg") | Some("opus") => "audio/ogg",
            Some("webm") => "audio/webm",
            _ => "application/octet-stream",
        }
    }
}

/// A remote speech-to-text service.
pub trait SpeechToText {
    /// Submit audio with the given parameters and wait for the transcript.
    fn convert(
        &self,
        audio: AudioUpload,
        params: &RequestParams,
    ) -> impl Future<Output = Result<Transcription>> + Send;
}

/// ElevenLabs Scribe client.
#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ElevenLabsClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl SpeechToText for ElevenLabsClient {
    async fn convert(&self, audio: AudioUpload, params: &RequestParams) -> Result<Transcription> {
        let mime = audio.mime_type();
        let size = audio.bytes.len();
        let url = self.config.endpoint();

        let part = Part::bytes(audio.bytes)
            .file_name(audio.file_name)
            .mime_str(mime)?;

        let mut form = Form::new().part("file", part);
        for (name, value) in params.form_fields() {
            form = form.text(name, value);
        }

        debug!(?params, mime, "request parameters");
        info!(%url, bytes = size, "submitting audio");

        let response = self
            .http
            .post(&url)
            .header("xi-api-key", self.config.api_key.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transcription(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transcription(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Transcription(format!(
                "HTTP {status}: {}",
                body.trim()
            )));
        }

        let transcription: Transcription = serde_json::from_str(&body)
            .map_err(|e| Error::Transcription(format!("invalid response body: {e}")))?;

        info!(
            status = status.as_u16(),
            chars = transcription.text.chars().count(),
            "transcription received"
        );

        Ok(transcription)
    }
}
