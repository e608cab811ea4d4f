use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the ElevenLabs API key.
pub const API_KEY_VAR: &str = "ELEVENLABS_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "ELEVENLABS_BASE_URL";

/// Default ElevenLabs API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Fixed parameters sent with every speech-to-text request.
///
/// These never depend on arguments or audio content. [`RequestParams::BENGALI`]
/// is the only configuration the tool uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestParams {
    pub model_id: &'static str,
    pub language_code: &'static str,
    pub diarize: bool,
    pub tag_audio_events: bool,
}

impl RequestParams {
    /// Scribe v1, Bengali, no diarization, no audio event tags.
    pub const BENGALI: RequestParams = RequestParams {
        model_id: "scribe_v1",
        language_code: "ben",
        diarize: false,
        tag_audio_events: false,
    };

    /// Multipart text fields in the form the API expects.
    pub fn form_fields(&self) -> [(&'static str, String); 4] {
        [
            ("model_id", self.model_id.to_string()),
            ("language_code", self.language_code.to_string()),
            ("diarize", self.diarize.to_string()),
            ("tag_audio_events", self.tag_audio_events.to_string()),
        ]
    }
}

impl Default for RequestParams {
    fn default() -> Self {
        Self::BENGALI
    }
}

/// API credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Read the key from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the key through an arbitrary lookup. Empty or blank values count
    /// as missing.
    pub fn from_lookup(lookup: impl FnOnce(&str) -> Option<String>) -> Result<Self> {
        match lookup(API_KEY_VAR) {
            Some(key) if !key.trim().is_empty() => Ok(ApiKey(key.trim().to_string())),
            _ => Err(Error::MissingCredential),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Builder for the remote client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    /// Request timeout. `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Build from the environment: key from [`API_KEY_VAR`], optional base URL
    /// override from [`BASE_URL_VAR`].
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(ApiKey::from_env()?);
        if let Ok(url) = std::env::var(BASE_URL_VAR) {
            if !url.trim().is_empty() {
                config = config.base_url(url.trim());
            }
        }
        Ok(config)
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL of the speech-to-text endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/v1/speech-to-text", self.base_url)
    }
}
