use std::path::PathBuf;

use crate::config::API_KEY_VAR;

/// Usage text printed when no audio path is given.
pub const USAGE: &str = "Usage: scribe /path/to/audio.flac\n\
Example: scribe audio.flac\n\
Note: This tool is configured for Bengali audio transcription";

/// All errors that can occur in scribe.
///
/// Every variant is terminal: the CLI prints the `Display` text and exits
/// with [`Error::exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", USAGE)]
    Usage,

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Set {} in your environment or .env file.", API_KEY_VAR)]
    MissingCredential,

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_usage() {
        let msg = Error::Usage.to_string();
        assert!(msg.starts_with("Usage: scribe"));
        assert!(msg.contains("Bengali"));
        assert_eq!(msg.lines().count(), 3);
    }

    #[test]
    fn test_error_display_file_not_found() {
        let e = Error::FileNotFound {
            path: PathBuf::from("/tmp/missing.flac"),
        };
        assert_eq!(e.to_string(), "File not found: /tmp/missing.flac");
    }

    #[test]
    fn test_error_display_missing_credential() {
        let msg = Error::MissingCredential.to_string();
        assert_eq!(msg, "Set ELEVENLABS_API_KEY in your environment or .env file.");
    }

    #[test]
    fn test_error_display_transcription() {
        let e = Error::Transcription("401 Unauthorized".into());
        assert_eq!(e.to_string(), "Transcription failed: 401 Unauthorized");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<String>("invalid json").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Json(_)));
    }

    #[test]
    fn test_every_error_exits_nonzero() {
        let errors = [
            Error::Usage,
            Error::FileNotFound {
                path: PathBuf::from("x"),
            },
            Error::MissingCredential,
            Error::Transcription("boom".into()),
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 1, "{e:?}");
        }
    }
}
