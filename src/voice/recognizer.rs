use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{AppConfig, DEFAULT_SPEECH_LOCALE};

/// Settings handed to the host recognizer when a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    pub lang: String,
    pub interim_results: bool,
    pub max_alternatives: u32,
    /// `false` means the host stops on its own at the end of an utterance
    pub continuous: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_SPEECH_LOCALE.to_string(),
            interim_results: true,
            max_alternatives: 1,
            continuous: false,
        }
    }
}

impl From<&AppConfig> for RecognizerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            lang: config.speech_locale.clone(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum VoiceError {
    #[error("Speech recognition is not supported")]
    Unsupported,

    #[error("Speech recognition failed to start: {0}")]
    Start(String),
}

/// One transcript segment as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechSegment {
    pub transcript: String,
    pub is_final: bool,
}

impl SpeechSegment {
    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }

    pub fn finalized(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }
}

/// A recognition result batch. Segments before `result_index` were already
/// delivered in an earlier event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpeechResultEvent {
    pub result_index: usize,
    pub results: Vec<SpeechSegment>,
}

/// Speech-to-text capability provided by the host environment.
///
/// Results, errors and the end of a session are delivered back to the page
/// through its `on_speech_*` handlers.
pub trait SpeechRecognizer: Send + Sync {
    fn start(&self, config: &RecognizerConfig) -> Result<(), VoiceError>;

    /// Asks the host to end the session; the end event still follows.
    fn stop(&self);
}
