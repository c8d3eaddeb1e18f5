//! Page controller.
//!
//! Owns what the page shows (input field, voice button, status line and the
//! results container) and wires user actions to the recommender:
//!
//! ```text
//! [submit / end of speech] → [Recommender] → [ResultsView] → container
//! ```

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::recommendations::Recommender;
use crate::render::{PageView, ResultsView};
use crate::voice::{
    self, RecognizerConfig, SpeechRecognizer, SpeechResultEvent, VoiceError, VoiceSession,
    VOICE_IDLE_LABEL, VOICE_LISTENING_LABEL,
};

pub struct RecommendPage {
    recommender: Arc<dyn Recommender>,
    /// `None` when the host has no speech recognition
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    recognizer_config: RecognizerConfig,
    view: Mutex<PageView>,
    voice: Mutex<VoiceSession>,
    /// Bumped by every submission; only the newest one may write results
    generation: AtomicU64,
}

impl RecommendPage {
    pub fn new(
        recommender: Arc<dyn Recommender>,
        recognizer: Option<Arc<dyn SpeechRecognizer>>,
        recognizer_config: RecognizerConfig,
    ) -> Self {
        Self {
            recommender,
            recognizer,
            recognizer_config,
            view: Mutex::new(PageView::default()),
            voice: Mutex::new(VoiceSession::new()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> PageView {
        self.view.lock().clone()
    }

    pub fn input(&self) -> String {
        self.view.lock().input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.view.lock().input = text.into();
    }

    pub fn status(&self) -> String {
        self.view.lock().status.clone()
    }

    pub fn results(&self) -> ResultsView {
        self.view.lock().results.clone()
    }

    pub fn is_listening(&self) -> bool {
        self.voice.lock().is_listening()
    }

    /// Submit button: blank input shows the prompt and never dispatches.
    pub async fn submit(&self) {
        let text = self.view.lock().input.trim().to_string();
        if text.is_empty() {
            let mut view = self.view.lock();
            self.generation.fetch_add(1, Ordering::SeqCst);
            view.results = ResultsView::Prompt;
            return;
        }
        self.ask(&text).await;
    }

    /// Sends one request and swaps the results container to its outcome.
    pub async fn ask(&self, text: &str) {
        // Generation claim and Loading share one view lock.
        let generation = {
            let mut view = self.view.lock();
            view.results = ResultsView::Loading;
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let outcome = self.recommender.recommend(text).await;
        if let Err(e) = &outcome {
            log::error!("Recommendation failed: {}", e);
        }

        let mut view = self.view.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("Dropping response for superseded request #{}", generation);
            return;
        }
        view.results = ResultsView::from_outcome(&outcome);
    }

    /// Voice button: starts a session when idle, asks it to stop otherwise.
    pub fn toggle_voice(&self) {
        if self.is_listening() {
            self.stop_voice();
        } else {
            self.start_voice();
        }
    }

    pub fn start_voice(&self) {
        let Some(recognizer) = &self.recognizer else {
            log::warn!("{}", VoiceError::Unsupported);
            self.view.lock().status = voice::STATUS_UNSUPPORTED.to_string();
            return;
        };

        let began = self.voice.lock().begin();
        if !began {
            return;
        }

        {
            let mut view = self.view.lock();
            view.voice_label = VOICE_LISTENING_LABEL.to_string();
            view.status = voice::STATUS_LISTENING.to_string();
        }

        log::info!(
            "Starting speech recognition ({})",
            self.recognizer_config.lang
        );
        if let Err(e) = recognizer.start(&self.recognizer_config) {
            log::error!("Speech recognition failed to start: {}", e);
            self.voice.lock().finish();
            let mut view = self.view.lock();
            view.voice_label = VOICE_IDLE_LABEL.to_string();
            view.status = voice::error_status(Some(&e.to_string()));
        }
    }

    pub fn stop_voice(&self) {
        let should_stop = self.voice.lock().request_stop();
        if !should_stop {
            return;
        }
        if let Some(recognizer) = &self.recognizer {
            recognizer.stop();
        }
    }

    pub fn on_speech_result(&self, event: &SpeechResultEvent) {
        let shown = self.voice.lock().apply(event);
        if let Some(text) = shown {
            self.view.lock().input = text;
        }
    }

    pub fn on_speech_error(&self, code: Option<&str>) {
        log::error!("Speech error: {}", code.unwrap_or("unknown"));
        self.view.lock().status = voice::error_status(code);
    }

    /// End of a session: dispatches whatever ended up in the input field.
    pub async fn on_speech_end(&self) {
        let finished = self.voice.lock().finish();
        if finished.is_none() {
            return;
        }

        let text = {
            let mut view = self.view.lock();
            view.voice_label = VOICE_IDLE_LABEL.to_string();
            let text = view.input.trim().to_string();
            view.status = if text.is_empty() {
                voice::STATUS_NOTHING_HEARD.to_string()
            } else {
                voice::STATUS_RECOGNIZED.to_string()
            };
            text
        };

        if !text.is_empty() {
            self.ask(&text).await;
        }
    }
}
