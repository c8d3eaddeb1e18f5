use super::recognizer::SpeechResultEvent;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum VoiceState {
    #[default]
    Idle,
    Listening {
        /// Finalized transcript collected so far in this session
        final_text: String,
    },
}

/// Single recognition session. At most one is listening at a time.
#[derive(Clone, Debug, Default)]
pub struct VoiceSession {
    state: VoiceState,
}

impl VoiceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &VoiceState {
        &self.state
    }

    pub fn is_listening(&self) -> bool {
        matches!(self.state, VoiceState::Listening { .. })
    }

    /// Idle -> Listening. Returns `false` (and changes nothing) when already listening.
    pub fn begin(&mut self) -> bool {
        if self.is_listening() {
            return false;
        }
        self.state = VoiceState::Listening {
            final_text: String::new(),
        };
        true
    }

    /// Whether a stop request should be forwarded to the recognizer.
    /// The state only changes once the session actually ends.
    pub fn request_stop(&self) -> bool {
        self.is_listening()
    }

    /// Folds a result batch into the transcript and returns the text to show.
    /// Ignored while idle.
    pub fn apply(&mut self, event: &SpeechResultEvent) -> Option<String> {
        let VoiceState::Listening { final_text } = &mut self.state else {
            return None;
        };

        let mut interim = String::new();
        for segment in event.results.iter().skip(event.result_index) {
            if segment.is_final {
                final_text.push_str(&segment.transcript);
            } else {
                interim.push_str(&segment.transcript);
            }
        }

        let shown = if interim.is_empty() {
            final_text.clone()
        } else {
            format!("{} {}", final_text, interim)
        };
        Some(shown.trim().to_string())
    }

    /// Listening -> Idle. Returns the finalized transcript if a session was open.
    pub fn finish(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            VoiceState::Listening { final_text } => Some(final_text),
            VoiceState::Idle => None,
        }
    }
}
