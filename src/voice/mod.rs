//! Speech input: host recognizer capability plus the session state machine.

pub mod recognizer;
pub mod session;

pub use recognizer::{
    RecognizerConfig, SpeechRecognizer, SpeechResultEvent, SpeechSegment, VoiceError,
};
pub use session::{VoiceSession, VoiceState};

pub const VOICE_IDLE_LABEL: &str = "🎙️ 음성 입력";
pub const VOICE_LISTENING_LABEL: &str = "⏹️ 종료";

pub const STATUS_UNSUPPORTED: &str = "이 브라우저는 음성인식을 지원하지 않습니다.";
pub const STATUS_LISTENING: &str = "듣는 중... 말한 뒤 잠시 기다리세요.";
pub const STATUS_RECOGNIZED: &str = "인식 완료. 추천 가져오는 중…";
pub const STATUS_NOTHING_HEARD: &str = "아무 말도 인식되지 않았어요.";

/// Status line for a recognizer error code.
pub fn error_status(code: Option<&str>) -> String {
    let code = code.filter(|c| !c.is_empty()).unwrap_or("unknown");
    format!("음성 오류: {}", code)
}
