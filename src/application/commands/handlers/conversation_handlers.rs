//! Conversation Handlers - 每种事件一个处理器

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::error::ApplicationError;
use crate::application::ports::{UtteranceWriter, VoiceEventHandlerPort};
use crate::domain::{SpokenResponse, Utterance, VoiceEvent, VoiceEventKind};

pub const GREETING_TEXT: &str = "Hi, how can we help?";
pub const GREETING_CARD_TITLE: &str = "Hello World";
pub const CAPTURE_CARD_TITLE: &str = "Speech Capture";
pub const APOLOGY_TEXT: &str = "Sorry, I couldn't understand that. Can you repeat?";

/// LaunchRequest Handler - 固定问候语，不触碰存储
pub struct LaunchRequestHandler;

#[async_trait]
impl VoiceEventHandlerPort for LaunchRequestHandler {
    fn kind(&self) -> VoiceEventKind {
        VoiceEventKind::SessionStart
    }

    async fn handle(&self, event: &VoiceEvent) -> Result<SpokenResponse, ApplicationError> {
        if event.kind() != VoiceEventKind::SessionStart {
            return Err(ApplicationError::misrouted(self.kind(), event.kind()));
        }

        Ok(SpokenResponse::speak(GREETING_TEXT).with_card(GREETING_CARD_TITLE, GREETING_TEXT))
    }
}

/// CaptureSpeech Handler - 写入最近一次语音并回显
pub struct CaptureSpeechHandler {
    writer: Arc<dyn UtteranceWriter>,
}

impl CaptureSpeechHandler {
    pub fn new(writer: Arc<dyn UtteranceWriter>) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl VoiceEventHandlerPort for CaptureSpeechHandler {
    fn kind(&self) -> VoiceEventKind {
        VoiceEventKind::Capture
    }

    async fn handle(&self, event: &VoiceEvent) -> Result<SpokenResponse, ApplicationError> {
        // 先校验再写入，错误分派的事件不会产生任何副作用
        let speech = match event {
            VoiceEvent::Capture { speech } => speech.as_deref(),
            other => return Err(ApplicationError::misrouted(self.kind(), other.kind())),
        };

        let captured = Utterance::from_slot(speech);
        self.writer.set(captured.clone());

        tracing::info!(captured_speech = %captured, "Captured speech");

        let text = format!("You said: {}", captured);
        Ok(SpokenResponse::speak(text.clone()).with_card(CAPTURE_CARD_TITLE, text))
    }
}

/// 兜底处理器
///
/// 分派表的默认分支：未识别事件、未注册的种类、以及任何处理器返回的错误
/// 都落到这里。返回值不是 `Result`，本身不会失败
pub struct FallbackHandler;

impl FallbackHandler {
    pub fn handle(&self, event: &VoiceEvent) -> SpokenResponse {
        tracing::debug!(kind = %event.kind(), "Fallback response");
        SpokenResponse::speak(APOLOGY_TEXT).with_reprompt(APOLOGY_TEXT)
    }
}
