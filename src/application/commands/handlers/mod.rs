//! Command Handlers - 对话事件处理器

mod conversation_handlers;
mod dispatcher;

pub use conversation_handlers::{
    CaptureSpeechHandler, FallbackHandler, LaunchRequestHandler, APOLOGY_TEXT,
    CAPTURE_CARD_TITLE, GREETING_CARD_TITLE, GREETING_TEXT,
};
pub use dispatcher::VoiceEventDispatcher;
