//! 应用层 - 命令（写操作）
//!
//! 入站对话事件即命令：[`crate::domain::VoiceEvent`] 经分派表交给对应处理器，
//! 只有捕获路径会写入 UtteranceStore

pub mod handlers;

pub use handlers::{
    CaptureSpeechHandler, FallbackHandler, LaunchRequestHandler, VoiceEventDispatcher,
    APOLOGY_TEXT, CAPTURE_CARD_TITLE, GREETING_CARD_TITLE, GREETING_TEXT,
};
