//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（UtteranceReader / UtteranceWriter、事件处理器）
//! - commands: 对话事件分派及处理器（写路径）
//! - queries: 语音查询及处理器（读路径）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CaptureSpeechHandler, FallbackHandler, LaunchRequestHandler, VoiceEventDispatcher,
    APOLOGY_TEXT, CAPTURE_CARD_TITLE, GREETING_CARD_TITLE, GREETING_TEXT,
};

pub use error::ApplicationError;

pub use ports::{UtteranceReader, UtteranceWriter, VoiceEventHandlerPort};

pub use queries::{handlers::GetSpeechHandler, GetSpeech, GetSpeechResponse};
