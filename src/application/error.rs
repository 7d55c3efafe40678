//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::VoiceEventKind;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 事件被分派到了不匹配的处理器
    #[error("Handler for {expected} received a {actual} event")]
    MisroutedEvent {
        expected: VoiceEventKind,
        actual: VoiceEventKind,
    },

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    pub fn misrouted(expected: VoiceEventKind, actual: VoiceEventKind) -> Self {
        Self::MisroutedEvent { expected, actual }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}
