//! Conversation Context - Events

use std::fmt;

/// 事件种类（分派表的 key）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceEventKind {
    SessionStart,
    Capture,
    Other,
}

impl VoiceEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceEventKind::SessionStart => "session_start",
            VoiceEventKind::Capture => "capture",
            VoiceEventKind::Other => "other",
        }
    }
}

impl fmt::Display for VoiceEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已分类的入站对话事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    /// 用户打开技能
    SessionStart,
    /// 捕获语音，`speech` 为可选的 slot 值
    Capture { speech: Option<String> },
    /// 任何无法识别的事件，`description` 仅用于日志
    Other { description: String },
}

impl VoiceEvent {
    pub fn other(description: impl Into<String>) -> Self {
        Self::Other {
            description: description.into(),
        }
    }

    pub fn kind(&self) -> VoiceEventKind {
        match self {
            VoiceEvent::SessionStart => VoiceEventKind::SessionStart,
            VoiceEvent::Capture { .. } => VoiceEventKind::Capture,
            VoiceEvent::Other { .. } => VoiceEventKind::Other,
        }
    }
}
