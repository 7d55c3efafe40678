//! Conversation Context
//!
//! 入站对话事件在入口处被一次性分类为封闭的 [`VoiceEvent`]，
//! 每个事件处理结果都是一个 [`SpokenResponse`]

mod event;
mod response;

pub use event::{VoiceEvent, VoiceEventKind};
pub use response::SpokenResponse;
