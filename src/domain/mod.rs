//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Utterance Context: 最近一次捕获的语音文本及其哨兵值
//! - Conversation Context: 入站对话事件（封闭的 tagged union）与语音响应

pub mod conversation;
pub mod utterance;

pub use conversation::{SpokenResponse, VoiceEvent, VoiceEventKind};
pub use utterance::{Utterance, UtteranceError, NOTHING_CAPTURED, NOT_YET_CAPTURED};
