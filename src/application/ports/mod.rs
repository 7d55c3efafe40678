//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod event_handler;
mod utterance_store;

pub use event_handler::VoiceEventHandlerPort;
pub use utterance_store::{UtteranceReader, UtteranceWriter};
