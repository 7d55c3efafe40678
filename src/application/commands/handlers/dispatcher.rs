//! Voice Event Dispatcher
//!
//! 事件种类在入口处确定后查表分派；查不到处理器或处理器出错时
//! 统一走 [`FallbackHandler`]，因此 `dispatch` 总能产出一个响应

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{UtteranceWriter, VoiceEventHandlerPort};
use crate::domain::{SpokenResponse, VoiceEvent, VoiceEventKind};

use super::conversation_handlers::{CaptureSpeechHandler, FallbackHandler, LaunchRequestHandler};

/// 对话事件分派器
pub struct VoiceEventDispatcher {
    handlers: HashMap<VoiceEventKind, Arc<dyn VoiceEventHandlerPort>>,
    fallback: FallbackHandler,
}

impl VoiceEventDispatcher {
    /// 空分派表，所有事件都会走兜底
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: FallbackHandler,
        }
    }

    /// 标准技能：LaunchRequest + CaptureSpeechIntent
    pub fn new(writer: Arc<dyn UtteranceWriter>) -> Self {
        Self::empty()
            .register(Arc::new(LaunchRequestHandler))
            .register(Arc::new(CaptureSpeechHandler::new(writer)))
    }

    /// 注册处理器；同一种类重复注册时后者覆盖前者
    pub fn register(mut self, handler: Arc<dyn VoiceEventHandlerPort>) -> Self {
        self.handlers.insert(handler.kind(), handler);
        self
    }

    pub async fn dispatch(&self, event: &VoiceEvent) -> SpokenResponse {
        let kind = event.kind();

        let Some(handler) = self.handlers.get(&kind) else {
            if let VoiceEvent::Other { description } = event {
                tracing::warn!(description = %description, "Unrecognized voice event");
            } else {
                tracing::warn!(kind = %kind, "No handler registered for event kind");
            }
            return self.fallback.handle(event);
        };

        match handler.handle(event).await {
            Ok(response) => {
                tracing::debug!(kind = %kind, "Voice event handled");
                response
            }
            Err(e) => {
                tracing::error!(kind = %kind, error = %e, "Voice event handler failed");
                self.fallback.handle(event)
            }
        }
    }
}
