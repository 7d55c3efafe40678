//! Voice Event Handler Port - 单一事件种类的处理器

use async_trait::async_trait;

use crate::application::error::ApplicationError;
use crate::domain::{SpokenResponse, VoiceEvent, VoiceEventKind};

/// 某一种 [`VoiceEventKind`] 的处理器
///
/// 返回 `Err` 时由分派器转交兜底处理器，错误不会离开分派路径
#[async_trait]
pub trait VoiceEventHandlerPort: Send + Sync {
    /// 该处理器在分派表中注册的 key
    fn kind(&self) -> VoiceEventKind;

    async fn handle(&self, event: &VoiceEvent) -> Result<SpokenResponse, ApplicationError>;
}
