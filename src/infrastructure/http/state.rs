//! Application State
//!
//! 事件前端只持有分派器（内部仅有写端口），从不持有读端口

use crate::application::VoiceEventDispatcher;

/// 应用状态
pub struct AppState {
    pub dispatcher: VoiceEventDispatcher,
    /// 注册的 skill 标识，只透传和记录，不做校验
    pub skill_id: String,
}

impl AppState {
    pub fn new(dispatcher: VoiceEventDispatcher, skill_id: impl Into<String>) -> Self {
        Self {
            dispatcher,
            skill_id: skill_id.into(),
        }
    }
}
