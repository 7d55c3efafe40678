//! Speech Queries - 语音查询

use serde::{Deserialize, Serialize};

/// 获取最近一次语音（无字段）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetSpeech {}

/// 获取最近一次语音的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSpeechResponse {
    pub captured_speech: String,
}
