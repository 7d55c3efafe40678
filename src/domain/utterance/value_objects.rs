//! Utterance Context - Value Objects

use std::fmt;
use std::sync::Arc;

use super::UtteranceError;

/// 进程启动时的哨兵值：尚未捕获过任何语音
pub const NOT_YET_CAPTURED: &str = "No speech captured yet.";

/// 捕获事件未携带 `speech` slot（或为空）时写入的哨兵值
pub const NOTHING_CAPTURED: &str = "No speech captured.";

/// 捕获到的语音文本
///
/// 内部使用 `Arc<str>`，clone 只增加引用计数，读写临界区内不会复制字符串。
/// 值总是完整且非空的。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Utterance(Arc<str>);

impl Utterance {
    pub fn new(text: impl Into<String>) -> Result<Self, UtteranceError> {
        let text = text.into();
        if text.is_empty() {
            return Err(UtteranceError::Empty);
        }
        Ok(Self(Arc::from(text)))
    }

    /// 启动哨兵
    pub fn not_yet_captured() -> Self {
        Self(Arc::from(NOT_YET_CAPTURED))
    }

    /// 显式捕获到"空"时的哨兵
    pub fn nothing_captured() -> Self {
        Self(Arc::from(NOTHING_CAPTURED))
    }

    /// 从 slot 值构造：缺失或空字符串时退化为 [`NOTHING_CAPTURED`]
    pub fn from_slot(value: Option<&str>) -> Self {
        value
            .and_then(|v| Self::new(v).ok())
            .unwrap_or_else(Self::nothing_captured)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_sentinel(&self) -> bool {
        self.as_str() == NOT_YET_CAPTURED || self.as_str() == NOTHING_CAPTURED
    }
}

impl Default for Utterance {
    fn default() -> Self {
        Self::not_yet_captured()
    }
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Utterance> for String {
    fn from(utterance: Utterance) -> Self {
        utterance.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(Utterance::new(""), Err(UtteranceError::Empty));
    }

    #[test]
    fn test_text_kept_verbatim() {
        let u = Utterance::new("  turn on the light ").unwrap();
        assert_eq!(u.as_str(), "  turn on the light ");
        assert!(!u.is_sentinel());
    }

    #[test]
    fn test_from_slot() {
        assert_eq!(Utterance::from_slot(Some("hello")).as_str(), "hello");
        assert_eq!(Utterance::from_slot(Some("")).as_str(), NOTHING_CAPTURED);
        assert_eq!(Utterance::from_slot(None).as_str(), NOTHING_CAPTURED);
    }

    #[test]
    fn test_sentinels_are_distinct() {
        assert_ne!(Utterance::not_yet_captured(), Utterance::nothing_captured());
        assert_eq!(Utterance::default().as_str(), NOT_YET_CAPTURED);
        assert!(Utterance::default().is_sentinel());
    }
}
