//! Utterance Store Port - 最近一次语音的单槽存储
//!
//! 读写能力拆成两个 trait：事件前端只拿到 [`UtteranceWriter`]，
//! 查询服务只拿到 [`UtteranceReader`]，二者指向同一个存储实例。
//! 具体实现在 infrastructure/memory 层

use crate::domain::Utterance;

/// 写端口，仅供语音捕获路径使用
pub trait UtteranceWriter: Send + Sync {
    /// 无条件替换当前值，立即返回
    fn set(&self, value: Utterance);
}

/// 读端口，仅供查询服务使用
pub trait UtteranceReader: Send + Sync {
    /// 返回当前值（完整值，绝不会是写了一半的）
    fn get(&self) -> Utterance;
}
