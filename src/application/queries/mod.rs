//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：读取最近一次捕获的语音

mod speech_queries;

pub mod handlers;

pub use speech_queries::*;
