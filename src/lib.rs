//! Voxbridge - 语音 skill 与查询服务之间的桥
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Utterance Context: 最近一次捕获的语音及哨兵值
//! - Conversation Context: 对话事件与语音响应
//!
//! 应用层 (application/):
//! - Ports: UtteranceReader / UtteranceWriter, VoiceEventHandlerPort
//! - Commands: 对话事件分派器及各事件处理器
//! - Queries: get_speech 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: skill webhook（前台执行上下文）
//! - RPC: get_speech 查询服务（后台执行上下文）
//! - Memory: 单槽 UtteranceStore
//! - Lifecycle: 两个执行上下文的启动与关闭

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
