//! Lifecycle Layer - 进程生命周期
//!
//! 后台执行上下文运行 get_speech 查询服务，前台执行上下文运行 skill webhook，
//! 二者只通过 UtteranceStore 通信，关闭时互不阻塞

mod manager;
mod signal;

pub use manager::{LifecycleError, LifecycleState, ProcessLifecycleManager};
pub use signal::shutdown_signal;
