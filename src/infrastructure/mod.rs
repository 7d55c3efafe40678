//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现以及两个执行上下文的传输层

pub mod http;
pub mod lifecycle;
pub mod memory;
pub mod rpc;

pub use http::{AppState, HttpServer};
pub use lifecycle::{LifecycleError, LifecycleState, ProcessLifecycleManager};
pub use memory::InMemoryUtteranceStore;
pub use rpc::{QueryClient, QueryServer};
