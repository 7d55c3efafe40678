//! Query RPC Layer - get_speech 查询服务
//!
//! TCP + 换行分隔 JSON，一个连接上可连续发送多个请求：
//! - 请求: `{"id": 1, "service": "get_speech", "request": {}}`
//! - 响应: `{"id": 1, "response": {"captured_speech": "..."}}`
//! - 错误: `{"id": 1, "error": {"code": -32601, "message": "..."}}`

mod client;
mod error;
mod protocol;
mod server;

pub use client::QueryClient;
pub use error::RpcError;
pub use protocol::{
    RpcErrorBody, RpcRequest, RpcResponse, GET_SPEECH_SERVICE, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
pub use server::{QueryServer, RpcServerConfig};
