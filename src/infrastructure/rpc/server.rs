//! Query RPC Server
//!
//! 后台 accept loop：每个连接一个 task，统一放进 `JoinSet` 追踪。
//! 取消后不再 accept，已读入的请求会写完响应再关闭连接

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::error::RpcError;
use super::protocol::{
    RpcRequest, RpcResponse, GET_SPEECH_SERVICE, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::application::{GetSpeech, GetSpeechHandler};

/// 查询服务配置
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
    /// 单行请求的最大字节数
    pub max_request_bytes: usize,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7400,
            max_request_bytes: 64 * 1024,
        }
    }
}

impl RpcServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// get_speech 查询服务
///
/// `bind` 与 `run` 分开：监听失败在启动阶段同步暴露，而不是在后台 task 里静默退出
pub struct QueryServer {
    listener: TcpListener,
    handler: Arc<GetSpeechHandler>,
    max_request_bytes: usize,
}

impl QueryServer {
    pub async fn bind(config: &RpcServerConfig, handler: GetSpeechHandler) -> Result<Self, RpcError> {
        let addr = config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| RpcError::Bind {
                addr: addr.clone(),
                source,
            })?;

        tracing::info!(addr = %addr, service = GET_SPEECH_SERVICE, "Query service listening");

        Ok(Self {
            listener,
            handler: Arc::new(handler),
            max_request_bytes: config.max_request_bytes,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, RpcError> {
        Ok(self.listener.local_addr()?)
    }

    /// 运行 accept loop 直到 `cancel` 被触发，然后等待所有连接结束
    pub async fn run(self, cancel: CancellationToken) {
        let mut connections = JoinSet::new();

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Query service stops accepting connections");
                    break;
                }
                result = self.listener.accept() => {
                    match result {
                        Ok((stream, peer)) => {
                            tracing::debug!(peer = %peer, "Query connection accepted");
                            let handler = self.handler.clone();
                            let cancel = cancel.child_token();
                            let max_request_bytes = self.max_request_bytes;
                            connections.spawn(async move {
                                if let Err(e) =
                                    handle_connection(stream, handler, cancel, max_request_bytes).await
                                {
                                    tracing::debug!(peer = %peer, error = %e, "Query connection ended with error");
                                }
                            });
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Failed to accept query connection");
                        }
                    }
                }
                Some(joined) = connections.join_next(), if !connections.is_empty() => {
                    if let Err(e) = joined {
                        tracing::error!(error = %e, "Query connection task failed");
                    }
                }
            }
        }

        let in_flight = connections.len();
        if in_flight > 0 {
            tracing::info!(in_flight = in_flight, "Waiting for query connections to finish");
        }
        while let Some(joined) = connections.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Query connection task failed");
            }
        }

        tracing::info!("Query service stopped");
    }
}

/// 处理单个连接：逐行读取请求并逐行写回响应
async fn handle_connection(
    stream: TcpStream,
    handler: Arc<GetSpeechHandler>,
    cancel: CancellationToken,
    max_request_bytes: usize,
) -> Result<(), RpcError> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();

    loop {
        line.clear();

        let mut limited = (&mut reader).take(max_request_bytes as u64 + 1);

        // 读分支优先：已到达的请求先于取消被处理，只有空闲等待时才响应取消
        let read = tokio::select! {
            biased;
            read = limited.read_until(b'\n', &mut line) => read?,
            _ = cancel.cancelled() => break,
        };

        if read == 0 {
            break;
        }

        if line.len() > max_request_bytes && line.last() != Some(&b'\n') {
            let response = RpcResponse::error(Value::Null, INVALID_REQUEST, "Request too large");
            write_response(&mut writer, &response).await?;
            tracing::warn!(max_request_bytes = max_request_bytes, "Oversized query request, closing connection");
            break;
        }

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let response = process_request(&line, &handler);
        write_response(&mut writer, &response).await?;
    }

    Ok(())
}

/// 解析并应答一条请求；任何错误都被转换成错误响应
fn process_request(line: &[u8], handler: &GetSpeechHandler) -> RpcResponse {
    let request: RpcRequest = match serde_json::from_slice(line) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!(error = %e, "Unparseable query request");
            return RpcResponse::error(Value::Null, PARSE_ERROR, format!("Parse error: {}", e));
        }
    };

    let id = request.id.unwrap_or(Value::Null);

    if request.service != GET_SPEECH_SERVICE {
        tracing::warn!(service = %request.service, "Unknown query service");
        return RpcResponse::error(
            id,
            METHOD_NOT_FOUND,
            format!("Service not found: {}", request.service),
        );
    }

    match request.request {
        None | Some(Value::Null) | Some(Value::Object(_)) => {}
        Some(_) => {
            return RpcResponse::error(id, INVALID_PARAMS, "Request body must be an object");
        }
    }

    let response = handler.handle(GetSpeech {});
    match serde_json::to_value(&response) {
        Ok(value) => RpcResponse::success(id, value),
        Err(e) => RpcResponse::error(id, INTERNAL_ERROR, format!("Encode error: {}", e)),
    }
}

async fn write_response<W>(writer: &mut W, response: &RpcResponse) -> Result<(), RpcError>
where
    W: AsyncWrite + Unpin,
{
    let mut bytes = serde_json::to_vec(response)?;
    bytes.push(b'\n');
    writer.write_all(&bytes).await?;
    writer.flush().await?;
    Ok(())
}
