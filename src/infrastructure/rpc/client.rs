//! Query RPC Client
//!
//! 供其它进程（以及测试）调用 get_speech

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};

use super::error::RpcError;
use super::protocol::{RpcRequest, RpcResponse, GET_SPEECH_SERVICE};
use crate::application::GetSpeechResponse;

/// 长连接查询客户端，请求按顺序发送、按顺序应答
pub struct QueryClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
    next_id: u64,
}

impl QueryClient {
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self, RpcError> {
        let stream = TcpStream::connect(addr).await?;
        let (reader, writer) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(reader),
            writer,
            next_id: 1,
        })
    }

    /// 读取最近一次捕获的语音
    pub async fn get_speech(&mut self) -> Result<GetSpeechResponse, RpcError> {
        let response = self.call(GET_SPEECH_SERVICE).await?;
        let body = response
            .response
            .ok_or_else(|| RpcError::MalformedResponse("missing response body".to_string()))?;
        Ok(serde_json::from_value(body)?)
    }

    /// 发送一条请求并等待对应响应；服务端返回的错误转换为 [`RpcError::Remote`]
    pub async fn call(&mut self, service: &str) -> Result<RpcResponse, RpcError> {
        let id = self.next_id;
        self.next_id += 1;

        let mut bytes = serde_json::to_vec(&RpcRequest::new(id, service))?;
        bytes.push(b'\n');
        self.writer.write_all(&bytes).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(RpcError::ConnectionClosed);
        }

        let response: RpcResponse = serde_json::from_str(&line)?;
        if let Some(error) = response.error {
            return Err(RpcError::Remote {
                code: error.code,
                message: error.message,
            });
        }
        if response.id != Value::from(id) {
            return Err(RpcError::MalformedResponse(format!(
                "expected id {}, got {}",
                id, response.id
            )));
        }

        Ok(response)
    }
}
