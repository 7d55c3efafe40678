//! Query RPC Wire Types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 唯一的服务名
pub const GET_SPEECH_SERVICE: &str = "get_speech";

// JSON-RPC 风格错误码
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// 一行请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// 原样回显到响应中
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub service: String,
    /// 请求体；get_speech 没有字段，缺省或 `{}` 均可
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Value>,
}

impl RpcRequest {
    pub fn new(id: impl Into<Value>, service: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            service: service.into(),
            request: Some(Value::Object(Default::default())),
        }
    }
}

/// 一行响应，`response` 与 `error` 二选一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
}

impl RpcResponse {
    pub fn success(id: Value, response: Value) -> Self {
        Self {
            id,
            response: Some(response),
            error: None,
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            response: None,
            error: Some(RpcErrorBody {
                code,
                message: message.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_defaults() {
        let req: RpcRequest = serde_json::from_str(r#"{"service":"get_speech"}"#).unwrap();
        assert_eq!(req.service, GET_SPEECH_SERVICE);
        assert!(req.id.is_none());
        assert!(req.request.is_none());
    }

    #[test]
    fn test_error_response_omits_result() {
        let resp = RpcResponse::error(json!(7), METHOD_NOT_FOUND, "nope");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({"id": 7, "error": {"code": -32601, "message": "nope"}})
        );
    }
}
