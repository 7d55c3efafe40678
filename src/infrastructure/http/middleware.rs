//! HTTP Middleware
//!
//! 4xx / 5xx 状态码日志。skill webhook 本身总是返回 200，
//! 这里记录的是路由不存在、方法不匹配、请求体超限等传输层问题

use std::time::{Duration, Instant};

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = elapsed_millis(started.elapsed());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms = elapsed_ms,
            "Webhook server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms = elapsed_ms,
            "Webhook client error"
        );
    }

    response
}

/// 毫秒数，超出 u64 时饱和
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
