//! Query RPC Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Failed to bind query service on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("Remote error {code}: {message}")]
    Remote { code: i64, message: String },

    #[error("Connection closed by peer")]
    ConnectionClosed,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
