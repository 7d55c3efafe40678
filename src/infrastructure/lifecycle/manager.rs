//! Process Lifecycle Manager
//!
//! 状态机: `Created → Running → ShuttingDown → Stopped`

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::application::{GetSpeechHandler, UtteranceReader};
use crate::infrastructure::http::HttpServer;
use crate::infrastructure::rpc::{QueryServer, RpcError, RpcServerConfig};

/// 生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Running,
    ShuttingDown,
    Stopped,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecycleState::Created => "created",
            LifecycleState::Running => "running",
            LifecycleState::ShuttingDown => "shutting_down",
            LifecycleState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        state: LifecycleState,
        action: &'static str,
    },

    #[error("Query service failed to start: {0}")]
    QueryService(#[from] RpcError),

    #[error("Webhook server failed: {0}")]
    Webhook(#[from] std::io::Error),
}

/// 进程生命周期管理器
pub struct ProcessLifecycleManager {
    state: LifecycleState,
    rpc_config: RpcServerConfig,
    shutdown_timeout: Duration,
    reader: Arc<dyn UtteranceReader>,
    cancel: CancellationToken,
    background: Option<JoinHandle<()>>,
    rpc_addr: Option<SocketAddr>,
}

impl ProcessLifecycleManager {
    pub fn new(
        rpc_config: RpcServerConfig,
        shutdown_timeout: Duration,
        reader: Arc<dyn UtteranceReader>,
    ) -> Self {
        Self {
            state: LifecycleState::Created,
            rpc_config,
            shutdown_timeout,
            reader,
            cancel: CancellationToken::new(),
            background: None,
            rpc_addr: None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// 查询服务实际监听的地址（`start` 之后可用）
    pub fn rpc_addr(&self) -> Option<SocketAddr> {
        self.rpc_addr
    }

    /// 触发该 token 即开始关闭；可交给信号监听 task
    pub fn shutdown_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// `Created → Running`：绑定查询服务并在后台 task 上启动，不等待其结束
    ///
    /// 绑定失败时返回错误，状态保持 `Created`
    pub async fn start(&mut self) -> Result<SocketAddr, LifecycleError> {
        if self.state != LifecycleState::Created {
            return Err(LifecycleError::InvalidTransition {
                state: self.state,
                action: "start",
            });
        }

        let handler = GetSpeechHandler::new(self.reader.clone());
        let server = QueryServer::bind(&self.rpc_config, handler).await?;
        let addr = server.local_addr()?;

        self.background = Some(tokio::spawn(server.run(self.cancel.child_token())));
        self.rpc_addr = Some(addr);
        self.state = LifecycleState::Running;

        tracing::info!(rpc_addr = %addr, "Lifecycle running");
        Ok(addr)
    }

    /// 前台运行 webhook 直到关闭 token 被触发，随后关闭后台查询服务
    pub async fn run_foreground(&mut self, http: HttpServer) -> Result<(), LifecycleError> {
        self.ensure_running("run foreground")?;

        let listener = match http.bind().await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!(error = %e, "Failed to bind skill webhook");
                self.shutdown().await;
                return Err(e.into());
            }
        };

        self.serve_foreground(http, listener).await
    }

    /// 同 [`Self::run_foreground`]，使用调用方已绑定的 listener
    pub async fn serve_foreground(
        &mut self,
        http: HttpServer,
        listener: TcpListener,
    ) -> Result<(), LifecycleError> {
        self.ensure_running("serve foreground")?;

        let result = http
            .serve(listener, self.cancel.clone().cancelled_owned())
            .await;

        self.shutdown().await;
        result.map_err(LifecycleError::from)
    }

    /// `Running → ShuttingDown → Stopped`
    ///
    /// 后台 task 在 `shutdown_timeout` 内未结束则被 abort。可重复调用
    pub async fn shutdown(&mut self) {
        match self.state {
            LifecycleState::Created => {
                self.state = LifecycleState::Stopped;
                return;
            }
            LifecycleState::ShuttingDown | LifecycleState::Stopped => return,
            LifecycleState::Running => {}
        }

        self.state = LifecycleState::ShuttingDown;
        tracing::info!("Lifecycle shutting down");
        self.cancel.cancel();

        if let Some(handle) = self.background.take() {
            let abort = handle.abort_handle();
            match tokio::time::timeout(self.shutdown_timeout, handle).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::error!(error = %e, "Query service task failed");
                }
                Err(_) => {
                    tracing::warn!(
                        timeout_secs = self.shutdown_timeout.as_secs_f64(),
                        "Query service did not stop in time, aborting"
                    );
                    abort.abort();
                }
            }
        }

        self.state = LifecycleState::Stopped;
        tracing::info!("Lifecycle stopped");
    }

    fn ensure_running(&self, action: &'static str) -> Result<(), LifecycleError> {
        if self.state == LifecycleState::Running {
            Ok(())
        } else {
            Err(LifecycleError::InvalidTransition {
                state: self.state,
                action,
            })
        }
    }
}
