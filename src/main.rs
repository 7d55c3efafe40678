//! Voxbridge
//!
//! 前台: skill webhook 接收对话事件并写入 UtteranceStore
//! 后台: get_speech 查询服务读取 UtteranceStore

use voxbridge::application::VoiceEventDispatcher;
use voxbridge::config::{load_config, print_config};
use voxbridge::infrastructure::http::{AppState, HttpServer, ServerConfig};
use voxbridge::infrastructure::lifecycle::{shutdown_signal, ProcessLifecycleManager};
use voxbridge::infrastructure::memory::InMemoryUtteranceStore;
use voxbridge::infrastructure::rpc::RpcServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},voxbridge={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Voxbridge - voice skill / speech query bridge");
    print_config(&config);

    // 进程内唯一的共享状态，两条路径各持有一个引用
    let store = InMemoryUtteranceStore::new().arc();

    // 后台: get_speech 查询服务
    let rpc_config = RpcServerConfig {
        host: config.rpc.host.clone(),
        port: config.rpc.port,
        max_request_bytes: config.rpc.max_request_bytes,
    };
    let mut lifecycle =
        ProcessLifecycleManager::new(rpc_config, config.rpc.shutdown_timeout(), store.clone());
    lifecycle.start().await?;

    // 终止信号 -> 关闭 token
    let shutdown = lifecycle.shutdown_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Received shutdown signal");
        shutdown.cancel();
    });

    // 前台: skill webhook
    let state = AppState::new(VoiceEventDispatcher::new(store), config.skill.skill_id.clone());
    let server = HttpServer::new(
        ServerConfig::new(&config.server.host, config.server.port),
        state,
    );

    lifecycle.run_foreground(server).await?;

    tracing::info!("Shutdown complete");

    Ok(())
}
