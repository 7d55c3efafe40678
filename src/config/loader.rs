//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "VOXBRIDGE";

/// 加载应用配置
///
/// # 环境变量示例
/// - `VOXBRIDGE_SERVER__PORT=5000`
/// - `VOXBRIDGE_RPC__PORT=7400`
/// - `VOXBRIDGE_SKILL__SKILL_ID=amzn1.ask.skill.xxxx`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索默认配置文件（均为可选）
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000)?
        .set_default("rpc.host", "127.0.0.1")?
        .set_default("rpc.port", 7400)?
        .set_default("rpc.shutdown_timeout_secs", 5)?
        .set_default("rpc.max_request_bytes", 64 * 1024)?
        .set_default("skill.skill_id", "Enter-Your-Skill_ID")?
        .set_default("log.level", "info")?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 层级分隔符: __ (双下划线)，例如 VOXBRIDGE_RPC__PORT=7400
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.rpc.port == 0 {
        return Err(ConfigError::ValidationError(
            "RPC port cannot be 0".to_string(),
        ));
    }

    // 两个执行上下文不能抢同一个端口
    if config.server.port == config.rpc.port
        && (config.server.host == config.rpc.host
            || config.server.host == "0.0.0.0"
            || config.rpc.host == "0.0.0.0")
    {
        return Err(ConfigError::ValidationError(format!(
            "Webhook and RPC cannot both listen on port {}",
            config.rpc.port
        )));
    }

    if config.rpc.shutdown_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "RPC shutdown timeout cannot be 0".to_string(),
        ));
    }

    if config.rpc.max_request_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "RPC max request bytes cannot be 0".to_string(),
        ));
    }

    if config.skill.skill_id.is_empty() {
        return Err(ConfigError::ValidationError(
            "Skill id cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Webhook: {}", config.server.addr());
    tracing::info!("Query RPC: {}", config.rpc.addr());
    tracing::info!("RPC Shutdown Timeout: {}s", config.rpc.shutdown_timeout_secs);
    tracing::info!("RPC Max Request: {} bytes", config.rpc.max_request_bytes);
    tracing::info!("Skill ID: {}", config.skill.skill_id);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
