//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Skill webhook 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// get_speech 查询服务配置
    #[serde(default)]
    pub rpc: RpcConfig,

    /// Skill 配置
    #[serde(default)]
    pub skill: SkillConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// Skill webhook 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 查询服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct RpcConfig {
    /// 监听地址
    #[serde(default = "default_rpc_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_rpc_port")]
    pub port: u16,

    /// 关闭时等待在途请求的最长时间（秒）
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,

    /// 单行请求最大字节数
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,
}

fn default_rpc_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_port() -> u16 {
    7400
}

fn default_shutdown_timeout() -> u64 {
    5
}

fn default_max_request_bytes() -> usize {
    64 * 1024
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: default_rpc_host(),
            port: default_rpc_port(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            max_request_bytes: default_max_request_bytes(),
        }
    }
}

impl RpcConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// Skill 配置
#[derive(Debug, Clone, Deserialize)]
pub struct SkillConfig {
    /// 前端注册的 skill 标识，原样透传
    #[serde(default = "default_skill_id")]
    pub skill_id: String,
}

fn default_skill_id() -> String {
    "Enter-Your-Skill_ID".to_string()
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            skill_id: default_skill_id(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.rpc.port, 7400);
        assert_eq!(config.skill.skill_id, "Enter-Your-Skill_ID");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_addrs() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "0.0.0.0:5000");
        assert_eq!(config.rpc.addr(), "127.0.0.1:7400");
        assert_eq!(config.rpc.shutdown_timeout(), Duration::from_secs(5));
    }
}
