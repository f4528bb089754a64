//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 文本生成服务配置
    #[serde(default)]
    pub ai: AiConfig,

    /// 存储配置
    #[serde(default)]
    pub store: StoreConfig,

    /// 会话配置
    #[serde(default)]
    pub auth: AuthConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
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
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 文本生成服务（Gemini）配置
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API 基础 URL
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,

    /// API Key，未设置时生成功能不可用
    #[serde(default)]
    pub api_key: Option<String>,

    /// 模型名
    #[serde(default = "default_ai_model")]
    pub model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_ai_timeout")]
    pub timeout_secs: u64,
}

fn default_ai_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_ai_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_ai_timeout() -> u64 {
    30
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_ai_base_url(),
            api_key: None,
            model: default_ai_model(),
            timeout_secs: default_ai_timeout(),
        }
    }
}

impl AiConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// 启动时载入演示数据
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// 每次存储操作前的模拟延迟（毫秒），0 表示关闭
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
            simulated_latency_ms: 0,
        }
    }
}

impl StoreConfig {
    pub fn simulated_latency(&self) -> Option<Duration> {
        (self.simulated_latency_ms > 0).then(|| Duration::from_millis(self.simulated_latency_ms))
    }
}

/// 会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// 会话空闲超时（秒）
    #[serde(default = "default_session_idle")]
    pub session_idle_secs: u64,

    /// 过期会话清理间隔（秒）
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

fn default_session_idle() -> u64 {
    86400 // 24 小时
}

fn default_sweep_interval() -> u64 {
    300
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_idle_secs: default_session_idle(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
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
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert!(!config.ai.has_api_key());
        assert!(config.store.seed_demo_data);
        assert_eq!(config.auth.session_idle_secs, 86400);
    }

    #[test]
    fn test_simulated_latency() {
        let mut store = StoreConfig::default();
        assert_eq!(store.simulated_latency(), None);
        store.simulated_latency_ms = 250;
        assert_eq!(store.simulated_latency(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let ai = AiConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!ai.has_api_key());
    }
}
