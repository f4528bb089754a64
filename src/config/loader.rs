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
use crate::application::ports::idle_timeout;

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

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `NOVELLA_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `NOVELLA_SERVER__PORT=9000`
/// - `NOVELLA_AI__API_KEY=...`
/// - `NOVELLA_STORE__SIMULATED_LATENCY_MS=300`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("ai.base_url", "https://generativelanguage.googleapis.com")?
        .set_default("ai.model", "gemini-2.5-flash")?
        .set_default("ai.timeout_secs", 30)?
        .set_default("store.seed_demo_data", true)?
        .set_default("store.simulated_latency_ms", 0)?
        .set_default("auth.session_idle_secs", 86400)?
        .set_default("auth.sweep_interval_secs", 300)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），例如 NOVELLA_AI__MODEL=gemini-2.5-pro
    builder = builder.add_source(
        Environment::with_prefix("NOVELLA")
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

    if config.ai.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "AI base URL cannot be empty".to_string(),
        ));
    }

    if config.ai.model.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "AI model cannot be empty".to_string(),
        ));
    }

    if config.ai.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "AI timeout cannot be 0".to_string(),
        ));
    }

    if config.auth.session_idle_secs == 0 || config.auth.sweep_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Session idle timeout and sweep interval must be positive".to_string(),
        ));
    }

    if idle_timeout(config.auth.session_idle_secs).is_none() {
        return Err(ConfigError::ValidationError(format!(
            "Session idle timeout {}s is out of range",
            config.auth.session_idle_secs
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("AI Base URL: {}", config.ai.base_url);
    tracing::info!("AI Model: {}", config.ai.model);
    tracing::info!(
        "AI API Key: {}",
        if config.ai.has_api_key() { "set" } else { "not set" }
    );
    tracing::info!("AI Timeout: {}s", config.ai.timeout_secs);
    tracing::info!("Seed Demo Data: {}", config.store.seed_demo_data);
    tracing::info!("Simulated Latency: {}ms", config.store.simulated_latency_ms);
    tracing::info!("Session Idle Timeout: {}s", config.auth.session_idle_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_model() {
        let mut config = AppConfig::default();
        config.ai.model = " ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_idle_timeout() {
        let mut config = AppConfig::default();
        config.auth.session_idle_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_oversized_idle_timeout() {
        let mut config = AppConfig::default();
        config.auth.session_idle_secs = u64::MAX;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9100

[ai]
model = "gemini-2.5-pro"
api_key = "test-key"

[store]
simulated_latency_ms = 120
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.ai.model, "gemini-2.5-pro");
        assert!(config.ai.has_api_key());
        assert_eq!(config.store.simulated_latency_ms, 120);
        assert!(config.store.seed_demo_data);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 0").unwrap();

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
