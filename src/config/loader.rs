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

use super::types::{AppConfig, StorageBackend};

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
/// # 环境变量示例
/// - `CUSTOMER_SERVER__HOST=127.0.0.1`
/// - `CUSTOMER_SERVER__PORT=8080`
/// - `CUSTOMER_DATABASE__PATH=/data/customer.db`
/// - `CUSTOMER_DATABASE__BACKEND=memory`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// `config_path` 为 None 时搜索当前目录下的默认配置文件
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_environment(config_path, environment())
}

/// 环境变量来源：前缀 CUSTOMER_，层级分隔符 __
fn environment() -> Environment {
    Environment::with_prefix("CUSTOMER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn load_with_environment(
    config_path: Option<&Path>,
    env: Environment,
) -> Result<AppConfig, ConfigError> {
    // server.host / server.port 故意不设默认值
    let mut builder = Config::builder()
        .set_default("database.backend", "sqlite")?
        .set_default("database.path", "data/customer.db")?
        .set_default("database.max_connections", 5)?
        .set_default("log.level", "info")?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    builder = builder.add_source(env);

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.host.is_empty() {
        return Err(ConfigError::ValidationError(
            "Server host is not defined".to_string(),
        ));
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port is not defined".to_string(),
        ));
    }

    if config.database.backend == StorageBackend::Sqlite && config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max connections cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Storage Backend: {}", config.database.backend.as_str());
    if config.database.backend == StorageBackend::Sqlite {
        tracing::info!("Database: {}", config.database.path);
        tracing::info!("Database Max Connections: {}", config.database.max_connections);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;
    use std::fs;

    /// 不读取进程环境变量，只使用给定的键值
    fn fake_environment(vars: &[(&str, &str)]) -> Environment {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(vars))
    }

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 8080;
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_host() {
        let mut config = valid_config();
        config.server.host = String::new();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_missing_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_path() {
        let mut config = valid_config();
        config.database.path = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_memory_backend_ignores_db_path() {
        let mut config = valid_config();
        config.database.backend = StorageBackend::Memory;
        config.database.path = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [server]
            host = "127.0.0.1"
            port = 9090

            [database]
            backend = "memory"
            "#,
        );

        let config = load_with_environment(Some(&path), fake_environment(&[])).unwrap();
        assert_eq!(config.server.addr(), "127.0.0.1:9090");
        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert_eq!(config.database.path, "data/customer.db");
    }

    #[test]
    fn test_load_without_server_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[log]\nlevel = \"debug\"\n");

        let result = load_with_environment(Some(&path), fake_environment(&[]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_environment_supplies_server() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[log]\nlevel = \"debug\"\n");
        let env = fake_environment(&[
            ("CUSTOMER_SERVER__HOST", "0.0.0.0"),
            ("CUSTOMER_SERVER__PORT", "7070"),
        ]);

        let config = load_with_environment(Some(&path), env).unwrap();
        assert_eq!(config.server.addr(), "0.0.0.0:7070");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[server]\nhost = \"127.0.0.1\"\nport = 9090\n");
        let env = fake_environment(&[("CUSTOMER_SERVER__PORT", "7070")]);

        let config = load_with_environment(Some(&path), env).unwrap();
        assert_eq!(config.server.addr(), "127.0.0.1:7070");
    }
}
