use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const ENV_PREFIX: &str = "STUDENT_REGISTRY_";

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid environment override: {0}")]
    Env(#[from] envy::Error),
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9999,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// 默认日志级别，`RUST_LOG` 优先
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// 环境变量覆盖项（STUDENT_REGISTRY_HOST 等）
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    host: Option<String>,
    port: Option<u16>,
    log_level: Option<String>,
}

impl Config {
    /// 加载配置: 默认值 -> config.toml（可选）-> .env -> 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::load_from(DEFAULT_CONFIG_PATH)?
        } else {
            Self::default()
        };

        // .env 文件不存在时忽略
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to load .env file");
            }
        }

        let overrides = envy::prefixed(ENV_PREFIX).from_env::<EnvOverrides>()?;
        config.apply(overrides);
        Ok(config)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(config_str)?;
        Ok(config)
    }

    /// 用给定的键值对覆盖配置，键名带 `STUDENT_REGISTRY_` 前缀
    pub fn with_env_vars<I>(mut self, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let overrides = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvOverrides>(vars)?;
        self.apply(overrides);
        Ok(self)
    }

    fn apply(&mut self, overrides: EnvOverrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|_| ConfigError::InvalidAddress(addr))
    }
}
