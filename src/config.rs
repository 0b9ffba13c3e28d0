use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "MORTGAGE_SEARCH_CONFIG";
/// Environment variable that overrides `calculator.api_key`.
pub const API_KEY_ENV: &str = "MORTGAGE_CALCULATOR_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    /// SQL applied at startup; must be idempotent.
    pub schema_path: String,

    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "mortgage_search.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,

    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:3000".to_string(),
            max_workers: 8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub base_url: String,

    /// Sent as `X-Api-Key`. Prefer setting it through the environment.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Whole-request timeout in seconds (default: 5)
    pub timeout_secs: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.api-ninjas.com/v1/mortgagecalculator".to_string(),
            api_key: String::new(),
            timeout_secs: 5,
        }
    }
}

impl Config {
    /// Load `.env`, then the config file (or defaults), then env overrides.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        let mut config = if path.exists() {
            info!("Loading config from: {}", path.display());
            Self::load_from_path(&path)?
        } else {
            info!("No config file found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.calculator.api_key = key.trim().to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        url::Url::parse(&self.calculator.base_url).with_context(|| {
            format!(
                "Invalid calculator base URL: {}",
                self.calculator.base_url
            )
        })?;

        if self.calculator.timeout_secs == 0 {
            anyhow::bail!("Calculator timeout must be > 0");
        }

        if self.server.max_workers == 0 {
            anyhow::bail!("Server max_workers must be > 0");
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.server
            .address
            .parse()
            .with_context(|| format!("Invalid server address: {}", self.server.address))
    }
}
