// src/config.rs
use crate::domain::errors::{AppError, AppResult};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Default base URL of the banking sandbox.
const DEFAULT_BASE_URL: &str = "http://api.nessieisreal.com";

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream Ledger API settings
    pub ledger: LedgerConfig,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Upstream Ledger API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Base URL of the sandbox API
    pub base_url: String,

    /// API key, sent as a query parameter on every request
    pub api_key: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub host: String,

    /// Bind port
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "warn", "error")
    pub level: String,
}

impl Config {
    /// Load configuration from environment variables. The API key is a
    /// startup precondition: without it the process refuses to serve.
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let ledger_config = LedgerConfig {
            base_url: env::var("LEDGER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key: env::var("LEDGER_API_KEY").map_err(|_| {
                AppError::Config("Missing LEDGER_API_KEY environment variable".to_string())
            })?,
        };

        let server_config = ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
        };

        let logging_config = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        Ok(Config {
            ledger: ledger_config,
            server: server_config,
            logging: logging_config,
        })
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) -> AppResult<()> {
        let mut builder = env_logger::Builder::new();

        let log_level = match self.logging.level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        };

        builder.filter_level(log_level);
        builder.init();

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                api_key: "".to_string(),
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}
