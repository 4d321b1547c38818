// src/config.rs
//
// Runtime configuration
//
// Load order: built-in defaults, then an optional JSON file, then
// FYYUR_* environment variables. Later sources win field by field.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::logging::{default_log_level, LogSettings};
use crate::services::DEFAULT_HOMEPAGE_LIMIT;

/// Env var naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "FYYUR_CONFIG";
/// Picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "fyyur.json";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_POOL_SIZE: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub bind_address: String,
    pub debug: bool,
    pub log_level: String,
    pub log_dir: PathBuf,
    pub pool_size: u32,
    pub homepage_limit: u32,
}

fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fyyur")
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = app_data_dir();
        Self {
            database_path: data_dir.join("fyyur.db"),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            debug: cfg!(debug_assertions),
            log_level: default_log_level().to_string(),
            log_dir: data_dir.join("logs"),
            pool_size: DEFAULT_POOL_SIZE,
            homepage_limit: DEFAULT_HOMEPAGE_LIMIT,
        }
    }
}

impl AppConfig {
    /// Configuration from the process environment
    pub fn load() -> AppResult<Self> {
        let file = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.exists().then_some(local)
            });

        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    pub fn from_sources<F>(file: Option<&Path>, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            AppError::Config(format!("cannot read {}: {}", path.display(), err))
        })?;
        serde_json::from_str(&raw)
            .map_err(|err| AppError::Config(format!("invalid {}: {}", path.display(), err)))
    }

    fn apply_env<F>(&mut self, env: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env("FYYUR_DATABASE_PATH") {
            self.database_path = PathBuf::from(value);
        }
        if let Some(value) = env("FYYUR_BIND_ADDRESS") {
            self.bind_address = value;
        }
        if let Some(value) = env("FYYUR_DEBUG") {
            self.debug = parse_bool("FYYUR_DEBUG", &value)?;
        }
        if let Some(value) = env("FYYUR_LOG_LEVEL") {
            self.log_level = value;
        }
        if let Some(value) = env("FYYUR_LOG_DIR") {
            self.log_dir = PathBuf::from(value);
        }
        if let Some(value) = env("FYYUR_POOL_SIZE") {
            self.pool_size = value.trim().parse().map_err(|_| {
                AppError::Config(format!("FYYUR_POOL_SIZE must be a number, got `{}`", value))
            })?;
        }
        // hosting platforms hand out the port this way
        if let Some(value) = env("PORT") {
            let port: u16 = value.trim().parse().map_err(|_| {
                AppError::Config(format!("PORT must be a port number, got `{}`", value))
            })?;
            self.bind_address = format!("0.0.0.0:{}", port);
        }
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        self.socket_addr()?;
        if self.pool_size == 0 {
            return Err(AppError::Config("pool_size must be at least 1".into()));
        }
        if self.homepage_limit == 0 {
            return Err(AppError::Config("homepage_limit must be at least 1".into()));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        self.bind_address.parse().map_err(|_| {
            AppError::Config(format!(
                "bind_address `{}` is not a socket address",
                self.bind_address
            ))
        })
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            level: self.log_level.clone(),
            debug: self.debug,
            log_dir: self.log_dir.clone(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{} must be true or false, got `{}`",
            key, value
        ))),
    }
}
