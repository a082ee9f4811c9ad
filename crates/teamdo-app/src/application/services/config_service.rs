use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tracing::info;

/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "TEAMDO_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine a configuration directory")]
    NoConfigDir,

    #[error("Config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Persistent configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: LogLevel,
    /// Local time of the daily carry-over run
    pub carry_over_hour: u32,
    pub carry_over_minute: u32,
    pub webhook_timeout_secs: u64,
    pub search_window_days: u32,
    pub search_limit: u32,
    pub streak_window_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("teamdo");
        Self {
            database_path: data_dir.join("teamdo.db"),
            log_dir: data_dir.join("logs"),
            log_level: LogLevel::Info,
            carry_over_hour: 9,
            carry_over_minute: 0,
            webhook_timeout_secs: 10,
            search_window_days: 90,
            search_limit: 50,
            streak_window_days: 30,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carry_over_hour > 23 || self.carry_over_minute > 59 {
            return Err(ConfigError::Invalid(format!(
                "carry-over time {}:{:02} is out of range",
                self.carry_over_hour, self.carry_over_minute
            )));
        }
        if self.search_limit == 0 || self.search_window_days == 0 {
            return Err(ConfigError::Invalid(
                "search window and limit must be positive".to_string(),
            ));
        }
        if self.streak_window_days == 0 {
            return Err(ConfigError::Invalid(
                "streak window must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Application configuration service
pub struct ConfigService {
    config: AppConfig,
    log_level: Arc<AtomicU8>,
    config_path: PathBuf,
}

impl ConfigService {
    /// Load from `$TEAMDO_CONFIG`, or `<config dir>/teamdo/config.json`.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(p) => PathBuf::from(p),
            None => dirs::config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join("teamdo")
                .join("config.json"),
        };
        Self::load(path)
    }

    /// Load a config file, falling back to defaults when it does not exist.
    pub fn load(config_path: PathBuf) -> Result<Self, ConfigError> {
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(|source| {
                ConfigError::Io {
                    path: config_path.clone(),
                    source,
                }
            })?;
            serde_json::from_str::<AppConfig>(&content).map_err(|source| ConfigError::Parse {
                path: config_path.clone(),
                source,
            })?
        } else {
            AppConfig::default()
        };
        config.validate()?;

        info!("📁 Config loaded from: {:?}", config_path);
        info!("🔧 Initial log level: {}", config.log_level.as_str());

        Ok(Self {
            log_level: Arc::new(AtomicU8::new(config.log_level as u8)),
            config,
            config_path,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get current log level
    pub fn get_log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.log_level.load(Ordering::Relaxed))
    }

    /// Set log level and persist to disk
    pub fn set_log_level(&self, level: LogLevel) -> Result<(), ConfigError> {
        info!("🔧 Changing log level to: {}", level.as_str());
        self.log_level.store(level as u8, Ordering::Relaxed);
        self.save()?;
        info!("⚠️  Log level will take effect on next restart");
        Ok(())
    }

    /// Write the current configuration to its file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config = AppConfig {
            log_level: self.get_log_level(),
            ..self.config.clone()
        };

        let io_err = |source| ConfigError::Io {
            path: self.config_path.clone(),
            source,
        };
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(&config).map_err(|source| {
            ConfigError::Parse {
                path: self.config_path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.config_path, content).map_err(io_err)?;

        info!("💾 Config saved to: {:?}", self.config_path);
        Ok(())
    }
}
