//! MedInventory dashboard core library
//!
//! This module exports the building blocks of the MedInventory dashboard:
//! records, display rules, the HTML views and the HTTP routes.

pub mod api;
pub mod core;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
pub mod ui;

/// Application configuration
pub mod config {
    use std::path::{Path, PathBuf};

    use config::{Environment, File, FileFormat};
    use serde::Deserialize;

    use crate::core::badge::BadgeRules;
    use crate::core::format::is_valid_date_format;
    use crate::error::AppError;

    const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

    /// Upper bound for `display.expiry_warning_days` (about a century).
    pub const MAX_EXPIRY_WARNING_DAYS: i64 = 36_500;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Config {
        pub server: ServerConfig,
        pub display: DisplayConfig,
        #[serde(default)]
        pub data: DataConfig,
        pub log: LogConfig,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ServerConfig {
        pub host: String,
        pub port: u16,
        pub static_dir: PathBuf,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct DisplayConfig {
        pub page_size: usize,
        pub date_format: String,
        pub low_stock_threshold: u32,
        pub expiry_warning_days: i64,
    }

    impl DisplayConfig {
        pub fn badge_rules(&self) -> BadgeRules {
            BadgeRules {
                low_stock_threshold: self.low_stock_threshold,
                expiry_warning_days: self.expiry_warning_days,
            }
        }
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct DataConfig {
        pub sample_path: Option<PathBuf>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum LogFormat {
        Pretty,
        Json,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct LogConfig {
        pub level: String,
        pub format: LogFormat,
    }

    impl Config {
        /// Only the defaults compiled into the binary.
        pub fn embedded() -> Result<Config, AppError> {
            load_from(None, false)
        }

        /// Reject values the views cannot render.
        pub fn validate(&self) -> Result<(), AppError> {
            let display = &self.display;
            if display.page_size == 0 {
                return Err(invalid("display.page_size must be at least 1".into()));
            }
            if !is_valid_date_format(&display.date_format) {
                return Err(invalid(format!(
                    "display.date_format {:?} is not a valid date pattern",
                    display.date_format
                )));
            }
            if !(0..=MAX_EXPIRY_WARNING_DAYS).contains(&display.expiry_warning_days) {
                return Err(invalid(format!(
                    "display.expiry_warning_days must be between 0 and {}, got {}",
                    MAX_EXPIRY_WARNING_DAYS, display.expiry_warning_days
                )));
            }
            Ok(())
        }
    }

    fn invalid(message: String) -> AppError {
        AppError::Config(config::ConfigError::Message(message))
    }

    /// Load configuration from file
    ///
    /// Layers, later ones winning: embedded defaults, `config/{MEDINV_ENV}`
    /// (or the explicit `path`), then `MEDINV__SECTION__KEY` variables.
    pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
        load_from(path, true)
    }

    fn load_from(path: Option<&Path>, with_overrides: bool) -> Result<Config, AppError> {
        // Start with default settings
        let mut builder =
            config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if with_overrides {
            // Override with an explicit or environment-specific file
            builder = match path {
                Some(path) => builder.add_source(File::from(path)),
                None => {
                    let env = std::env::var("MEDINV_ENV").unwrap_or_else(|_| "development".into());
                    builder.add_source(File::with_name(&format!("config/{}", env)).required(false))
                }
            };

            // Override with environment variables
            builder = builder.add_source(Environment::with_prefix("MEDINV").separator("__"));
        }

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

}
