use crate::backend::drivers;
use crate::dialect::Dialect;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub drivers: DriversConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Default connection URL used when none is given on the command line.
    pub url: Option<String>,

    pub username: Option<String>,

    pub password: Option<String>,
}

/// ODBC driver names, overridable per backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriversConfig {
    #[serde(default = "default_mysql_driver")]
    pub mysql: String,

    #[serde(default = "default_postgres_driver")]
    pub postgres: String,

    #[serde(default = "default_snowflake_driver")]
    pub snowflake: String,

    #[serde(default = "default_sqlite_driver")]
    pub sqlite: String,

    #[serde(default = "default_h2_driver")]
    pub h2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_colored")]
    pub colored: bool,
}

// Default values
fn default_driver(dialect: Dialect) -> String {
    drivers::driver_for_dialect(dialect)
        .default_odbc_driver
        .to_string()
}
fn default_mysql_driver() -> String {
    default_driver(Dialect::MySql)
}
fn default_postgres_driver() -> String {
    default_driver(Dialect::Postgres)
}
fn default_snowflake_driver() -> String {
    default_driver(Dialect::Snowflake)
}
fn default_sqlite_driver() -> String {
    default_driver(Dialect::Sqlite)
}
fn default_h2_driver() -> String {
    default_driver(Dialect::H2)
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_colored() -> bool {
    true
}

impl Default for DriversConfig {
    fn default() -> Self {
        Self {
            mysql: default_mysql_driver(),
            postgres: default_postgres_driver(),
            snowflake: default_snowflake_driver(),
            sqlite: default_sqlite_driver(),
            h2: default_h2_driver(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            colored: default_colored(),
        }
    }
}

impl DriversConfig {
    /// The configured ODBC driver name for a backend.
    pub fn odbc_driver(&self, dialect: Dialect) -> &str {
        match dialect {
            Dialect::MySql => &self.mysql,
            Dialect::Postgres => &self.postgres,
            Dialect::Snowflake => &self.snowflake,
            Dialect::Sqlite => &self.sqlite,
            Dialect::H2 => &self.h2,
        }
    }
}

impl Config {
    /// Load configuration from file with environment override support
    pub fn load(config_path: Option<&str>, environment: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            config = Self::load_from_file(path)?;
        } else {
            for standard_path in Self::standard_config_paths() {
                if standard_path.exists() {
                    debug!("Loading config from: {}", standard_path.display());
                    config = Self::load_from_file(&standard_path.display().to_string())?;
                    break;
                }
            }
        }

        if let Some(env) = environment {
            if let Ok(env_config) = Self::load_environment_config(env) {
                debug!("Applying environment config for: {}", env);
                config = config.merge(env_config);
            }
        }

        // Local overrides always win
        if let Ok(local_config) = Self::load_from_file("config/local.toml") {
            debug!("Applying local config overrides");
            config = config.merge(local_config);
        }

        Ok(config)
    }

    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_string(), e.to_string()))
    }

    fn load_environment_config(environment: &str) -> Result<Self, ConfigError> {
        let env_path = format!("config/{}.toml", environment);
        Self::load_from_file(&env_path)
    }

    fn standard_config_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("config.toml"),
            PathBuf::from("config/default.toml"),
        ]
    }

    /// Merge this config with another, with the other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        if other.database.url.is_some() {
            self.database.url = other.database.url;
        }
        if other.database.username.is_some() {
            self.database.username = other.database.username;
        }
        if other.database.password.is_some() {
            self.database.password = other.database.password;
        }

        self.drivers = other.drivers;
        self.logging = other.logging;

        self
    }

    /// Generate a default configuration file
    pub fn generate_default_config(path: &str) -> Result<(), ConfigError> {
        let config = Config::default();
        let toml_content =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, toml_content)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config file '{0}': {1}")]
    Parse(String, String),

    #[error("Failed to write config file '{0}': {1}")]
    FileWrite(String, String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}
