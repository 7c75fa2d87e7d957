use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;

/// Main configuration structure for pdns2unbound
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Source PowerDNS database
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Output destination
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pdns2unbound.toml in current directory
    /// 3. /etc/pdns2unbound/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("pdns2unbound.toml").exists() {
            Self::from_file("pdns2unbound.toml")?
        } else if std::path::Path::new("/etc/pdns2unbound/config.toml").exists() {
            Self::from_file("/etc/pdns2unbound/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(host) = overrides.db_host {
            self.database.host = host;
        }
        if let Some(port) = overrides.db_port {
            self.database.port = port;
        }
        if let Some(user) = overrides.db_user {
            self.database.user = user;
        }
        if let Some(password) = overrides.db_password {
            self.database.password = password;
        }
        if let Some(dbname) = overrides.db_name {
            self.database.dbname = dbname;
        }
        if let Some(output) = overrides.output {
            self.output.name = output;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.port == 0 {
            return Err(ConfigError::Validation(
                "Database port cannot be 0".to_string(),
            ));
        }

        if self.database.dbname.is_empty() {
            return Err(ConfigError::Validation(
                "Database name cannot be empty".to_string(),
            ));
        }

        if self.output.name.is_empty() {
            return Err(ConfigError::Validation(
                "Output name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub db_host: Option<String>,
    pub db_port: Option<u16>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_name: Option<String>,
    pub output: Option<String>,
    pub log_level: Option<String>,
}
