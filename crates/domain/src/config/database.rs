use serde::{Deserialize, Serialize};

/// Connection settings for the PowerDNS database.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_dbname")]
    pub dbname: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.dbname
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            password: String::new(),
            host: default_host(),
            port: default_port(),
            dbname: default_dbname(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_user() -> String {
    "root".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_dbname() -> String {
    "pdns".to_string()
}

fn default_max_connections() -> u32 {
    5
}
