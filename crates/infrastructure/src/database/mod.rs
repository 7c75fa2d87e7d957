use pdns2unbound_domain::config::DatabaseConfig;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

pub async fn create_pool(cfg: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect(&cfg.url())
        .await
}
