use pdns2unbound_domain::config::DatabaseConfig;
use pdns2unbound_infrastructure::database::create_pool;
use sqlx::MySqlPool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<MySqlPool> {
    info!(
        "Connecting to database {} at {}:{}",
        cfg.dbname, cfg.host, cfg.port
    );

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        anyhow::anyhow!(e)
    })?;

    Ok(pool)
}
