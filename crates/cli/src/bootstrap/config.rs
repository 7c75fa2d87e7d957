use pdns2unbound_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        database = %config.database.dbname,
        host = %config.database.host,
        output = %config.output.name,
        "Configuration loaded"
    );

    Ok(config)
}
