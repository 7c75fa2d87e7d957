use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use pdns2unbound_application::BuildZoneConfigUseCase;
use pdns2unbound_domain::CliOverrides;
use pdns2unbound_infrastructure::output::{write_output, WriteOutcome};
use pdns2unbound_infrastructure::repositories::MySqlRecordRepository;
use tracing::info;

mod bootstrap;

#[derive(Parser)]
#[command(name = "pdns2unbound")]
#[command(version)]
#[command(about = "Converts a PowerDNS database into unbound local-zone configuration")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Output destination: "stdout" or a file path
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Database host
    #[arg(long)]
    db_host: Option<String>,

    /// Database port
    #[arg(long)]
    db_port: Option<u16>,

    /// Database user
    #[arg(long)]
    db_user: Option<String>,

    /// Database password
    #[arg(long)]
    db_password: Option<String>,

    /// Database name
    #[arg(long)]
    db_name: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(WriteOutcome::Stdout | WriteOutcome::Unchanged) => ExitCode::SUCCESS,
        Ok(WriteOutcome::Updated) => ExitCode::from(1),
        Ok(WriteOutcome::Created) => ExitCode::from(2),
        Err(e) => {
            eprintln!("pdns2unbound: {e:#}");
            ExitCode::from(3)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<WriteOutcome> {
    let cli_overrides = CliOverrides {
        db_host: cli.db_host,
        db_port: cli.db_port,
        db_user: cli.db_user,
        db_password: cli.db_password,
        db_name: cli.db_name,
        output: cli.output,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting pdns2unbound v{}", env!("CARGO_PKG_VERSION"));

    let pool = bootstrap::init_database(&config.database).await?;

    let repository = Arc::new(MySqlRecordRepository::new(pool));
    let use_case = BuildZoneConfigUseCase::new(repository);

    let rendered = use_case.execute().await?;
    let outcome = write_output(&config.output, &rendered)?;

    Ok(outcome)
}
