//! employee-demo: runs the employee persistence demonstration against a configured database

mod config;
mod demo;
mod logging;

use anyhow::Result;
use clap::Parser;
use config::AppConfig;
use employee_service::EmployeeServiceModule;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "employee-demo", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database URL (overrides config), e.g. sqlite://employees.db?mode=rwc
    #[arg(long)]
    database_url: Option<String>,

    /// Rows inserted by the bulk-load step
    #[arg(long)]
    batch_count: Option<usize>,

    /// Rows per multi-row INSERT during the bulk load
    #[arg(long)]
    batch_size: Option<usize>,

    /// Log filter directive, e.g. `info` or `employee_service=debug`
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn apply(self, cfg: &mut AppConfig) {
        if let Some(url) = self.database_url {
            cfg.employee.database.url = url;
        }
        if let Some(count) = self.batch_count {
            cfg.demo.batch_count = count;
        }
        if let Some(size) = self.batch_size {
            cfg.employee.batch_size = size;
        }
        if let Some(level) = self.log_level {
            cfg.logging.level = level;
        }
        if self.json_logs {
            cfg.logging.json = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = AppConfig::load(cli.config.as_deref())?;
    cli.apply(&mut cfg);
    cfg.employee.validate()?;

    logging::init(&cfg.logging)?;
    tracing::info!(
        database = %cfg.employee.database.redacted_url(),
        batch_count = cfg.demo.batch_count,
        "Starting employee demo"
    );

    let module = EmployeeServiceModule::init(cfg.employee.clone()).await?;
    let client = module.client();

    let mut stdout = std::io::stdout().lock();
    let summary = demo::run(client.as_ref(), cfg.demo.batch_count, &mut stdout).await?;

    tracing::info!(
        employees = summary.final_count,
        batch_inserted = summary.batch_inserted,
        batch_size = module.config().batch_size,
        "Employee demo finished"
    );
    Ok(())
}
