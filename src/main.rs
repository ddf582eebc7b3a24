// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::missing_assert_message
    )
)]

mod app;
mod output;

use app::{list_filter, Args, Command};
use clap::Parser;
use color_eyre::eyre::{bail, Result, WrapErr};
use contract_registry::logging::{init_logging, parse_level, parse_rotation, LogConfig, LOG_FILENAME};
use contract_registry::utils::{get_config_path, get_home_folder};
use contract_registry::{load_config, Contract, ContractRegistry, FileStore};
use output::Output;
use std::sync::Arc;
use tracing::debug;

type Registry = ContractRegistry<FileStore>;

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    let log_config = LogConfig {
        log_dir: args
            .log_dir
            .clone()
            .unwrap_or_else(|| get_home_folder().join("logs")),
        log_level: parse_level(&args.log_level),
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_config.log_dir.join(LOG_FILENAME).display());
        eprintln!();
        return Err(e);
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| get_config_path(&args.store_dir));
    let config = load_config(&config_path)
        .wrap_err_with(|| format!("Failed to load config from {}", config_path.display()))?;

    debug!(store = %args.store_dir.display(), "Opening contract store");
    let registry = ContractRegistry::new(Arc::new(FileStore::new(args.store_dir)), &config);
    run(&registry, args.command, &Output::new(args.json)).await
}

async fn run(registry: &Registry, command: Command, output: &Output) -> Result<()> {
    match command {
        Command::NextNumber { id } => {
            let mut candidate = Contract::new("");
            candidate.id = id;
            output.number(registry.next_number(&mut candidate).await?)
        }
        Command::Create { title, fields } => {
            let contract = registry.create(fields.into_create(title)).await?;
            output.contract(&contract)
        }
        Command::Update { id, title, fields } => {
            let current = registry.get(&id).await?;
            let contract = registry
                .update(&id, fields.into_update(title, &current))
                .await?;
            output.contract(&contract)
        }
        Command::Get { id, number } => {
            let contract = match (id, number) {
                (Some(id), _) => registry.get(&id).await?,
                (None, Some(number)) => registry.get_by_number(number).await?,
                (None, None) => bail!("Either --id or --number is required"),
            };
            output.contract(&contract)
        }
        Command::List {
            status,
            contract_type,
            year,
            search,
        } => {
            let filter = list_filter(status, contract_type, year, search);
            output.contracts(&registry.list(&filter).await?)
        }
        Command::Years => output.values(&registry.years().await?),
        Command::Check => check(registry, output).await,
        Command::Complete {
            property,
            prefix,
            limit,
        } => output.values(&registry.autocomplete(&property, &prefix, limit).await?),
    }
}

async fn check(registry: &Registry, output: &Output) -> Result<()> {
    let report = registry.check_sequence().await?;
    output.report(&report)?;
    if !report.is_consistent() {
        bail!("Contract numbering is inconsistent");
    }
    Ok(())
}
