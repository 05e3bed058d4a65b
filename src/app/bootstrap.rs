use std::fs::OpenOptions;
use std::path::Path;

use crate::app::controller::AppController;
use crate::app::headless::{export_once, list_fixtures};
use crate::cli::{Cli, Commands};
use crate::config::{load_config, validator::validate_config};
use crate::error::{AppError, Result};
use crate::fetch::ApiClient;

/// Entry point used by `main`: resolve config, set up logging, run the command.
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.trim().to_string();
        validate_config(&config)?;
    }

    let command = cli.command();
    let log_file = matches!(command, Commands::Tui).then(|| config.log_file.as_path());
    init_logging(cli.verbose, log_file);

    let client = ApiClient::new(&config)?;

    match command {
        Commands::Tui => AppController::new(client, config).run().await,
        Commands::List { league, csv } => {
            let count = list_fixtures(&client, league.as_deref(), csv, std::io::stdout()).await?;
            log::info!("Listed {count} fixtures");
            Ok(())
        }
        Commands::Export { dir } => {
            let dir = dir.unwrap_or_else(|| config.download_dir.clone());
            let path = export_once(&client, &dir)
                .await
                .map_err(|err| AppError::message(format!("Failed to download: {err}")))?;
            println!("Saved {}", path.display());
            Ok(())
        }
    }
}

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`.
///
/// The interactive screen owns stdout/stderr, so its logs go to `log_file`.
fn init_logging(verbose: bool, log_file: Option<&Path>) {
    let level = if verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));

    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(err) => {
                eprintln!("Logging disabled; cannot open {}: {}", path.display(), err);
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }

    let _ = builder.try_init();
}
