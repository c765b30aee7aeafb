use clap::Parser;
use ledger_lens::args::{Args, Command};
use ledger_lens::{commands, error_type, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            match error_type(&e) {
                Some(kind) => error!("Exiting with {kind} error: {e:#}"),
                None => error!("Exiting with error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().lens_home().path();
    let format = args.common().format();

    // Route to appropriate command handler
    match args.command() {
        Command::Init => commands::init(home).await?.print(format),
        Command::Summary => commands::summary(Config::load(home).await?)
            .await?
            .print(format),
        Command::Categories(categories_args) => {
            let config = Config::load(home).await?;
            commands::categories(config, categories_args.clone())
                .await?
                .print(format)
        }
        Command::Trend => commands::trend(Config::load(home).await?)
            .await?
            .print(format),
        Command::Budget => commands::budget(Config::load(home).await?)
            .await?
            .print(format),
        Command::Compare(compare_args) => {
            let config = Config::load(home).await?;
            commands::compare(config, compare_args.clone())
                .await?
                .print(format)
        }
    }
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "ledger_lens={level},{}={level}",
                env!("CARGO_CRATE_NAME")
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
