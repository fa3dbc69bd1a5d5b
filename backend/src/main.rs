use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zoo_keeper::config::{ConfigOverrides, ZooConfig};
use zoo_keeper::initialize_backend;
use zoo_keeper::io::ConsoleSession;

/// Console zoo record keeper
#[derive(Debug, Parser)]
#[command(name = "zoo-keeper", version, about)]
struct Cli {
    /// Directory holding animals.csv, users.csv and an optional zoo_config.yaml
    #[arg(long, env = "ZOO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Explicit YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not add the example animals to an empty zoo
    #[arg(long)]
    no_seed: bool,

    /// Never clear the terminal
    #[arg(long)]
    no_clear: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; stderr keeps log lines out of the menu
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ZooConfig::load(&ConfigOverrides {
        data_directory: cli.data_dir,
        config_file: cli.config,
        no_seed: cli.no_seed,
        no_clear: cli.no_clear,
    })?;

    let app_state = initialize_backend(&config)?;
    info!("Backend ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    ConsoleSession::new(&app_state, stdin.lock(), stdout.lock()).run()
}
