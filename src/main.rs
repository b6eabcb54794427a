use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_ledger::calculate;
use league_ledger::config::AppConfig;
use league_ledger::ingest;
use league_ledger::storage::views::{View, ViewWriter};
use league_ledger::storage::StorageConfig;

#[derive(Parser)]
#[command(name = "league-ledger")]
#[command(about = "Historical fantasy football league statistics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load, validate and compute every view, then write them to disk
    Compute {
        /// Output directory (defaults to <data-dir>/derived)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Load and validate input without computing
    Validate,

    /// Compute and print one view as JSON
    Show {
        /// View name (metadata, owners, standings, head-to-head, records, ...)
        view: View,
    },
}

/// Config file if present, defaults otherwise, then CLI overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = if cli.config.exists() {
        AppConfig::from_file(&cli.config)
            .with_context(|| format!("Failed to load config from {:?}", cli.config))?
    } else {
        AppConfig::default()
    };

    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone();
    }
    Ok(config)
}

fn init_tracing(log_level: &str, json_logs: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config.log_level, cli.json_logs);
    tracing::info!("Starting league-ledger v{}", env!("CARGO_PKG_VERSION"));
    if !cli.config.exists() {
        tracing::debug!("No config file at {:?}, using defaults", cli.config);
    }

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::Compute { output } => {
            let store = ingest::load_store(&storage, &config).context("Failed to load league data")?;
            let views = calculate::compute(&store, &config);

            let writer = match output {
                Some(dir) => ViewWriter::new(dir),
                None => ViewWriter::for_config(&storage),
            };
            let written = writer
                .write_all(&views)
                .with_context(|| format!("Failed to write views to {:?}", writer.dir()))?;

            println!(
                "Wrote {} documents to {} (snapshot {})",
                written.len(),
                writer.dir().display(),
                store.digest()
            );
        }

        Commands::Validate => {
            let store = ingest::load_store(&storage, &config).context("Failed to load league data")?;

            println!("Input OK (snapshot {})", store.digest());
            println!("  Seasons:        {}", store.seasons().len());
            println!("  Years:          {}", store.years().len());
            println!("  Owners:         {}", store.owners().owner_count());
            println!("  Matchups:       {}", store.matchups().len());
            println!("  Draft picks:    {}", store.draft().len());
            println!("  Roster entries: {}", store.rosters().len());
            println!("  Lineup entries: {}", store.lineups().len());
            println!();
            for owner in store.owners().owners() {
                println!("  {}", owner);
            }
        }

        Commands::Show { view } => {
            let store = ingest::load_store(&storage, &config).context("Failed to load league data")?;
            let views = calculate::compute(&store, &config);
            let json = view
                .render(&views)
                .with_context(|| format!("Failed to render view {}", view))?;
            println!("{}", json);
        }
    }

    Ok(())
}
