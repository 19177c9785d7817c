use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use cf_app::i18n::{system_language, Locale};
use clipfeed::bootstrap::{init_tracing_subscriber, load_config_or_default};
use clipfeed::replay::{read_script, replay, ReplayOptions};

#[derive(Parser)]
#[command(name = "clipfeed")]
#[command(about = "Clipboard-history feed tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON array of backend events and print the resulting feed
    Replay {
        /// Event script path
        script: PathBuf,
        /// Override the configured feed capacity
        #[arg(short, long)]
        capacity: Option<usize>,
        /// Filter the printed view by this query
        #[arg(short, long)]
        query: Option<String>,
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing_subscriber()?;

    match cli.command {
        Commands::Replay {
            script,
            capacity,
            query,
            config,
        } => {
            let config = load_config_or_default(config.as_deref())?;
            let options = ReplayOptions {
                capacity: capacity.unwrap_or(config.capacity),
                query,
                locale: Locale::resolve(&config.locale, &system_language()),
            };

            let events = read_script(&script)?;
            let report = replay(events, &options);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
