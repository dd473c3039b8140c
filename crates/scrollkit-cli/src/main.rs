use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollkit_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrollkit")]
#[command(author, version, about = "Smooth scrolling for terminal document views")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the document viewer
    Run,
    /// Print sample values for the named easing curves
    Curves {
        /// Curve name; all curves when omitted. Unknown names fall back
        /// to linear, same as everywhere else.
        name: Option<String>,
        /// Sample points per curve
        #[arg(short, long, default_value_t = 11)]
        samples: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging (RUST_LOG overrides the configured level)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!("configuration path: {}", AppConfig::config_path().display());

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Curves { name, samples }) => {
            commands::curves::run(name.as_deref(), samples)
        }
    }
}
