//! Roster CLI
//!
//! Command-line front end for the roster service:
//! - List activities and their participants
//! - Sign up for an activity
//! - Unregister from an activity
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roster::config::{generate_default_config, Config};
use roster::telemetry::init_logging;
use roster::{HttpBackend, LoadOutcome, OutputFormat, RosterClient, TerminalView};

#[derive(Parser)]
#[command(name = "roster")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse activities and manage signups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/roster/config.toml or ./roster.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Roster service URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities with their participants
    List,

    /// Sign up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Unregister from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.base_url {
        config.backend.base_url = url;
    }

    init_logging(&config.logging);

    let assume_yes = matches!(cli.command, Commands::Unregister { yes: true, .. });
    let backend = HttpBackend::new(&config.backend.to_backend_config())?;
    let view = TerminalView::stdio(cli.format, assume_yes);
    let client = RosterClient::with_delays(backend, view, config.notices.delays());

    tracing::debug!("Roster service at {}", client.backend().base_url());

    let succeeded = match cli.command {
        Commands::List => matches!(client.load_activities().await, LoadOutcome::Rendered(_)),

        Commands::Signup { activity, email } => {
            client.signup(&activity, &email).await.is_accepted()
        }

        Commands::Unregister { activity, email, .. } => {
            client.unregister(&activity, &email).await.is_accepted()
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            true
        }
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
