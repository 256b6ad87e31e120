mod client;
mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventos_core::EventosConfig;
use tracing_subscriber::EnvFilter;

use crate::client::Client;

#[derive(Parser)]
#[command(name = "eventos")]
#[command(about = "List, edit and count down to your events")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every event with a countdown snapshot
    List,
    /// Show a single event
    Show { id: u64 },
    /// Create an event (prompts for anything missing)
    New {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        /// Target instant in UTC (e.g., "2025-10-16T10:00:00Z")
        #[arg(short = 'd', long)]
        date_time: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        img_url: Option<String>,
    },
    /// Change fields of an existing event
    Update {
        id: u64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short = 'd', long)]
        date_time: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        img_url: Option<String>,
    },
    /// Delete an event
    Delete {
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Live countdowns for every event, or just one
    Watch { id: Option<u64> },
    /// Live countdown to an arbitrary instant, without the server
    Countdown { date_time: String },
    /// Print the display form of an instant (defaults to now)
    Date { date_time: Option<String> },
    /// Show configuration paths and values
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => commands::list::run(&connect().await?).await,
        Commands::Show { id } => commands::show::run(&connect().await?, id).await,
        Commands::New {
            title,
            category,
            date_time,
            description,
            img_url,
        } => {
            let args = commands::new::NewArgs {
                title,
                category,
                date_time,
                description,
                img_url,
            };
            commands::new::run(&connect().await?, args).await
        }
        Commands::Update {
            id,
            title,
            category,
            date_time,
            description,
            img_url,
        } => {
            let patch = commands::update::patch_from_args(
                title,
                category,
                date_time,
                description,
                img_url,
            );
            commands::update::run(&connect().await?, id, patch).await
        }
        Commands::Delete { id, yes } => commands::delete::run(&connect().await?, id, yes).await,
        Commands::Watch { id } => commands::watch::run(&connect().await?, id).await,
        // These never talk to the server
        Commands::Countdown { date_time } => commands::countdown::run(&date_time).await,
        Commands::Date { date_time } => commands::date::run(date_time.as_deref()),
        Commands::Config => commands::config::run(),
    }
}

/// Load config and reach the server, starting it if needed
async fn connect() -> Result<Client> {
    let config = EventosConfig::load()?;
    Client::connect(&config).await
}
