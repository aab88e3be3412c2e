mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "profiles")]
#[command(about = "Look up user profiles through the Segment Profile API")]
struct Cli {
    /// Profile space namespace (falls back to PROFILES_NAMESPACE)
    #[arg(long, global = true)]
    namespace: Option<String>,

    /// API access secret (falls back to PROFILES_SECRET)
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a profile's traits
    Traits(commands::traits::TraitsArgs),
    /// Show a profile's event history
    Events(commands::events::EventsArgs),
    /// Show the external ids merged into a profile
    ExternalIds(commands::external_ids::ExternalIdsArgs),
    /// Show profile metadata
    Metadata(commands::metadata::MetadataArgs),
    /// Show links to other collections
    Links(commands::links::LinksArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("profiles=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = if cli.compact {
        OutputFormat::Compact
    } else {
        OutputFormat::Pretty
    };

    let settings = Settings::resolve(
        cli.namespace.as_deref(),
        cli.secret.as_deref(),
        cli.base_url.as_deref(),
        cli.timeout_secs,
        |name| std::env::var(name).ok(),
    )?;
    let client = settings.build_client()?;

    match &cli.command {
        Commands::Traits(args) => commands::traits::run(args, &client, &format).await?,
        Commands::Events(args) => commands::events::run(args, &client, &format).await?,
        Commands::ExternalIds(args) => commands::external_ids::run(args, &client, &format).await?,
        Commands::Metadata(args) => commands::metadata::run(args, &client, &format).await?,
        Commands::Links(args) => commands::links::run(args, &client, &format).await?,
    }

    Ok(())
}
