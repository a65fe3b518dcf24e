mod actions;
mod directory;
mod errors;
mod settings;
mod web;

use std::sync::Arc;

use clap::Parser;
use miette::Result;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "cardgate", version, about = "Card action decision service")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    // load settings
    let settings = settings::Settings::load(&cli.config)?;
    tracing::info!(?settings, "Loaded configuration");

    // seed the in-memory card directory
    let directory = Arc::new(directory::SampleCardDirectory::with_users(
        settings.directory.sample_users,
    ));
    tracing::info!(users = directory.user_count(), "Seeded sample card directory");

    // compile the action policy table
    let policy = actions::policy::build_policy();
    tracing::info!(actions = policy.action_count(), "Compiled card action policy");

    // start web server
    web::serve(settings, directory, policy).await?;
    Ok(())
}
