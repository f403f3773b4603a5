//! Terminal client entry point.
use anyhow::{Context, Result};
use clap::Parser;
use client_frontend_cli::{CliApp, CliArgs, load_economy, logging};
use runtime::SessionConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let _guard = logging::setup_logging()?;

    let config = args.apply(SessionConfig::from_env());
    let economy = load_economy(&config)?;

    let stdout = std::io::stdout();
    let mut app = CliApp::new(
        config.game_file.clone(),
        config.save_dir.clone(),
        economy,
        stdout.lock(),
    )
    .with_context(|| format!("starting game {}", config.game_file.display()))?;

    app.run(std::io::stdin().lock())
}
