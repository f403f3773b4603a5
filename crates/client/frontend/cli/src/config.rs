//! Command-line arguments layered over environment configuration.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_content::PriceLoader;
use runtime::{Economy, PriceTable, SessionConfig};

/// Terminal maze adventure
#[derive(Debug, Default, Parser)]
#[command(name = "maze", version, about = "Play a maze adventure in the terminal", long_about = None)]
pub struct CliArgs {
    /// Game definition file to start with [env: MAZE_GAME_FILE]
    #[arg(long, value_name = "FILE")]
    pub game: Option<PathBuf>,

    /// Directory `save` writes to when no directory is given [env: MAZE_SAVE_DIR]
    #[arg(long, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    /// TOML file overriding shop prices [env: MAZE_PRICES_FILE]
    #[arg(long, value_name = "FILE")]
    pub prices: Option<PathBuf>,
}

impl CliArgs {
    /// Arguments win over the environment-derived configuration.
    pub fn apply(self, mut config: SessionConfig) -> SessionConfig {
        if let Some(game) = self.game {
            config.game_file = game;
        }
        if let Some(save_dir) = self.save_dir {
            config.save_dir = save_dir;
        }
        if self.prices.is_some() {
            config.prices = self.prices;
        }
        config
    }
}

/// Default prices, overridden by the configured price file if any.
pub fn load_economy(config: &SessionConfig) -> Result<Economy> {
    let table = match &config.prices {
        Some(path) => {
            let overrides = PriceLoader::load(path)
                .with_context(|| format!("loading prices from {}", path.display()))?;
            tracing::info!(kinds = overrides.len(), "Loaded price overrides");
            PriceTable::with_overrides(overrides)
        }
        None => PriceTable::default(),
    };
    Ok(Economy::new(table))
}
