//! Session configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

pub const DEFAULT_GAME_FILE: &str = "games/game1.txt";

/// Paths a host needs to start and persist a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub game_file: PathBuf,
    pub save_dir: PathBuf,
    /// Optional TOML price overrides.
    pub prices: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game_file: PathBuf::from(DEFAULT_GAME_FILE),
            save_dir: default_save_dir(),
            prices: None,
        }
    }
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_GAME_FILE` - Game definition to start with (default: `games/game1.txt`)
    /// - `MAZE_SAVE_DIR` - Directory `save` writes to when none is given
    ///   (default: platform data directory)
    /// - `MAZE_PRICES_FILE` - TOML price overrides (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("MAZE_GAME_FILE") {
            config.game_file = path;
        }
        if let Some(path) = read_env::<PathBuf>("MAZE_SAVE_DIR") {
            config.save_dir = path;
        }
        config.prices = read_env::<PathBuf>("MAZE_PRICES_FILE");

        config
    }
}

/// `<data dir>/saves` for the platform, falling back to `./saves`.
pub fn default_save_dir() -> PathBuf {
    ProjectDirs::from("", "", "maze-runner")
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("saves"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}
