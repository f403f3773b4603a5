//! Content loaders for reading game data from files.
//!
//! Loaders parse from a string first and expose a `load(path)` wrapper, so the
//! parsing rules can be exercised without touching the file system.

pub mod maze;
pub mod prices;

pub use maze::{MazeHeader, MazeLoader};
pub use prices::PriceLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
