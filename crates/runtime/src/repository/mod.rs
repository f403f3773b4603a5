//! Repository layer for saved sessions.
//!
//! Repositories handle data that CHANGES during play:
//! - Remaining levels and player position (`maze.txt`)
//! - Player vitals and inventory (`stats.txt`)
//!
//! Game definitions are parsed by `game-content`; this layer only validates
//! paths and wires the codecs to the file system.

pub mod codec;
mod error;
pub mod file;

pub use codec::{StatDeltas, StatsRecord, encode_levels, serialize_maze, serialize_stats};
pub use error::{RepositoryError, Result};
pub use file::{FileSaveRepository, MAZE_FILE, STATS_FILE, SaveLocation, SaveTarget};
