//! File-based save repository.
//!
//! A save is a directory holding `maze.txt` (remaining levels, player
//! position) and `stats.txt` (vitals, inventory). A game definition is a single
//! maze-format file.

mod save;

pub use save::{FileSaveRepository, SaveLocation, SaveTarget};

/// File name of the maze half of a save.
pub const MAZE_FILE: &str = "maze.txt";
/// File name of the stats half of a save.
pub const STATS_FILE: &str = "stats.txt";
