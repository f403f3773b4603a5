//! Error types raised by the save repository and its codecs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while reading or writing saves and game definitions.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{} is not a save directory (needs maze.txt and stats.txt)", .0.display())]
    InvalidSaveDirectory(PathBuf),

    #[error("{} is not a game file (no 'Maze' header)", .0.display())]
    InvalidGameFile(PathBuf),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
