use std::fs;
use std::path::{Path, PathBuf};

use game_content::MazeLoader;
use game_core::GameState;

use super::{MAZE_FILE, STATS_FILE};
use crate::repository::codec::{StatsRecord, serialize_maze, serialize_stats};
use crate::repository::{RepositoryError, Result};

/// Paths of the two files that make up a save directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveLocation {
    pub maze: PathBuf,
    pub stats: PathBuf,
}

impl SaveLocation {
    pub fn in_directory(directory: &Path) -> Self {
        Self {
            maze: directory.join(MAZE_FILE),
            stats: directory.join(STATS_FILE),
        }
    }
}

/// What a validated path turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    Directory(SaveLocation),
    GameFile(PathBuf),
}

/// Reads and writes saves and game definitions on the local file system.
pub struct FileSaveRepository;

impl FileSaveRepository {
    /// Classifies `path` as a save directory or a game file and validates it.
    pub fn validate(path: &Path) -> Result<SaveTarget> {
        if path.is_dir() {
            Self::validate_save_directory(path).map(SaveTarget::Directory)
        } else {
            Self::validate_game_file(path).map(|()| SaveTarget::GameFile(path.to_path_buf()))
        }
    }

    /// A save directory must contain both `maze.txt` and `stats.txt`.
    pub fn validate_save_directory(directory: &Path) -> Result<SaveLocation> {
        let location = SaveLocation::in_directory(directory);
        if directory.is_dir() && location.maze.is_file() && location.stats.is_file() {
            Ok(location)
        } else {
            Err(RepositoryError::InvalidSaveDirectory(
                directory.to_path_buf(),
            ))
        }
    }

    /// A game file must contain at least one line starting with `Maze`.
    pub fn validate_game_file(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(RepositoryError::InvalidGameFile(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        if content.lines().any(|line| line.trim().starts_with("Maze")) {
            Ok(())
        } else {
            Err(RepositoryError::InvalidGameFile(path.to_path_buf()))
        }
    }

    /// Builds a fresh game state from a game-definition or maze save file.
    pub fn load_game(path: &Path) -> Result<GameState> {
        let levels =
            MazeLoader::load(path).map_err(|e| RepositoryError::CorruptedData(format!("{e:#}")))?;
        let state =
            GameState::new(levels).map_err(|e| RepositoryError::CorruptedData(e.to_string()))?;
        tracing::debug!(
            "Loaded game with {} levels from {}",
            state.levels().len(),
            path.display()
        );
        Ok(state)
    }

    pub fn load_stats(path: &Path) -> Result<StatsRecord> {
        let content = fs::read_to_string(path)?;
        StatsRecord::parse(&content)
    }

    /// Applies a saved stats file to a freshly constructed state.
    pub fn deserialize_stats(path: &Path, state: &mut GameState) -> Result<()> {
        let record = Self::load_stats(path)?;
        record.apply_to(state);
        tracing::debug!(
            items = record.inventory.len(),
            "Applied stats from {}",
            path.display()
        );
        Ok(())
    }

    /// Writes both save files into `directory`, creating it if needed.
    pub fn save(directory: &Path, state: &GameState) -> Result<SaveLocation> {
        fs::create_dir_all(directory)?;
        let location = SaveLocation::in_directory(directory);

        write_atomic(&location.maze, &serialize_maze(state))?;
        write_atomic(
            &location.stats,
            &serialize_stats(state.player_stats(), state.inventory()),
        )?;

        tracing::debug!("Saved game to {}", directory.display());
        Ok(location)
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("txt.tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CardinalDirection, ItemKind};
    use tempfile::TempDir;

    const GAME: &str = "Maze 1 - 3 5\n#####\n#PCD#\n#####\n\nMaze 2 - 3 4\n####\n#PW#\n####\n";

    fn game_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("game.txt");
        fs::write(&path, GAME).unwrap();
        path
    }

    #[test]
    fn game_file_needs_a_maze_header() {
        let temp_dir = TempDir::new().unwrap();
        let good = game_file(&temp_dir);
        let bad = temp_dir.path().join("notes.txt");
        fs::write(&bad, "hello\n").unwrap();

        assert_eq!(
            FileSaveRepository::validate(&good).unwrap(),
            SaveTarget::GameFile(good.clone())
        );
        assert!(matches!(
            FileSaveRepository::validate(&bad),
            Err(RepositoryError::InvalidGameFile(_))
        ));
        assert!(matches!(
            FileSaveRepository::validate_game_file(&temp_dir.path().join("missing.txt")),
            Err(RepositoryError::InvalidGameFile(_))
        ));
    }

    #[test]
    fn directory_with_only_maze_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(MAZE_FILE), GAME).unwrap();

        assert!(matches!(
            FileSaveRepository::validate(temp_dir.path()),
            Err(RepositoryError::InvalidSaveDirectory(_))
        ));
    }

    #[test]
    fn save_then_load_restores_progress() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = FileSaveRepository::load_game(&game_file(&temp_dir)).unwrap();
        state.move_player(CardinalDirection::East);

        let save_dir = temp_dir.path().join("slot");
        let location = FileSaveRepository::save(&save_dir, &state).unwrap();
        assert_eq!(
            FileSaveRepository::validate(&save_dir).unwrap(),
            SaveTarget::Directory(location.clone())
        );
        assert!(!save_dir.join("maze.txt.tmp").exists());

        let mut restored = FileSaveRepository::load_game(&location.maze).unwrap();
        FileSaveRepository::deserialize_stats(&location.stats, &mut restored).unwrap();

        assert_eq!(restored.player().position(), state.player().position());
        assert_eq!(restored.player_stats(), state.player_stats());
        assert_eq!(restored.inventory().count(ItemKind::Coin), 1);
        assert_eq!(restored.levels().len(), 2);
    }

    #[test]
    fn corrupt_game_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.txt");
        fs::write(&path, "Maze 1 - 2 3\n#P#\n").unwrap();

        assert!(matches!(
            FileSaveRepository::load_game(&path),
            Err(RepositoryError::CorruptedData(_))
        ));
    }
}
