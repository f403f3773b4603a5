//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the save repository, the economy, and game-state
//! validation so hosts can report them with consistent context.
use game_core::{ErrorSeverity, GameError, StateError};
use thiserror::Error;

pub use crate::economy::EconomyError;
pub use crate::repository::RepositoryError;
use crate::session::SessionStatus;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session is over ({status}); restart or load a game")]
    NotPlaying { status: SessionStatus },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Economy(#[from] EconomyError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::NotPlaying { .. } => ErrorSeverity::Recoverable,
            RuntimeError::Repository(RepositoryError::Io(_)) => ErrorSeverity::Recoverable,
            RuntimeError::Repository(_) => ErrorSeverity::Validation,
            RuntimeError::Economy(err) => err.severity(),
            RuntimeError::State(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::NotPlaying { .. } => "RUNTIME_NOT_PLAYING",
            RuntimeError::Repository(RepositoryError::Io(_)) => "REPOSITORY_IO",
            RuntimeError::Repository(RepositoryError::InvalidSaveDirectory(_)) => {
                "REPOSITORY_INVALID_SAVE_DIRECTORY"
            }
            RuntimeError::Repository(RepositoryError::InvalidGameFile(_)) => {
                "REPOSITORY_INVALID_GAME_FILE"
            }
            RuntimeError::Repository(RepositoryError::CorruptedData(_)) => {
                "REPOSITORY_CORRUPTED_DATA"
            }
            RuntimeError::Economy(err) => err.error_code(),
            RuntimeError::State(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ItemKind;

    #[test]
    fn codes_and_severity_follow_the_wrapped_error() {
        let not_playing = RuntimeError::NotPlaying {
            status: SessionStatus::Won,
        };
        assert_eq!(not_playing.error_code(), "RUNTIME_NOT_PLAYING");
        assert!(not_playing.severity().is_recoverable());

        let missing = RuntimeError::Repository(RepositoryError::InvalidSaveDirectory(
            std::path::PathBuf::from("slot"),
        ));
        assert_eq!(missing.error_code(), "REPOSITORY_INVALID_SAVE_DIRECTORY");
        assert_eq!(missing.severity(), ErrorSeverity::Validation);

        let held = RuntimeError::from(StateError::ItemNotHeld {
            kind: ItemKind::Potion,
        });
        assert_eq!(held.error_code(), "STATE_ITEM_NOT_HELD");
        assert_eq!(held.severity().as_str(), "validation");

        let sale = RuntimeError::from(EconomyError::NotForSale {
            kind: ItemKind::Coin,
        });
        assert_eq!(sale.error_code(), "ECONOMY_NOT_FOR_SALE");
        assert!(!sale.severity().is_recoverable());

        assert_eq!(
            RuntimeError::from(StateError::NoLevels).severity(),
            ErrorSeverity::Fatal
        );
    }
}
