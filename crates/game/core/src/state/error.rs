//! State management errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemKind;

/// Errors raised by [`GameState`](crate::GameState) construction and item use.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A game needs at least one level.
    #[error("game has no levels")]
    NoLevels,

    #[error("no {kind} held in the inventory")]
    ItemNotHeld { kind: ItemKind },

    #[error("{kind} cannot be used")]
    NotConsumable { kind: ItemKind },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::NoLevels => ErrorSeverity::Fatal,
            StateError::ItemNotHeld { .. } | StateError::NotConsumable { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::NoLevels => "STATE_NO_LEVELS",
            StateError::ItemNotHeld { .. } => "STATE_ITEM_NOT_HELD",
            StateError::NotConsumable { .. } => "STATE_NOT_CONSUMABLE",
        }
    }
}
