//! Notices emitted by the session for front-ends to surface.
use game_core::ItemKind;

/// One-off messages sent to the [`Presenter`](super::Presenter) alongside
/// regular redraws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The player reached a new level; `level` is 1-based.
    LevelUp { level: usize },
    Won,
    Lost,
    InsufficientFunds {
        kind: ItemKind,
        coins: usize,
        price: u32,
    },
}
