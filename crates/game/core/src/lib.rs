//! Deterministic maze rules shared by the runtime and its hosts.
//!
//! `game-core` defines the canonical model of a maze adventure: the tile grid
//! of every level, the items placed on it, the player's vitals and inventory,
//! and the [`GameState`] that moves the player from level to level. All state
//! mutation flows through [`GameState`]; loaders and persistence live in the
//! crates that depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use action::{CardinalDirection, ItemEffect, MoveOutcome};
pub use config::GameConfig;
pub use env::{Level, MapDimensions, Maze, Tile, TileKind};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    GameState, Inventory, Item, ItemKind, Player, PlayerStats, Position, StateError,
};

/// Glyph marking the player, or a level's entry position in a maze file.
pub const PLAYER_GLYPH: char = 'P';
