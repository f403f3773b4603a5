//! Game content and loaders.
//!
//! This crate turns data files into `game-core` values:
//! - Game definitions (maze text format) into [`game_core::Level`]s
//! - Shop price overrides (TOML) into a kind-to-price table
//!
//! Content is consumed by the runtime when a session starts or a new game is
//! loaded; nothing here holds mutable session state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, MazeHeader, MazeLoader, PriceLoader};
