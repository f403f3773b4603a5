//! Static level data.
//!
//! A game is a sequence of [`Level`]s, each wrapping a [`Maze`] grid together
//! with its item placements and entry cell.
mod level;
mod map;

pub use level::Level;
pub use map::{MapDimensions, Maze, Tile, TileKind};
