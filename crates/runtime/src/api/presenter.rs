//! Presentation collaborator driven by the session controller.
use std::collections::BTreeMap;

use game_core::{Inventory, Item, Maze, PlayerStats, Position};

use super::events::Notice;

/// Everything a front-end needs to draw the current level.
#[derive(Clone, Copy, Debug)]
pub struct RenderFrame<'a> {
    pub maze: &'a Maze,
    pub items: &'a BTreeMap<Position, Item>,
    pub player: Position,
    pub inventory: &'a Inventory,
    pub stats: PlayerStats,
    /// 1-based number of the level being played.
    pub level: usize,
}

/// Front-end hooks invoked synchronously by
/// [`SessionController`](crate::SessionController).
///
/// Implementations must not call back into the controller.
pub trait Presenter {
    fn draw(&mut self, frame: &RenderFrame<'_>);

    fn notify(&mut self, notice: &Notice);
}
