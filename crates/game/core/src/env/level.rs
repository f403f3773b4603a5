use std::collections::BTreeMap;

use crate::state::{Item, ItemKind, Position};

use super::Maze;

/// A single level: its grid, the items still lying on it, and the cell the
/// player enters on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    maze: Maze,
    items: BTreeMap<Position, Item>,
    entry: Position,
}

impl Level {
    pub fn new(maze: Maze, entry: Position) -> Self {
        Self {
            maze,
            items: BTreeMap::new(),
            entry,
        }
    }

    /// Places an item, replacing whatever item already occupied the cell.
    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.position(), item);
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn entry(&self) -> Position {
        self.entry
    }

    pub fn items(&self) -> &BTreeMap<Position, Item> {
        &self.items
    }

    pub fn item_at(&self, position: Position) -> Option<&Item> {
        self.items.get(&position)
    }

    pub fn remove_item(&mut self, position: Position) -> Option<Item> {
        self.items.remove(&position)
    }

    pub fn coins_remaining(&self) -> usize {
        self.items
            .values()
            .filter(|item| item.kind() == ItemKind::Coin)
            .count()
    }

    /// Unlocks the level's doors once every coin has been collected.
    ///
    /// Returns whether the doors are unlocked after the call.
    pub fn attempt_unlock_door(&mut self) -> bool {
        if self.coins_remaining() > 0 {
            return false;
        }
        self.maze.unlock_doors();
        true
    }
}
