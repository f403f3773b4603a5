//! Authoritative game state.
//!
//! [`GameState`] aggregates every level of a loaded game together with the
//! player's position, vitals and inventory. Mutations go through a small set of
//! methods so the level-up flag and the win/loss predicates stay consistent.
mod error;
pub mod types;

pub use error::StateError;
pub use types::{Inventory, Item, ItemKind, Player, PlayerStats, Position};

use crate::action::{CardinalDirection, MoveOutcome};
use crate::config::GameConfig;
use crate::env::{Level, Maze};

/// Complete mutable state of one playthrough.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    levels: Vec<Level>,
    level_index: usize,
    player: Player,
    inventory: Inventory,
    /// Successful moves so far; drives the hunger/thirst cadence.
    moves: u32,
    leveled_up: bool,
}

impl GameState {
    /// Starts a playthrough on the first level's entry cell.
    pub fn new(levels: Vec<Level>) -> Result<Self, StateError> {
        let entry = levels.first().ok_or(StateError::NoLevels)?.entry();
        Ok(Self {
            levels,
            level_index: 0,
            player: Player::new(entry),
            inventory: Inventory::new(),
            moves: 0,
            leveled_up: false,
        })
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// The level being played, `None` once the game is won.
    pub fn current_level(&self) -> Option<&Level> {
        self.levels.get(self.level_index)
    }

    pub fn current_maze(&self) -> Option<&Maze> {
        self.current_level().map(Level::maze)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn player_stats(&self) -> PlayerStats {
        self.player.stats()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn has_won(&self) -> bool {
        self.level_index >= self.levels.len()
    }

    pub fn has_lost(&self) -> bool {
        self.player.is_dead()
    }

    /// Whether the last move (or explicit [`level_up`](Self::level_up)) took the
    /// player to a new level.
    pub fn did_level_up(&self) -> bool {
        self.leveled_up
    }

    pub fn clear_level_up(&mut self) {
        self.leveled_up = false;
    }

    /// Advances to the next level and places the player on its entry cell.
    pub fn level_up(&mut self) {
        self.level_index += 1;
        self.leveled_up = true;
        if let Some(level) = self.levels.get(self.level_index) {
            self.player.set_position(level.entry());
        }
    }

    /// Unlocks the current level's doors if no coins remain on it.
    pub fn attempt_unlock_door(&mut self) -> bool {
        self.levels
            .get_mut(self.level_index)
            .is_some_and(Level::attempt_unlock_door)
    }

    /// Moves the player one cell.
    ///
    /// Moving off the grid or into a blocking tile changes nothing. A
    /// successful move costs health (plus any tile damage), periodically raises
    /// hunger and thirst, picks up the item on the destination, and levels up
    /// when the destination is an unlocked door.
    pub fn move_player(&mut self, direction: CardinalDirection) -> MoveOutcome {
        self.leveled_up = false;
        let destination = self.player.position().offset(direction.delta());

        let Some(level) = self.levels.get_mut(self.level_index) else {
            return MoveOutcome::Blocked { destination };
        };
        let tile = match level.maze().tile(destination) {
            Some(tile) if !tile.is_blocking() => tile,
            _ => return MoveOutcome::Blocked { destination },
        };

        self.player.set_position(destination);
        self.player
            .change_health(-(GameConfig::MOVE_HEALTH_COST + tile.damage()));
        self.moves += 1;
        if self.moves % GameConfig::VITALS_DECAY_INTERVAL == 0 {
            self.player.change_hunger(1);
            self.player.change_thirst(1);
        }

        let picked_up = level.remove_item(destination);
        if let Some(item) = picked_up {
            self.inventory.add_item(item);
        }
        level.attempt_unlock_door();

        let leveled_up = tile.is_door();
        if leveled_up {
            self.level_up();
        }

        MoveOutcome::Moved {
            to: destination,
            picked_up,
            leveled_up,
        }
    }

    /// Consumes the oldest held instance of `kind` and applies its effect.
    pub fn use_item(&mut self, kind: ItemKind) -> Result<Item, StateError> {
        if !kind.is_consumable() {
            return Err(StateError::NotConsumable { kind });
        }
        let item = self
            .inventory
            .take_first(kind)
            .ok_or(StateError::ItemNotHeld { kind })?;
        kind.apply(&mut self.player);
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Tile, TileKind};

    fn level(rows: &[&str]) -> Level {
        let mut entry = Position::ORIGIN;
        let mut items = Vec::new();
        let tiles = rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.chars()
                    .enumerate()
                    .map(|(c, glyph)| {
                        let position = Position::new(r as i32, c as i32);
                        if glyph == crate::PLAYER_GLYPH {
                            entry = position;
                        } else if let Some(kind) = ItemKind::from_glyph(glyph) {
                            items.push(Item::new(kind, position));
                        }
                        Tile::new(TileKind::from_glyph(glyph).unwrap_or(TileKind::Empty))
                    })
                    .collect()
            })
            .collect();
        let mut level = Level::new(Maze::from_rows(tiles).unwrap(), entry);
        items.into_iter().for_each(|item| level.add_item(item));
        level
    }

    fn two_levels() -> GameState {
        GameState::new(vec![
            level(&["#####", "#PCD#", "#####"]),
            level(&["#####", "# PA#", "#####"]),
        ])
        .unwrap()
    }

    #[test]
    fn empty_game_is_rejected() {
        assert_eq!(GameState::new(Vec::new()), Err(StateError::NoLevels));
    }

    #[test]
    fn walls_block_without_cost() {
        let mut state = two_levels();
        let outcome = state.move_player(CardinalDirection::North);
        assert!(outcome.is_blocked());
        assert_eq!(state.player_stats(), PlayerStats::default());
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn collecting_last_coin_opens_door_to_next_level() {
        let mut state = two_levels();

        let outcome = state.move_player(CardinalDirection::East);
        assert!(matches!(outcome, MoveOutcome::Moved { picked_up: Some(_), .. }));
        assert_eq!(state.inventory().coins(), 1);
        assert_eq!(state.player().health(), GameConfig::MAX_HEALTH - 1);

        state.move_player(CardinalDirection::East);
        assert!(state.did_level_up());
        assert_eq!(state.level_index(), 1);
        assert_eq!(state.player().position(), Position::new(1, 2));

        state.move_player(CardinalDirection::West);
        assert!(!state.did_level_up());
    }

    #[test]
    fn leveling_past_last_level_wins() {
        let mut state = two_levels();
        state.level_up();
        state.level_up();
        assert!(state.has_won());
        assert!(state.current_level().is_none());
        assert!(state.move_player(CardinalDirection::East).is_blocked());
    }

    #[test]
    fn lava_is_lethal() {
        let mut state = GameState::new(vec![level(&["#PL#"])]).unwrap();
        state.move_player(CardinalDirection::East);
        assert!(state.has_lost());
        assert_eq!(state.player().health(), 0);
    }

    #[test]
    fn hunger_and_thirst_rise_every_fifth_move() {
        let mut state = GameState::new(vec![level(&["#P  #"])]).unwrap();
        for _ in 0..2 {
            state.move_player(CardinalDirection::East);
            state.move_player(CardinalDirection::West);
        }
        assert_eq!(state.player().hunger(), 0);
        state.move_player(CardinalDirection::East);
        assert_eq!(state.player().hunger(), 1);
        assert_eq!(state.player().thirst(), 1);
    }

    #[test]
    fn use_item_consumes_oldest_instance() {
        let mut state = two_levels();
        state
            .inventory_mut()
            .add_item(Item::new(ItemKind::Water, Position::new(3, 3)));
        state.inventory_mut().add_item(Item::purchased(ItemKind::Water));
        state.player_mut().change_thirst(20);

        let used = state.use_item(ItemKind::Water).unwrap();
        assert_eq!(used.position(), Position::new(3, 3));
        assert_eq!(state.player().thirst(), 15);
        assert_eq!(state.inventory().count(ItemKind::Water), 1);

        assert_eq!(
            state.use_item(ItemKind::Honey),
            Err(StateError::ItemNotHeld { kind: ItemKind::Honey })
        );
        assert_eq!(
            state.use_item(ItemKind::Coin),
            Err(StateError::NotConsumable { kind: ItemKind::Coin })
        );
    }
}
