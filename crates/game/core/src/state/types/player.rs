//! Player position and vitals.

use crate::config::GameConfig;

use super::Position;

/// Snapshot of the player's vitals as `(health, hunger, thirst)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerStats {
    pub health: i32,
    pub hunger: i32,
    pub thirst: i32,
}

impl PlayerStats {
    pub const fn new(health: i32, hunger: i32, thirst: i32) -> Self {
        Self {
            health,
            hunger,
            thirst,
        }
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(
            GameConfig::MAX_HEALTH,
            GameConfig::STARTING_HUNGER,
            GameConfig::STARTING_THIRST,
        )
    }
}

/// The controllable player.
///
/// Vitals only change through the relative `change_*` operations, each of
/// which clamps the result to `[0, max]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    position: Position,
    stats: PlayerStats,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self::with_stats(position, PlayerStats::default())
    }

    pub fn with_stats(position: Position, stats: PlayerStats) -> Self {
        Self { position, stats }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn hunger(&self) -> i32 {
        self.stats.hunger
    }

    pub fn thirst(&self) -> i32 {
        self.stats.thirst
    }

    pub fn change_health(&mut self, delta: i32) {
        self.stats.health = clamp_change(self.stats.health, delta, GameConfig::MAX_HEALTH);
    }

    pub fn change_hunger(&mut self, delta: i32) {
        self.stats.hunger = clamp_change(self.stats.hunger, delta, GameConfig::MAX_HUNGER);
    }

    pub fn change_thirst(&mut self, delta: i32) {
        self.stats.thirst = clamp_change(self.stats.thirst, delta, GameConfig::MAX_THIRST);
    }

    /// Out of health, or starved, or dehydrated.
    pub fn is_dead(&self) -> bool {
        self.stats.health <= 0
            || self.stats.hunger >= GameConfig::MAX_HUNGER
            || self.stats.thirst >= GameConfig::MAX_THIRST
    }
}

fn clamp_change(current: i32, delta: i32, maximum: i32) -> i32 {
    current.saturating_add(delta).clamp(0, maximum)
}
