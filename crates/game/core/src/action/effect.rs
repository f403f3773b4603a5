//! One-shot stat modifiers applied when an item is consumed.

use crate::config::GameConfig;
use crate::state::{ItemKind, Player};

/// Relative vitals change carried by a consumable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemEffect {
    pub health: i32,
    pub hunger: i32,
    pub thirst: i32,
}

impl ItemEffect {
    pub const NONE: Self = Self::new(0, 0, 0);

    pub const fn new(health: i32, hunger: i32, thirst: i32) -> Self {
        Self {
            health,
            hunger,
            thirst,
        }
    }

    pub fn apply(self, player: &mut Player) {
        if self.health != 0 {
            player.change_health(self.health);
        }
        if self.hunger != 0 {
            player.change_hunger(self.hunger);
        }
        if self.thirst != 0 {
            player.change_thirst(self.thirst);
        }
    }
}

impl ItemKind {
    pub const fn effect(self) -> ItemEffect {
        match self {
            ItemKind::Coin => ItemEffect::NONE,
            ItemKind::Potion => ItemEffect::new(GameConfig::POTION_HEAL, 0, 0),
            ItemKind::Honey => ItemEffect::new(0, -GameConfig::HONEY_NOURISHMENT, 0),
            ItemKind::Apple => ItemEffect::new(0, -GameConfig::APPLE_NOURISHMENT, 0),
            ItemKind::Water => ItemEffect::new(0, 0, -GameConfig::WATER_HYDRATION),
            ItemKind::Candy => ItemEffect::new(
                -GameConfig::CANDY_HEALTH_COST,
                -GameConfig::CANDY_NOURISHMENT,
                0,
            ),
        }
    }

    pub fn apply(self, player: &mut Player) {
        self.effect().apply(player);
    }
}
