/// Rule constants for the maze game.
///
/// The values are fixed for every session; the save format depends on
/// `MAX_HEALTH` being the starting health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== vitals =====
    pub const MAX_HEALTH: i32 = 100;
    pub const MAX_HUNGER: i32 = 100;
    pub const MAX_THIRST: i32 = 100;
    pub const STARTING_HUNGER: i32 = 0;
    pub const STARTING_THIRST: i32 = 0;

    // ===== movement =====
    /// Health lost on every successful move.
    pub const MOVE_HEALTH_COST: i32 = 1;
    /// Hunger and thirst each grow by one every this many successful moves.
    pub const VITALS_DECAY_INTERVAL: u32 = 5;

    // ===== terrain =====
    /// Damage dealt by stepping on lava; always lethal.
    pub const LAVA_DAMAGE: i32 = Self::MAX_HEALTH;

    // ===== items =====
    pub const POTION_HEAL: i32 = 20;
    pub const HONEY_NOURISHMENT: i32 = 5;
    pub const APPLE_NOURISHMENT: i32 = 1;
    pub const WATER_HYDRATION: i32 = 5;
    pub const CANDY_NOURISHMENT: i32 = 10;
    pub const CANDY_HEALTH_COST: i32 = 2;
}
