pub mod common;
pub mod inventory;
pub mod item;
pub mod player;

pub use common::Position;
pub use inventory::Inventory;
pub use item::{Item, ItemKind};
pub use player::{Player, PlayerStats};
