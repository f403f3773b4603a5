//! Player actions: grid movement and item consumption.
//!
//! - `movement`: directions and the outcome of a move request
//! - `effect`: per-kind vitals changes applied by consumables

pub mod effect;
pub mod movement;

pub use effect::ItemEffect;
pub use movement::{CardinalDirection, MoveOutcome};
