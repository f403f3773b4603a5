//! Plaintext codecs for the two-file save layout.

pub mod maze;
pub mod stats;

pub use maze::{encode as serialize_maze, encode_levels};
pub use stats::{HEALTH_BASELINE, StatDeltas, StatsRecord, serialize_stats};
