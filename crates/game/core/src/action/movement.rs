use crate::state::{Item, Position};

/// One of the four grid directions a move can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::South,
        CardinalDirection::East,
        CardinalDirection::West,
    ];

    /// `(row, col)` delta; north is up the screen.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (-1, 0),
            CardinalDirection::South => (1, 0),
            CardinalDirection::East => (0, 1),
            CardinalDirection::West => (0, -1),
        }
    }
}

/// What a single move request did to the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Destination was off the grid or blocking; nothing changed.
    Blocked { destination: Position },
    Moved {
        to: Position,
        picked_up: Option<Item>,
        leveled_up: bool,
    },
}

impl MoveOutcome {
    pub const fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked { .. })
    }
}
