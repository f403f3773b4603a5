use std::fmt;

/// Discrete grid position expressed as `(row, col)` tile coordinates.
///
/// Rows grow downwards and columns grow to the right, matching the order in
/// which a maze file lists its cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Top-left cell; also the position recorded for purchased items, which
    /// never sit on the grid.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by a `(row, col)` delta.
    pub const fn offset(self, (dr, dc): (i32, i32)) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
