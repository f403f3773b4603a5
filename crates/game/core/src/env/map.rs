use crate::config::GameConfig;
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl MapDimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < self.rows as i32
            && position.col < self.cols as i32
    }

    pub const fn area(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether `position` lies in the first or last column.
    pub fn is_side_column(&self, position: Position) -> bool {
        position.col == 0 || position.col == self.cols as i32 - 1
    }
}

/// Canonical tile classes of a maze grid.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum TileKind {
    Wall,
    Empty,
    Lava,
    Door,
}

impl TileKind {
    pub const fn glyph(self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Empty => ' ',
            TileKind::Lava => 'L',
            TileKind::Door => 'D',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '#' => Some(TileKind::Wall),
            ' ' => Some(TileKind::Empty),
            'L' => Some(TileKind::Lava),
            'D' => Some(TileKind::Door),
            _ => None,
        }
    }
}

/// One cell of a maze grid.
///
/// Doors start locked. An unlocked door stops blocking and reports the empty
/// glyph, so persistence has to look at [`Tile::kind`] to keep it a door.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    kind: TileKind,
    unlocked: bool,
}

impl Tile {
    pub const fn new(kind: TileKind) -> Self {
        Self {
            kind,
            unlocked: false,
        }
    }

    pub const fn kind(self) -> TileKind {
        self.kind
    }

    pub const fn is_door(self) -> bool {
        matches!(self.kind, TileKind::Door)
    }

    pub const fn is_unlocked(self) -> bool {
        self.unlocked
    }

    pub fn unlock(&mut self) {
        if self.is_door() {
            self.unlocked = true;
        }
    }

    pub const fn is_blocking(self) -> bool {
        match self.kind {
            TileKind::Wall => true,
            TileKind::Door => !self.unlocked,
            TileKind::Empty | TileKind::Lava => false,
        }
    }

    /// Health lost on top of the regular move cost when entering the tile.
    pub const fn damage(self) -> i32 {
        match self.kind {
            TileKind::Lava => GameConfig::LAVA_DAMAGE,
            _ => 0,
        }
    }

    /// Glyph shown for the tile in its current state.
    pub const fn glyph(self) -> char {
        if self.is_door() && self.unlocked {
            TileKind::Empty.glyph()
        } else {
            self.kind.glyph()
        }
    }
}

impl From<TileKind> for Tile {
    fn from(kind: TileKind) -> Self {
        Self::new(kind)
    }
}

/// Row-major rectangular grid of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    dimensions: MapDimensions,
    tiles: Vec<Tile>,
}

impl Maze {
    /// Builds a maze from rows of tiles. Returns `None` when the rows are not
    /// all `cols` wide or there are no rows.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Option<Self> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let dimensions = MapDimensions::new(rows.len() as u32, cols as u32);
        let tiles = rows.into_iter().flatten().collect();
        Some(Self { dimensions, tiles })
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|idx| self.tiles[idx])
    }

    /// Unlocks every door on the grid.
    pub fn unlock_doors(&mut self) {
        self.tiles.iter_mut().for_each(Tile::unlock);
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.dimensions.cols as i32;
        (0..self.dimensions.rows as i32)
            .flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.row as usize * self.dimensions.cols as usize + position.col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze() -> Maze {
        let row = |glyphs: &str| {
            glyphs
                .chars()
                .filter_map(TileKind::from_glyph)
                .map(Tile::new)
                .collect::<Vec<_>>()
        };
        Maze::from_rows(vec![row("###"), row("# D"), row("#L#")]).unwrap()
    }

    #[test]
    fn door_unlocks_into_passable_empty_glyph() {
        let mut maze = maze();
        let door = Position::new(1, 2);
        assert!(maze.tile(door).unwrap().is_blocking());

        maze.unlock_doors();
        let tile = maze.tile(door).unwrap();
        assert!(!tile.is_blocking());
        assert_eq!(tile.glyph(), ' ');
        assert_eq!(tile.kind(), TileKind::Door);
    }

    #[test]
    fn out_of_bounds_tiles_are_absent() {
        let maze = maze();
        assert_eq!(maze.tile(Position::new(-1, 0)), None);
        assert_eq!(maze.tile(Position::new(0, 3)), None);
        assert_eq!(maze.tile(Position::new(2, 1)).map(Tile::damage), Some(GameConfig::LAVA_DAMAGE));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![Tile::new(TileKind::Wall)], vec![]];
        assert!(Maze::from_rows(rows).is_none());
    }

    #[test]
    fn positions_are_row_major() {
        let positions: Vec<_> = maze().positions().take(4).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0)
            ]
        );
    }
}
