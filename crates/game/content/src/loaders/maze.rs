//! Game-definition loader.
//!
//! A game file is a sequence of blocks:
//!
//! ```text
//! Maze 1 - 3 5
//! #####
//! #PCD#
//! #####
//! ```
//!
//! Each block's header carries the grid size; the following `rows` lines hold
//! one glyph per cell. `P` marks the entry cell and item glyphs place items,
//! both on an empty tile.

use std::path::Path;

use anyhow::{Context, anyhow, bail, ensure};
use game_core::{Item, ItemKind, Level, Maze, PLAYER_GLYPH, Position, Tile, TileKind};

use crate::loaders::{LoadResult, read_file};

/// Prefix that opens every level block.
pub const MAZE_HEADER_PREFIX: &str = "Maze";

/// Parsed `Maze <n> - <rows> <cols>` header line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeHeader {
    pub number: u32,
    pub rows: u32,
    pub cols: u32,
}

impl MazeHeader {
    pub fn parse(line: &str) -> LoadResult<Self> {
        let body = line
            .trim()
            .strip_prefix(MAZE_HEADER_PREFIX)
            .ok_or_else(|| anyhow!("expected '{MAZE_HEADER_PREFIX}' header, found {line:?}"))?;
        let (number, size) = body
            .split_once('-')
            .ok_or_else(|| anyhow!("malformed maze header {line:?}"))?;

        let number = number
            .trim()
            .parse()
            .with_context(|| format!("invalid maze number in {line:?}"))?;
        let mut dims = size.split_whitespace().map(str::parse::<u32>);
        let (Some(Ok(rows)), Some(Ok(cols)), None) = (dims.next(), dims.next(), dims.next()) else {
            bail!("invalid maze size in {line:?}");
        };
        ensure!(rows > 0 && cols > 0, "maze size must be positive in {line:?}");

        Ok(Self { number, rows, cols })
    }
}

/// Loader for game-definition files.
pub struct MazeLoader;

impl MazeLoader {
    /// Load every level from a game-definition file.
    pub fn load(path: &Path) -> LoadResult<Vec<Level>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to parse game {}", path.display()))
    }

    /// Parse every level block in `content`, in file order.
    pub fn parse(content: &str) -> LoadResult<Vec<Level>> {
        let mut lines = content.lines().enumerate();
        let mut levels = Vec::new();

        while let Some((line_no, line)) = lines.next() {
            if line.trim().is_empty() {
                continue;
            }
            let header =
                MazeHeader::parse(line).with_context(|| format!("line {}", line_no + 1))?;

            let mut rows = Vec::with_capacity(header.rows as usize);
            for _ in 0..header.rows {
                let (_, row) = lines.next().ok_or_else(|| {
                    anyhow!("maze {} ends before its {} rows", header.number, header.rows)
                })?;
                rows.push(row.trim());
            }

            let level = Self::parse_level(&header, &rows)
                .with_context(|| format!("maze {}", header.number))?;
            levels.push(level);
        }

        ensure!(!levels.is_empty(), "game contains no '{MAZE_HEADER_PREFIX}' blocks");
        tracing::debug!(levels = levels.len(), "parsed game definition");
        Ok(levels)
    }

    fn parse_level(header: &MazeHeader, rows: &[&str]) -> LoadResult<Level> {
        let mut entry = None;
        let mut items = Vec::new();
        let mut grid = Vec::with_capacity(rows.len());

        for (r, row) in rows.iter().enumerate() {
            let glyphs: Vec<char> = row.chars().collect();
            ensure!(
                glyphs.len() == header.cols as usize,
                "row {} has {} cells, expected {}",
                r + 1,
                glyphs.len(),
                header.cols
            );

            let mut tiles = Vec::with_capacity(glyphs.len());
            for (c, glyph) in glyphs.into_iter().enumerate() {
                let position = Position::new(r as i32, c as i32);
                let kind = if glyph == PLAYER_GLYPH {
                    ensure!(entry.is_none(), "second entry position at {position}");
                    entry = Some(position);
                    TileKind::Empty
                } else if let Some(kind) = ItemKind::from_glyph(glyph) {
                    items.push(Item::new(kind, position));
                    TileKind::Empty
                } else {
                    TileKind::from_glyph(glyph)
                        .ok_or_else(|| anyhow!("unknown glyph {glyph:?} at {position}"))?
                };
                tiles.push(Tile::new(kind));
            }
            grid.push(tiles);
        }

        let entry = entry.ok_or_else(|| anyhow!("no entry position ('{PLAYER_GLYPH}')"))?;
        let maze = Maze::from_rows(grid).ok_or_else(|| anyhow!("empty grid"))?;
        let mut level = Level::new(maze, entry);
        for item in items {
            level.add_item(item);
        }
        Ok(level)
    }
}
