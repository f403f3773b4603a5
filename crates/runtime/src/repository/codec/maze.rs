//! Maze save encoding.
//!
//! Output is readable by `game_content::MazeLoader`. The loader trims every
//! row, so an empty tile in the first or last column would shrink the row; such
//! tiles are written as walls instead. The substitution is lossy but keeps the
//! file loadable.

use std::fmt::Write;

use game_core::{GameState, Level, PLAYER_GLYPH, Position, TileKind};

/// Encodes the levels from `current_index` onwards.
///
/// The player is drawn at `player` on the current level and at each later
/// level's entry cell. Levels are renumbered from 1.
pub fn encode_levels(levels: &[Level], current_index: usize, player: Position) -> String {
    let mut out = String::new();
    for (offset, level) in levels.iter().enumerate().skip(current_index) {
        let player = if offset == current_index {
            player
        } else {
            level.entry()
        };
        encode_level(&mut out, offset - current_index + 1, level, player);
    }
    out
}

/// Encodes the remaining levels of `state` with the player where it stands.
pub fn encode(state: &GameState) -> String {
    encode_levels(
        state.levels(),
        state.level_index(),
        state.player().position(),
    )
}

fn encode_level(out: &mut String, number: usize, level: &Level, player: Position) {
    let maze = level.maze();
    let dimensions = maze.dimensions();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Maze {number} - {} {}", dimensions.rows, dimensions.cols);

    for position in maze.positions() {
        out.push(cell_glyph(level, position, player));
        if position.col == dimensions.cols as i32 - 1 {
            out.push('\n');
        }
    }
    out.push('\n');
}

fn cell_glyph(level: &Level, position: Position, player: Position) -> char {
    if position == player {
        return PLAYER_GLYPH;
    }
    if let Some(item) = level.item_at(position) {
        return item.glyph();
    }
    let Some(tile) = level.maze().tile(position) else {
        return TileKind::Wall.glyph();
    };
    match tile.kind() {
        TileKind::Empty if level.maze().dimensions().is_side_column(position) => {
            TileKind::Wall.glyph()
        }
        TileKind::Door => TileKind::Door.glyph(),
        _ => tile.glyph(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::MazeLoader;
    use game_core::CardinalDirection;

    const GAME: &str = "Maze 1 - 3 5\n#####\n#PCD#\n#####\n\nMaze 2 - 3 4\n####\n#PW#\n####\n\n";

    fn state() -> GameState {
        GameState::new(MazeLoader::parse(GAME).unwrap()).unwrap()
    }

    #[test]
    fn fresh_game_encodes_back_to_its_definition() {
        assert_eq!(encode(&state()), GAME);
    }

    #[test]
    fn encodes_player_position_and_unlocked_door() {
        let mut state = state();
        state.move_player(CardinalDirection::East);

        let text = encode(&state);
        assert!(text.starts_with("Maze 1 - 3 5\n#####\n# PD#\n#####\n\n"));
    }

    #[test]
    fn skips_completed_levels_and_renumbers() {
        let mut state = state();
        state.level_up();
        assert_eq!(encode(&state), "Maze 1 - 3 4\n####\n#PW#\n####\n\n");
    }

    #[test]
    fn side_column_empties_become_walls() {
        let levels = MazeLoader::parse("Maze 1 - 2 3\nP L\n# #\n").unwrap();
        let mut state = GameState::new(levels).unwrap();
        state.move_player(CardinalDirection::East);

        let text = encode(&state);
        assert_eq!(text, "Maze 1 - 2 3\n#PL\n# #\n\n");
    }

    #[test]
    fn reparsing_is_idempotent() {
        let mut state = state();
        state.move_player(CardinalDirection::East);
        let once = encode(&state);

        let reparsed = GameState::new(MazeLoader::parse(&once).unwrap()).unwrap();
        assert_eq!(encode(&reparsed), once);
    }

    #[test]
    fn won_game_encodes_to_nothing() {
        let mut state = state();
        state.level_up();
        state.level_up();
        assert_eq!(encode(&state), "");
    }
}
