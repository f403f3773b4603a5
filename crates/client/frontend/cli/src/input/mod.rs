//! Input processing for the CLI client.
//!
//! This module owns the line-to-command mapping so the rest of the
//! application can remain agnostic about concrete command spellings.

use std::path::PathBuf;
use std::str::FromStr;

use game_core::{CardinalDirection, ItemKind};
use thiserror::Error;

/// High-level command decoded from one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(CardinalDirection),
    Use(ItemKind),
    Buy(ItemKind),
    Prices,
    Restart,
    NewGame(PathBuf),
    Load(PathBuf),
    /// Save into the given directory, or the configured one.
    Save(Option<PathBuf>),
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("type a command (help lists them)")]
    Empty,

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unknown item {0:?}")]
    UnknownItem(String),
}

pub const HELP: &str = "\
w/a/s/d      move up/left/down/right
use <Item>   consume an item (Potion, Honey, Apple, Water, Candy)
buy <Item>   buy an item with coins
prices       show the shop
restart      replay from the start of the current level
new <file>   start a game file
load <dir>   resume a save directory
save [dir]   save the game
quit         leave";

/// Parses one line of input. Keywords are case-insensitive; item names and
/// paths are taken as typed, except that item names may be lowercase.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "w" => Command::Move(CardinalDirection::North),
        "a" => Command::Move(CardinalDirection::West),
        "s" => Command::Move(CardinalDirection::South),
        "d" => Command::Move(CardinalDirection::East),
        "use" => Command::Use(parse_item("use", rest)?),
        "buy" => Command::Buy(parse_item("buy", rest)?),
        "prices" | "shop" => Command::Prices,
        "restart" => Command::Restart,
        "new" => Command::NewGame(required_path("new", rest)?),
        "load" => Command::Load(required_path("load", rest)?),
        "save" => Command::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn parse_item(command: &'static str, raw: &str) -> Result<ItemKind, InputError> {
    if raw.is_empty() {
        return Err(InputError::MissingArgument {
            command,
            argument: "an item name",
        });
    }
    let mut chars = raw.chars();
    let capitalized: String = chars
        .next()
        .map(|first| first.to_ascii_uppercase())
        .into_iter()
        .chain(chars.map(|ch| ch.to_ascii_lowercase()))
        .collect();
    ItemKind::from_str(&capitalized).map_err(|_| InputError::UnknownItem(raw.to_string()))
}

fn required_path(command: &'static str, raw: &str) -> Result<PathBuf, InputError> {
    if raw.is_empty() {
        Err(InputError::MissingArgument {
            command,
            argument: "a path",
        })
    } else {
        Ok(PathBuf::from(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_movement_keys() {
        assert_eq!(
            parse_command("w"),
            Ok(Command::Move(CardinalDirection::North))
        );
        assert_eq!(
            parse_command(" D "),
            Ok(Command::Move(CardinalDirection::East))
        );
    }

    #[test]
    fn parses_item_commands() {
        assert_eq!(parse_command("use potion"), Ok(Command::Use(ItemKind::Potion)));
        assert_eq!(parse_command("BUY Candy"), Ok(Command::Buy(ItemKind::Candy)));
        assert_eq!(
            parse_command("use sword"),
            Err(InputError::UnknownItem("sword".into()))
        );
        assert!(matches!(
            parse_command("buy"),
            Err(InputError::MissingArgument { command: "buy", .. })
        ));
    }

    #[test]
    fn parses_file_commands() {
        assert_eq!(
            parse_command("load saves/slot 1"),
            Ok(Command::Load(PathBuf::from("saves/slot 1")))
        );
        assert_eq!(parse_command("save"), Ok(Command::Save(None)));
        assert_eq!(
            parse_command("new games/game2.txt"),
            Ok(Command::NewGame(PathBuf::from("games/game2.txt")))
        );
        assert!(parse_command("new").is_err());
    }

    #[test]
    fn maps_quit_and_rejects_unknown() {
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command(""), Err(InputError::Empty));
        assert_eq!(
            parse_command("jump"),
            Err(InputError::UnknownCommand("jump".into()))
        );
    }
}
