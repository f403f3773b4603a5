//! Stats save encoding.
//!
//! ```text
//! Stats : 80-5-3
//! Inventory
//! Coin-2-3
//! Potion-0-0
//! ```
//!
//! Vitals are stored as absolute values but applied as deltas against a fresh
//! player, whose health is always the full baseline of 100.

use std::str::FromStr;

use game_core::{GameState, Inventory, Item, ItemKind, PlayerStats, Position};

use crate::repository::{RepositoryError, Result};

const STATS_LABEL: &str = "Stats";
const INVENTORY_MARKER: &str = "Inventory";
/// Health a freshly constructed player starts with.
pub const HEALTH_BASELINE: i32 = 100;

/// Writes the stats file body for `stats` and every held item instance.
pub fn serialize_stats(stats: PlayerStats, inventory: &Inventory) -> String {
    let mut out = format!(
        "{STATS_LABEL} : {}-{}-{} \n{INVENTORY_MARKER}\n",
        stats.health, stats.hunger, stats.thirst
    );
    for item in inventory.iter() {
        let position = item.position();
        out.push_str(&format!(
            "{}-{}-{} \n",
            item.name(),
            position.row,
            position.col
        ));
    }
    out
}

/// Relative vitals change recovered from a stats line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatDeltas {
    pub health: i32,
    pub hunger: i32,
    pub thirst: i32,
}

/// Decoded contents of a stats file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsRecord {
    pub stats: Option<PlayerStats>,
    pub inventory: Vec<Item>,
}

impl StatsRecord {
    /// Parses a stats file body.
    ///
    /// Inventory records are read until the first line whose kind name is not
    /// recognised; that line and everything after it are ignored.
    pub fn parse(content: &str) -> Result<Self> {
        let mut record = Self::default();
        let mut in_inventory = false;

        for line in content.lines() {
            if in_inventory {
                match parse_item(line)? {
                    Some(item) => record.inventory.push(item),
                    None => {
                        tracing::debug!(line, "stopping inventory at unrecognised record");
                        break;
                    }
                }
            } else if line.starts_with(STATS_LABEL) {
                record.stats = Some(parse_stats_line(line)?);
            } else if line.starts_with(INVENTORY_MARKER) {
                in_inventory = true;
            }
        }

        Ok(record)
    }

    /// Deltas to apply to a fresh player; zero when no stats line was present.
    pub fn deltas(&self) -> StatDeltas {
        self.stats
            .map(|stats| StatDeltas {
                health: -(HEALTH_BASELINE - stats.health),
                hunger: stats.hunger,
                thirst: stats.thirst,
            })
            .unwrap_or_default()
    }

    /// Applies the vitals deltas and appends the inventory to `state`.
    pub fn apply_to(&self, state: &mut GameState) {
        let deltas = self.deltas();
        let player = state.player_mut();
        player.change_health(deltas.health);
        player.change_hunger(deltas.hunger);
        player.change_thirst(deltas.thirst);

        let inventory = state.inventory_mut();
        for item in &self.inventory {
            inventory.add_item(*item);
        }
    }
}

fn parse_stats_line(line: &str) -> Result<PlayerStats> {
    let body = line
        .trim_start_matches(STATS_LABEL)
        .trim_start()
        .trim_start_matches(':');
    let values = body
        .split('-')
        .map(|token| token.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| RepositoryError::CorruptedData(format!("stats line {line:?}: {e}")))?;

    match values.as_slice() {
        [health, hunger, thirst] => Ok(PlayerStats::new(*health, *hunger, *thirst)),
        _ => Err(RepositoryError::CorruptedData(format!(
            "stats line {line:?} needs three values"
        ))),
    }
}

/// `Ok(None)` marks an unrecognised kind, which ends the inventory.
fn parse_item(line: &str) -> Result<Option<Item>> {
    let mut tokens = line.split('-');
    let Some(kind) = tokens.next().and_then(|name| ItemKind::from_str(name).ok()) else {
        return Ok(None);
    };

    let mut coordinate = || {
        tokens
            .next()
            .and_then(|token| token.trim().parse::<i32>().ok())
            .ok_or_else(|| RepositoryError::CorruptedData(format!("inventory record {line:?}")))
    };
    let row = coordinate()?;
    let col = coordinate()?;

    Ok(Some(Item::new(kind, Position::new(row, col))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::MazeLoader;

    fn state() -> GameState {
        GameState::new(MazeLoader::parse("Maze 1 - 1 3\n#P#\n").unwrap()).unwrap()
    }

    #[test]
    fn serializes_header_and_each_instance() {
        let mut inventory = Inventory::new();
        inventory.add_item(Item::new(ItemKind::Coin, Position::new(2, 3)));
        inventory.add_item(Item::purchased(ItemKind::Potion));

        let text = serialize_stats(PlayerStats::new(80, 5, 3), &inventory);
        assert_eq!(
            text,
            "Stats : 80-5-3 \nInventory\nCoin-2-3 \nPotion-0-0 \n"
        );
    }

    #[test]
    fn stats_line_becomes_relative_deltas() {
        let record = StatsRecord::parse("Stats : 80-5-3 \nInventory\n").unwrap();
        assert_eq!(
            record.deltas(),
            StatDeltas {
                health: -20,
                hunger: 5,
                thirst: 3
            }
        );

        let mut state = state();
        record.apply_to(&mut state);
        assert_eq!(state.player_stats(), PlayerStats::new(80, 5, 3));
    }

    #[test]
    fn unknown_kind_truncates_inventory() {
        let record = StatsRecord::parse(
            "Stats : 100-0-0 \nInventory\nCoin-0-0 \nApple-1-1 \nBOGUS-2-2 \nWater-3-3 \n",
        )
        .unwrap();
        let kinds: Vec<_> = record.inventory.iter().map(Item::kind).collect();
        assert_eq!(kinds, vec![ItemKind::Coin, ItemKind::Apple]);
        assert_eq!(record.inventory[1].position(), Position::new(1, 1));
    }

    #[test]
    fn blank_line_truncates_inventory() {
        let record = StatsRecord::parse("Inventory\nHoney-0-0 \n\nCandy-0-0 \n").unwrap();
        assert_eq!(record.inventory.len(), 1);
        assert_eq!(record.stats, None);
        assert_eq!(record.deltas(), StatDeltas::default());
    }

    #[test]
    fn inventory_header_matches_by_prefix() {
        let record = StatsRecord::parse("Inventory: \nApple-0-0 \n").unwrap();
        assert_eq!(record.inventory.len(), 1);

        let record = StatsRecord::parse(" Inventory\nApple-0-0 \n").unwrap();
        assert!(record.inventory.is_empty());
    }

    #[test]
    fn malformed_numbers_are_corrupted_data() {
        assert!(matches!(
            StatsRecord::parse("Stats : 80-x-3 \n"),
            Err(RepositoryError::CorruptedData(_))
        ));
        assert!(matches!(
            StatsRecord::parse("Stats : 80-3 \n"),
            Err(RepositoryError::CorruptedData(_))
        ));
        assert!(matches!(
            StatsRecord::parse("Inventory\nCoin-1 \n"),
            Err(RepositoryError::CorruptedData(_))
        ));
    }

    #[test]
    fn serialized_stats_reload_into_fresh_state() {
        let mut original = state();
        original.player_mut().change_health(-30);
        original.player_mut().change_thirst(7);
        original
            .inventory_mut()
            .add_item(Item::new(ItemKind::Coin, Position::new(4, 2)));

        let text = serialize_stats(original.player_stats(), original.inventory());
        let mut restored = state();
        StatsRecord::parse(&text).unwrap().apply_to(&mut restored);

        assert_eq!(restored.player_stats(), original.player_stats());
        assert_eq!(restored.inventory(), original.inventory());
    }
}
