//! Item-related state types.
//!
//! - [`ItemKind`]: the closed set of item categories and their glyphs
//! - [`Item`]: one concrete item instance, on the grid or in an inventory

use super::Position;

/// Category of an item.
///
/// The string form (`Coin`, `Potion`, ...) is the kind name used by the stats
/// save file; parsing is exact and case-sensitive.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum ItemKind {
    Coin,
    Potion,
    Honey,
    Apple,
    Water,
    Candy,
}

impl ItemKind {
    /// Single-character encoding used in maze files.
    pub const fn glyph(self) -> char {
        match self {
            ItemKind::Coin => 'C',
            ItemKind::Potion => 'M',
            ItemKind::Honey => 'H',
            ItemKind::Apple => 'A',
            ItemKind::Water => 'W',
            ItemKind::Candy => 'S',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            'C' => Some(ItemKind::Coin),
            'M' => Some(ItemKind::Potion),
            'H' => Some(ItemKind::Honey),
            'A' => Some(ItemKind::Apple),
            'W' => Some(ItemKind::Water),
            'S' => Some(ItemKind::Candy),
            _ => None,
        }
    }

    /// Kind name as written in the stats save file.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Coins are currency; every other kind can be used from the inventory.
    pub const fn is_consumable(self) -> bool {
        !matches!(self, ItemKind::Coin)
    }
}

/// A single item instance.
///
/// Items placed in a level keep the cell they were found on after being
/// picked up; purchased items carry [`Position::ORIGIN`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    kind: ItemKind,
    position: Position,
}

impl Item {
    pub const fn new(kind: ItemKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Creates an item bought from the shop rather than found on the grid.
    pub const fn purchased(kind: ItemKind) -> Self {
        Self::new(kind, Position::ORIGIN)
    }

    pub const fn kind(&self) -> ItemKind {
        self.kind
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn glyph(&self) -> char {
        self.kind.glyph()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn glyphs_are_unique_and_reversible() {
        for kind in ItemKind::iter() {
            assert_eq!(ItemKind::from_glyph(kind.glyph()), Some(kind));
        }
        assert_eq!(ItemKind::from_glyph('#'), None);
    }

    #[test]
    fn kind_names_parse_exactly() {
        assert_eq!(ItemKind::from_str("Candy"), Ok(ItemKind::Candy));
        assert_eq!(ItemKind::Water.name(), "Water");
        assert!(ItemKind::from_str("candy").is_err());
        assert!(ItemKind::from_str("BOGUS").is_err());
    }

    #[test]
    fn purchased_items_sit_at_origin() {
        let item = Item::purchased(ItemKind::Potion);
        assert_eq!(item.position(), Position::ORIGIN);
        assert_eq!(item.glyph(), 'M');
    }
}
