//! Player inventory.
//!
//! Items are grouped by kind; each kind keeps its instances in acquisition
//! order so consumption and coin deduction always take the oldest first.

use std::collections::BTreeMap;

use super::{Item, ItemKind};

/// Per-kind item sequences held by the player.
///
/// A kind whose last instance was consumed stays present with an empty
/// sequence. Kinds iterate in [`ItemKind`] declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Inventory {
    items: BTreeMap<ItemKind, Vec<Item>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an instance to the end of its kind's sequence.
    pub fn add_item(&mut self, item: Item) {
        self.items.entry(item.kind()).or_default().push(item);
    }

    pub fn items(&self) -> &BTreeMap<ItemKind, Vec<Item>> {
        &self.items
    }

    /// Returns the sequence held for `kind`, empty if the kind was never held.
    pub fn get(&self, kind: ItemKind) -> &[Item] {
        self.items.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        self.get(kind).len()
    }

    pub fn coins(&self) -> usize {
        self.count(ItemKind::Coin)
    }

    /// Kinds currently present, including kinds with an empty sequence.
    pub fn kinds(&self) -> impl Iterator<Item = ItemKind> + '_ {
        self.items.keys().copied()
    }

    /// Every held instance, kind by kind, in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.items.values().all(Vec::is_empty)
    }

    /// Removes and returns the oldest instance of `kind`.
    pub fn take_first(&mut self, kind: ItemKind) -> Option<Item> {
        let sequence = self.items.get_mut(&kind)?;
        if sequence.is_empty() {
            None
        } else {
            Some(sequence.remove(0))
        }
    }

    /// Removes exactly `count` instances from the front of `kind`.
    ///
    /// Returns `None` without touching the inventory when fewer than `count`
    /// are held.
    pub fn take_front(&mut self, kind: ItemKind, count: usize) -> Option<Vec<Item>> {
        if self.count(kind) < count {
            return None;
        }
        if count == 0 {
            return Some(Vec::new());
        }
        let sequence = self.items.get_mut(&kind)?;
        Some(sequence.drain(..count).collect())
    }

    /// Overwrites the whole sequence held for `kind`.
    pub fn replace(&mut self, kind: ItemKind, sequence: Vec<Item>) {
        self.items.insert(kind, sequence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    fn coin(row: i32) -> Item {
        Item::new(ItemKind::Coin, Position::new(row, 0))
    }

    #[test]
    fn take_first_is_fifo() {
        let mut inventory = Inventory::new();
        inventory.add_item(coin(1));
        inventory.add_item(coin(2));

        assert_eq!(inventory.take_first(ItemKind::Coin), Some(coin(1)));
        assert_eq!(inventory.get(ItemKind::Coin), &[coin(2)]);
    }

    #[test]
    fn emptied_kinds_remain_present() {
        let mut inventory = Inventory::new();
        inventory.add_item(Item::purchased(ItemKind::Apple));
        inventory.take_first(ItemKind::Apple);

        assert_eq!(inventory.kinds().collect::<Vec<_>>(), vec![ItemKind::Apple]);
        assert!(inventory.is_empty());
        assert_eq!(inventory.take_first(ItemKind::Apple), None);
    }

    #[test]
    fn take_front_is_all_or_nothing() {
        let mut inventory = Inventory::new();
        inventory.add_item(coin(1));
        inventory.add_item(coin(2));

        assert_eq!(inventory.take_front(ItemKind::Coin, 3), None);
        assert_eq!(inventory.coins(), 2);

        assert_eq!(inventory.take_front(ItemKind::Coin, 2), Some(vec![coin(1), coin(2)]));
        assert_eq!(inventory.coins(), 0);
    }

    #[test]
    fn iter_walks_kinds_in_declaration_order() {
        let mut inventory = Inventory::new();
        inventory.add_item(Item::purchased(ItemKind::Water));
        inventory.add_item(coin(4));

        let kinds: Vec<_> = inventory.iter().map(Item::kind).collect();
        assert_eq!(kinds, vec![ItemKind::Coin, ItemKind::Water]);
    }
}
