//! Coin economy: price lookup and atomic purchases.

use std::collections::BTreeMap;

use game_core::{ErrorSeverity, GameError, Inventory, Item, ItemKind};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EconomyError {
    #[error("{kind} is not for sale")]
    NotForSale { kind: ItemKind },
}

impl GameError for EconomyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            EconomyError::NotForSale { .. } => "ECONOMY_NOT_FOR_SALE",
        }
    }
}

/// Coin cost of every purchasable item kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceTable {
    prices: BTreeMap<ItemKind, u32>,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::new(BTreeMap::from([
            (ItemKind::Apple, 1),
            (ItemKind::Water, 1),
            (ItemKind::Honey, 2),
            (ItemKind::Potion, 2),
            (ItemKind::Candy, 3),
        ]))
    }
}

impl PriceTable {
    pub fn new(prices: BTreeMap<ItemKind, u32>) -> Self {
        Self { prices }
    }

    /// Default prices with `overrides` layered on top.
    pub fn with_overrides(overrides: BTreeMap<ItemKind, u32>) -> Self {
        let mut table = Self::default();
        table.prices.extend(overrides);
        table
    }

    pub fn price(&self, kind: ItemKind) -> Option<u32> {
        self.prices.get(&kind).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemKind, u32)> + '_ {
        self.prices.iter().map(|(kind, price)| (*kind, *price))
    }
}

/// Result of a purchase attempt that named a sellable kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased(Item),
    InsufficientFunds { coins: usize, price: u32 },
}

#[derive(Clone, Debug, Default)]
pub struct Economy {
    prices: PriceTable,
}

impl Economy {
    pub fn new(prices: PriceTable) -> Self {
        Self { prices }
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Trades `price` coins for one unit of `kind`.
    ///
    /// Either exactly `price` coins leave the front of the coin sequence and
    /// one purchased item is added, or the inventory is left untouched.
    pub fn purchase(
        &self,
        inventory: &mut Inventory,
        kind: ItemKind,
    ) -> Result<PurchaseOutcome, EconomyError> {
        let price = self
            .prices
            .price(kind)
            .ok_or(EconomyError::NotForSale { kind })?;
        let coins = inventory.coins();

        if inventory
            .take_front(ItemKind::Coin, price as usize)
            .is_none()
        {
            tracing::debug!(%kind, coins, price, "purchase refused");
            return Ok(PurchaseOutcome::InsufficientFunds { coins, price });
        }

        let item = Item::purchased(kind);
        inventory.add_item(item);
        tracing::debug!(%kind, price, "purchased item");
        Ok(PurchaseOutcome::Purchased(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Position;

    fn inventory_with_coins(count: i32) -> Inventory {
        let mut inventory = Inventory::new();
        for col in 0..count {
            inventory.add_item(Item::new(ItemKind::Coin, Position::new(1, col)));
        }
        inventory
    }

    #[test]
    fn exact_funds_spend_every_coin() {
        let economy = Economy::default();
        let mut inventory = inventory_with_coins(3);

        let outcome = economy.purchase(&mut inventory, ItemKind::Candy).unwrap();
        assert_eq!(outcome, PurchaseOutcome::Purchased(Item::purchased(ItemKind::Candy)));
        assert_eq!(inventory.coins(), 0);
        assert_eq!(inventory.count(ItemKind::Candy), 1);
    }

    #[test]
    fn oldest_coins_are_spent_first() {
        let economy = Economy::default();
        let mut inventory = inventory_with_coins(3);

        economy.purchase(&mut inventory, ItemKind::Honey).unwrap();
        assert_eq!(
            inventory.get(ItemKind::Coin),
            &[Item::new(ItemKind::Coin, Position::new(1, 2))]
        );
    }

    #[test]
    fn insufficient_funds_leave_inventory_untouched() {
        let economy = Economy::default();
        let mut inventory = inventory_with_coins(1);
        let before = inventory.clone();

        let outcome = economy.purchase(&mut inventory, ItemKind::Potion).unwrap();
        assert_eq!(outcome, PurchaseOutcome::InsufficientFunds { coins: 1, price: 2 });
        assert_eq!(inventory, before);
    }

    #[test]
    fn coins_are_not_for_sale() {
        let economy = Economy::default();
        let mut inventory = inventory_with_coins(5);
        assert_eq!(
            economy.purchase(&mut inventory, ItemKind::Coin),
            Err(EconomyError::NotForSale { kind: ItemKind::Coin })
        );
        assert_eq!(inventory.coins(), 5);
    }

    #[test]
    fn overrides_replace_defaults() {
        let table = PriceTable::with_overrides(BTreeMap::from([(ItemKind::Candy, 5)]));
        assert_eq!(table.price(ItemKind::Candy), Some(5));
        assert_eq!(table.price(ItemKind::Apple), Some(1));
    }
}
