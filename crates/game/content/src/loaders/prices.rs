//! Shop price loader.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, ensure};
use game_core::ItemKind;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct PriceFileToml {
    prices: BTreeMap<String, u32>,
}

/// Loader for price overrides from TOML files.
///
/// ```toml
/// [prices]
/// Apple = 1
/// Candy = 4
/// ```
pub struct PriceLoader;

impl PriceLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<ItemKind, u32>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Kind names follow the stats save format; coins cannot be priced.
    pub fn parse(content: &str) -> LoadResult<BTreeMap<ItemKind, u32>> {
        let data: PriceFileToml = toml::from_str(content)
            .map_err(|e| anyhow!("Failed to parse prices TOML: {}", e))?;

        data.prices
            .into_iter()
            .map(|(name, price)| -> LoadResult<(ItemKind, u32)> {
                let kind = ItemKind::from_str(&name)
                    .map_err(|_| anyhow!("unknown item kind {name:?} in price table"))?;
                ensure!(kind.is_consumable(), "{kind} cannot be sold");
                Ok((kind, price))
            })
            .collect()
    }
}
