//! Data layer: the static item catalog and shop stock.
//!
//! `DataPlugin` inserts the built-in catalog unless the app already carries
//! one (tests and modded runs insert their own first). Every other plugin can
//! read `ItemCatalog` and `ShopInventory` from `Startup` on.

mod items;
mod recipes;
mod shops;

use bevy::prelude::*;
use std::path::Path;

use crate::config::ConfigError;
use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ItemCatalog>() {
            let catalog = standard_catalog();
            info!(
                "[Data] Catalog loaded: {} items, {} field tiers, {} cow pens",
                catalog.items.len(),
                catalog.field_tiers.len(),
                catalog.cow_pens.len()
            );
            app.insert_resource(catalog);
        }
        if !app.world().contains_resource::<ShopInventory>() {
            app.insert_resource(standard_shop());
        }
    }
}

/// The built-in catalog.
pub fn standard_catalog() -> ItemCatalog {
    let mut catalog = ItemCatalog::default();
    for def in items::all_items().into_iter().chain(recipes::all_recipes()) {
        catalog.items.insert(def.id.clone(), def);
    }
    catalog.field_tiers = shops::field_tiers();
    catalog.cow_pens = shops::cow_pens();
    catalog
}

pub fn standard_shop() -> ShopInventory {
    shops::shop_inventory()
}

/// Parse a catalog written in RON.
pub fn catalog_from_ron_str(text: &str) -> Result<ItemCatalog, ConfigError> {
    Ok(ron::from_str(text)?)
}

pub fn load_catalog(path: &Path) -> Result<ItemCatalog, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    catalog_from_ron_str(&text)
}
