//! Read-only views over the inventory for the presentation layer.

use std::collections::BTreeMap;

use crate::shared::*;

use super::pricing::item_value;

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryView<'a> {
    pub item: &'a ItemDef,
    pub quantity: u32,
    /// Today's unit price.
    pub value: Money,
}

fn view<'a>(
    state: &GameState,
    catalog: &'a ItemCatalog,
    keep: impl Fn(&ItemDef) -> bool,
) -> Result<Vec<InventoryView<'a>>, EngineError> {
    let mut views = Vec::new();
    for entry in state.inventory.entries() {
        let item = catalog.item(&entry.item_id)?;
        if keep(item) {
            views.push(InventoryView {
                item,
                quantity: entry.quantity,
                value: item_value(item, &state.value_adjustments),
            });
        }
    }
    Ok(views)
}

/// Every held item with today's price, in inventory order.
pub fn player_inventory<'a>(
    state: &GameState,
    catalog: &'a ItemCatalog,
) -> Result<Vec<InventoryView<'a>>, EngineError> {
    view(state, catalog, |_| true)
}

/// Quantity of every catalog item, zero when not held.
pub fn inventory_quantities(state: &GameState, catalog: &ItemCatalog) -> BTreeMap<ItemId, u32> {
    catalog
        .items
        .keys()
        .map(|id| (id.clone(), state.inventory.quantity(id)))
        .collect()
}

/// Held items that put something other than a crop on the field.
pub fn field_tool_inventory<'a>(
    state: &GameState,
    catalog: &'a ItemCatalog,
) -> Result<Vec<InventoryView<'a>>, EngineError> {
    view(state, catalog, |item| {
        item.category == ItemCategory::Tool && item.enables_field_mode.is_some()
    })
}

pub fn plantable_crop_inventory<'a>(
    state: &GameState,
    catalog: &'a ItemCatalog,
) -> Result<Vec<InventoryView<'a>>, EngineError> {
    view(state, catalog, |item| item.is_plantable_crop)
}
