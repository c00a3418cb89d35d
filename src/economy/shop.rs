//! Buying and selling.

use crate::crafting::learn_new_recipes;
use crate::shared::*;

use super::pricing::item_value;

/// Buy up to `quantity` units, clamped to what the money covers.
pub fn purchase_item(
    state: &GameState,
    catalog: &ItemCatalog,
    item_id: &str,
    quantity: u32,
) -> Result<GameState, EngineError> {
    let item = catalog.item(item_id)?;
    let price = item_value(item, &state.value_adjustments);
    let quantity = quantity.min(state.money.affordable_units(price));
    if quantity == 0 {
        return Ok(state.clone());
    }

    let cost = price.times(quantity);
    let mut next = state.clone();
    next.money = state.money.saturating_sub(cost);
    next.todays_losses += cost;
    next.inventory.add(item_id, quantity);
    Ok(next)
}

/// Buy as many units as the money covers.
pub fn purchase_item_max(
    state: &GameState,
    catalog: &ItemCatalog,
    item_id: &str,
) -> Result<GameState, EngineError> {
    purchase_item(state, catalog, item_id, u32::MAX)
}

/// Sell `quantity` units at today's price. Selling more than is held changes nothing.
pub fn sell_item(
    state: &GameState,
    catalog: &ItemCatalog,
    item_id: &str,
    quantity: u32,
) -> Result<GameState, EngineError> {
    let item = catalog.item(item_id)?;
    if quantity == 0 || !state.inventory.has(item_id, quantity) {
        return Ok(state.clone());
    }

    let income = item_value(item, &state.value_adjustments).times(quantity);
    let mut next = state.clone();
    next.inventory.remove(item_id, quantity);
    next.money += income;
    next.revenue += income;
    next.todays_revenue += income;
    let sold = next.items_sold.entry(item_id.to_string()).or_insert(0);
    *sold = sold.saturating_add(quantity);
    learn_new_recipes(&mut next, catalog);
    Ok(next)
}

pub fn sell_all_of_item(
    state: &GameState,
    catalog: &ItemCatalog,
    item_id: &str,
) -> Result<GameState, EngineError> {
    sell_item(state, catalog, item_id, state.inventory.quantity(item_id))
}
