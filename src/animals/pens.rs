use crate::config::EngineConfig;
use crate::shared::*;

use super::spawning::{generate_cow, next_cow_id};

/// Buy a cow pen tier. It comes stocked with its starter cows, up to capacity.
pub fn purchase_cow_pen(
    state: &GameState,
    catalog: &ItemCatalog,
    config: &EngineConfig,
    rng: &mut dyn RandomSource,
    tier: u8,
) -> Result<GameState, EngineError> {
    let pen = catalog.cow_pen(tier)?;
    if tier <= state.purchased_cow_pen {
        return Ok(state.clone());
    }
    let Some(money) = state.money.checked_sub(pen.price) else {
        return Ok(state.clone());
    };

    let mut next = state.clone();
    next.money = money;
    next.todays_losses += pen.price;
    next.purchased_cow_pen = tier;
    let room = pen.capacity.saturating_sub(next.cow_inventory.len());
    for _ in 0..pen.starter_cows.min(room) {
        let cow = generate_cow(next_cow_id(&next), config, rng);
        next.cow_inventory.push(cow);
    }
    next.notifications.push(cow_pen_purchased_message(pen.capacity));
    Ok(next)
}
