use crate::config::EngineConfig;
use crate::shared::*;

pub const COW_NAMES: &[&str] = &[
    "Annabelle", "Bessie", "Buttercup", "Clarabelle", "Daisy", "Dottie", "Ferdinand",
    "Gertie", "Henrietta", "Madge", "Moolan", "Nellie", "Peaches", "Rosie", "Wilma",
];

/// Smallest id above every cow the player owns or is offered.
pub fn next_cow_id(state: &GameState) -> CowId {
    next_id_after(state.cow_inventory.iter().chain(state.cow_for_sale.as_ref()))
}

/// Id for a cow that replaces today's offer, so only owned cows count.
pub fn next_offer_id(state: &GameState) -> CowId {
    next_id_after(state.cow_inventory.iter())
}

fn next_id_after<'a>(cows: impl Iterator<Item = &'a Cow>) -> CowId {
    cows.map(|c| c.id).max().map_or(1, |id| id + 1)
}

/// A new cow with random name, color and weight. Draws three rolls in that order.
pub fn generate_cow(id: CowId, config: &EngineConfig, rng: &mut dyn RandomSource) -> Cow {
    let name = COW_NAMES[rng.pick_index(COW_NAMES.len())].to_string();
    let color = CowColor::ALL[rng.pick_index(CowColor::ALL.len())];
    let (low, high) = config.cow_weight_range;
    Cow {
        id,
        name,
        happiness: 0.0,
        happiness_boosts_today: 0,
        color,
        weight: rng.range_inclusive(low, high),
    }
}
