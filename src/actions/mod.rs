//! Routes a `PlayerAction` to the transition that implements it.

use crate::animals::{hug_cow, modify_cow, purchase_cow, purchase_cow_pen, rename_cow, sell_cow};
use crate::calendar::compute_state_for_next_day;
use crate::config::EngineConfig;
use crate::crafting::make_recipe;
use crate::economy::{purchase_field, purchase_item, purchase_item_max, sell_all_of_item, sell_item};
use crate::farming::{
    clear_plot, fertilize_crop, harvest_crop, plant_in_plot, set_scarecrow, set_sprinkler,
    water_field, water_plot,
};
use crate::shared::*;

/// Apply one action to a snapshot, producing the next snapshot.
pub fn apply_action(
    state: &GameState,
    catalog: &ItemCatalog,
    config: &EngineConfig,
    rng: &mut dyn RandomSource,
    action: &PlayerAction,
) -> Result<GameState, EngineError> {
    match action {
        PlayerAction::Plant { x, y, item_id } => plant_in_plot(state, catalog, *x, *y, item_id),
        PlayerAction::WaterPlot { x, y } => Ok(GameState {
            field: water_plot(&state.field, *x, *y)?,
            ..state.clone()
        }),
        PlayerAction::WaterField => Ok(GameState {
            field: water_field(&state.field),
            ..state.clone()
        }),
        PlayerAction::Fertilize { x, y } => fertilize_crop(state, catalog, *x, *y),
        PlayerAction::SetSprinkler { x, y } => set_sprinkler(state, catalog, *x, *y),
        PlayerAction::SetScarecrow { x, y } => set_scarecrow(state, catalog, *x, *y),
        PlayerAction::Harvest { x, y } => harvest_crop(state, catalog, config, *x, *y),
        PlayerAction::ClearPlot { x, y } => clear_plot(state, catalog, *x, *y),
        PlayerAction::Purchase { item_id, quantity } => {
            purchase_item(state, catalog, item_id, *quantity)
        }
        PlayerAction::PurchaseMax { item_id } => purchase_item_max(state, catalog, item_id),
        PlayerAction::Sell { item_id, quantity } => sell_item(state, catalog, item_id, *quantity),
        PlayerAction::SellAll { item_id } => sell_all_of_item(state, catalog, item_id),
        PlayerAction::PurchaseField { tier } => purchase_field(state, catalog, *tier),
        PlayerAction::PurchaseCowPen { tier } => purchase_cow_pen(state, catalog, config, rng, *tier),
        PlayerAction::PurchaseCow => purchase_cow(state, catalog, config),
        PlayerAction::SellCow { cow_id } => sell_cow(state, config, *cow_id),
        PlayerAction::HugCow { cow_id } => modify_cow(state, *cow_id, |cow| hug_cow(cow, config)),
        PlayerAction::RenameCow { cow_id, name } => {
            modify_cow(state, *cow_id, |cow| rename_cow(cow, name, config))
        }
        PlayerAction::MakeRecipe { recipe_id } => make_recipe(state, catalog, recipe_id),
        PlayerAction::AdvanceDay => Ok(compute_state_for_next_day(state, catalog, config, rng)),
    }
}
