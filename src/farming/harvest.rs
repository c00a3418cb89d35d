//! Harvesting grown crops.

use crate::config::EngineConfig;
use crate::shared::*;

use super::crops::life_stage;

/// Clear a GROWN crop, returning the product and how many units it gave.
/// Anything else leaves the field unchanged and harvests nothing.
pub fn harvest_plot(
    field: &Field,
    catalog: &ItemCatalog,
    x: i32,
    y: i32,
    yield_fn: impl Fn(&Crop) -> u32,
) -> Result<(Field, Option<(ItemId, u32)>), EngineError> {
    let Some(PlotContent::Crop(crop)) = field.plot(x, y)? else {
        return Ok((field.clone(), None));
    };
    if life_stage(crop, catalog)? != LifeStage::Grown {
        return Ok((field.clone(), None));
    }

    let product = catalog
        .item(&crop.item_id)?
        .grows_into
        .clone()
        .unwrap_or_else(|| crop.item_id.clone());
    let quantity = yield_fn(crop);
    Ok((field.with_plot(x, y, None)?, Some((product, quantity))))
}

/// Units a crop yields: one, plus the fertilizer bonus.
pub fn crop_yield(crop: &Crop, config: &EngineConfig) -> u32 {
    if crop.is_fertilized {
        1 + config.fertilizer_yield_bonus
    } else {
        1
    }
}

/// Harvest a plot straight into the inventory.
pub fn harvest_crop(
    state: &GameState,
    catalog: &ItemCatalog,
    config: &EngineConfig,
    x: i32,
    y: i32,
) -> Result<GameState, EngineError> {
    let (field, harvested) = harvest_plot(&state.field, catalog, x, y, |crop| crop_yield(crop, config))?;
    let Some((product, quantity)) = harvested else {
        return Ok(state.clone());
    };

    let mut next = state.clone();
    next.field = field;
    next.inventory.add(&product, quantity);
    Ok(next)
}
