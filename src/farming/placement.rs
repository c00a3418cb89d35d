//! Putting things into plots and taking them out again.

use crate::shared::*;

use super::crops::crop_from_item_id;

/// Plant one seed from the inventory into an empty plot.
pub fn plant_in_plot(
    state: &GameState,
    catalog: &ItemCatalog,
    x: i32,
    y: i32,
    item_id: &str,
) -> Result<GameState, EngineError> {
    let def = catalog.item(item_id)?;
    if state.field.plot(x, y)?.is_some()
        || !def.is_plantable_crop
        || !state.inventory.has(item_id, 1)
    {
        return Ok(state.clone());
    }

    let mut next = state.clone();
    next.inventory.remove(item_id, 1);
    next.field = state.field.with_plot(x, y, Some(crop_from_item_id(item_id)))?;
    Ok(next)
}

/// Spend one fertilizer on an unfertilized crop.
pub fn fertilize_crop(
    state: &GameState,
    catalog: &ItemCatalog,
    x: i32,
    y: i32,
) -> Result<GameState, EngineError> {
    catalog.item(FERTILIZER_ID)?;
    let crop = match state.field.plot(x, y)? {
        Some(PlotContent::Crop(crop)) if !crop.is_fertilized => crop,
        _ => return Ok(state.clone()),
    };
    if !state.inventory.has(FERTILIZER_ID, 1) {
        return Ok(state.clone());
    }

    let mut next = state.clone();
    next.inventory.remove(FERTILIZER_ID, 1);
    next.field = state.field.with_plot(
        x,
        y,
        Some(PlotContent::Crop(Crop {
            is_fertilized: true,
            ..crop.clone()
        })),
    )?;
    Ok(next)
}

fn place_tool(
    state: &GameState,
    catalog: &ItemCatalog,
    x: i32,
    y: i32,
    tool_id: &str,
    content: PlotContent,
) -> Result<GameState, EngineError> {
    catalog.item(tool_id)?;
    if state.field.plot(x, y)?.is_some() || !state.inventory.has(tool_id, 1) {
        return Ok(state.clone());
    }

    let mut next = state.clone();
    next.inventory.remove(tool_id, 1);
    next.field = state.field.with_plot(x, y, Some(content))?;
    Ok(next)
}

pub fn set_sprinkler(
    state: &GameState,
    catalog: &ItemCatalog,
    x: i32,
    y: i32,
) -> Result<GameState, EngineError> {
    place_tool(state, catalog, x, y, SPRINKLER_ID, PlotContent::Sprinkler)
}

pub fn set_scarecrow(
    state: &GameState,
    catalog: &ItemCatalog,
    x: i32,
    y: i32,
) -> Result<GameState, EngineError> {
    place_tool(state, catalog, x, y, SCARECROW_ID, PlotContent::Scarecrow)
}

/// Empty a plot. Tools go back to the inventory; crops are thrown away.
pub fn clear_plot(
    state: &GameState,
    catalog: &ItemCatalog,
    x: i32,
    y: i32,
) -> Result<GameState, EngineError> {
    let returned = match state.field.plot(x, y)? {
        None => return Ok(state.clone()),
        Some(PlotContent::Crop(_)) => None,
        Some(PlotContent::Sprinkler) => Some(SPRINKLER_ID),
        Some(PlotContent::Scarecrow) => Some(SCARECROW_ID),
    };

    let mut next = state.clone();
    if let Some(tool_id) = returned {
        catalog.item(tool_id)?;
        next.inventory.add(tool_id, 1);
    }
    next.field = state.field.with_plot(x, y, None)?;
    Ok(next)
}
