use crate::shared::*;

/// Cook one unit of a learned recipe, consuming its ingredients. Unlearned
/// recipes, missing ingredients and non-recipe items change nothing.
pub fn make_recipe(
    state: &GameState,
    catalog: &ItemCatalog,
    recipe_id: &str,
) -> Result<GameState, EngineError> {
    let def = catalog.item(recipe_id)?;
    let Some(recipe) = &def.recipe else {
        return Ok(state.clone());
    };
    if !state.learned_recipes.contains(recipe_id) {
        return Ok(state.clone());
    }
    if !recipe
        .ingredients
        .iter()
        .all(|(item_id, qty)| state.inventory.has(item_id, *qty))
    {
        return Ok(state.clone());
    }

    let mut next = state.clone();
    for (item_id, qty) in &recipe.ingredients {
        next.inventory.remove(item_id, *qty);
    }
    next.inventory.add(recipe_id, 1);
    Ok(next)
}
