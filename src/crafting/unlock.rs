use crate::shared::*;

/// Learn every recipe whose sales condition is now met, in item-id order,
/// posting a notification for each. Works on the caller's private copy.
pub(crate) fn learn_new_recipes(next: &mut GameState, catalog: &ItemCatalog) {
    for id in catalog.sorted_ids() {
        if next.learned_recipes.contains(id) {
            continue;
        }
        let Some(def) = catalog.get(id) else { continue };
        let Some(recipe) = &def.recipe else { continue };

        let condition = &recipe.learned_after;
        let sold = next.items_sold.get(&condition.item_id).copied().unwrap_or(0);
        if sold >= condition.quantity {
            next.learned_recipes.insert(id.clone());
            next.notifications.push(recipe_learned_message(&def.name));
        }
    }
}
