use crate::shared::*;

fn recipe(
    id: &str,
    name: &str,
    cents: u64,
    ingredients: &[(&str, u32)],
    learned_after: (&str, u32),
) -> ItemDef {
    ItemDef {
        id: id.into(),
        name: name.into(),
        value: Money::from_cents(cents),
        category: ItemCategory::Recipe,
        crop_timetable: None,
        grows_into: None,
        enables_field_mode: None,
        is_plantable_crop: false,
        recipe: Some(RecipeDef {
            ingredients: ingredients
                .iter()
                .map(|(item, qty)| (item.to_string(), *qty))
                .collect(),
            learned_after: SalesCondition {
                item_id: learned_after.0.into(),
                quantity: learned_after.1,
            },
        }),
    }
}

/// Dishes. Each is learned once enough of its key crop has been sold.
pub fn all_recipes() -> Vec<ItemDef> {
    vec![
        recipe("carrot-soup", "Carrot Soup", 200, &[("carrot", 4)], ("carrot", 10)),
        recipe("bread", "Bread", 250, &[("wheat", 5)], ("wheat", 20)),
        recipe("corn-chowder", "Corn Chowder", 300, &[("corn", 3), ("potato", 2)], ("corn", 15)),
        recipe(
            "pumpkin-pie",
            "Pumpkin Pie",
            550,
            &[("pumpkin", 2), ("wheat", 2)],
            ("pumpkin", 5),
        ),
    ]
}
