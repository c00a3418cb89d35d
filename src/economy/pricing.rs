//! Daily prices.

use crate::shared::*;

/// Today's price: base value × the item's adjustment (1 when missing),
/// rounded to whole cents half-to-even. A priced item never rounds down to
/// free.
pub fn item_value(item: &ItemDef, value_adjustments: &ValueAdjustments) -> Money {
    let factor = value_adjustments.get(&item.id).copied().unwrap_or(1.0);
    let price = item.value.scaled(factor);
    if price.is_zero() && !item.value.is_zero() {
        return Money::from_cents(1);
    }
    price
}

/// Fresh multipliers in [0.5, 1.5) for every catalog item, drawn in item-id order.
pub fn regenerate_value_adjustments(
    catalog: &ItemCatalog,
    rng: &mut dyn RandomSource,
) -> ValueAdjustments {
    catalog
        .sorted_ids()
        .into_iter()
        .map(|id| (id.clone(), 0.5 + rng.roll()))
        .collect()
}
