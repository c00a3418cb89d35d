use crate::shared::*;

/// What the general store stocks, in display order.
pub fn shop_inventory() -> ShopInventory {
    ShopInventory {
        item_ids: [
            "carrot-seed",
            "wheat-seed",
            "potato-seed",
            "corn-seed",
            "pumpkin-seed",
            "fertilizer",
            "sprinkler",
            "scarecrow",
        ]
        .iter()
        .map(|id| id.to_string())
        .collect(),
    }
}

/// Field expansions. Tier 0 is the starting field and is never sold.
pub fn field_tiers() -> Vec<FieldTier> {
    vec![
        FieldTier { tier: 1, columns: 8, rows: 12, price: Money::from_dollars(1_000) },
        FieldTier { tier: 2, columns: 10, rows: 16, price: Money::from_dollars(2_000) },
        FieldTier { tier: 3, columns: 12, rows: 18, price: Money::from_dollars(3_000) },
    ]
}

pub fn cow_pens() -> Vec<CowPenTier> {
    vec![
        CowPenTier { tier: 1, capacity: 10, starter_cows: 2, price: Money::from_dollars(1_500) },
        CowPenTier { tier: 2, capacity: 20, starter_cows: 3, price: Money::from_dollars(2_500) },
        CowPenTier { tier: 3, capacity: 30, starter_cows: 5, price: Money::from_dollars(3_500) },
    ]
}
