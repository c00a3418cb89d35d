use crate::shared::*;

fn seed(id: &str, name: &str, cents: u64, seed: u32, growing: u32, product: &str) -> ItemDef {
    ItemDef {
        id: id.into(),
        name: name.into(),
        value: Money::from_cents(cents),
        category: ItemCategory::CropSeed,
        crop_timetable: Some(CropTimetable { seed, growing }),
        grows_into: Some(product.into()),
        enables_field_mode: Some(FieldMode::Plant),
        is_plantable_crop: true,
        recipe: None,
    }
}

fn product(id: &str, name: &str, cents: u64) -> ItemDef {
    ItemDef {
        id: id.into(),
        name: name.into(),
        value: Money::from_cents(cents),
        category: ItemCategory::CropProduct,
        crop_timetable: None,
        grows_into: None,
        enables_field_mode: None,
        is_plantable_crop: false,
        recipe: None,
    }
}

fn tool(id: &str, name: &str, cents: u64, mode: FieldMode) -> ItemDef {
    ItemDef {
        id: id.into(),
        name: name.into(),
        value: Money::from_cents(cents),
        category: ItemCategory::Tool,
        crop_timetable: None,
        grows_into: None,
        enables_field_mode: Some(mode),
        is_plantable_crop: false,
        recipe: None,
    }
}

pub fn all_items() -> Vec<ItemDef> {
    vec![
        // ── Seeds ───────────────────────────────────────────────────────
        seed("carrot-seed", "Carrot Seed", 15, 2, 1, "carrot"),
        seed("corn-seed", "Corn Seed", 25, 2, 3, "corn"),
        seed("potato-seed", "Potato Seed", 20, 2, 2, "potato"),
        seed("pumpkin-seed", "Pumpkin Seed", 50, 3, 4, "pumpkin"),
        seed("wheat-seed", "Wheat Seed", 10, 1, 2, "wheat"),
        // ── Produce ─────────────────────────────────────────────────────
        product("carrot", "Carrot", 25),
        product("corn", "Corn", 60),
        product("potato", "Potato", 45),
        product("pumpkin", "Pumpkin", 150),
        product("wheat", "Wheat", 20),
        // ── Field tools ─────────────────────────────────────────────────
        tool("fertilizer", "Fertilizer", 25, FieldMode::Fertilize),
        tool("sprinkler", "Sprinkler", 120, FieldMode::SetSprinkler),
        tool("scarecrow", "Scarecrow", 160, FieldMode::SetScarecrow),
    ]
}
