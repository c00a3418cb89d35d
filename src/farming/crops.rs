//! Crop life cycle: fresh crops, life-stage tables, single-day growth.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Life-stage tables
// ─────────────────────────────────────────────────────────────────────────────

static LIFE_STAGE_TABLES: OnceLock<Mutex<HashMap<CropTimetable, Arc<[LifeStage]>>>> =
    OnceLock::new();

/// SEED repeated `timetable.seed` times, then GROWING repeated
/// `timetable.growing` times. Cached per distinct timetable.
pub fn life_stage_range(timetable: CropTimetable) -> Arc<[LifeStage]> {
    let cache = LIFE_STAGE_TABLES.get_or_init(Default::default);
    // A poisoned lock still holds a valid table map.
    let mut cache = match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    cache
        .entry(timetable)
        .or_insert_with(|| {
            std::iter::repeat(LifeStage::Seed)
                .take(timetable.seed as usize)
                .chain(std::iter::repeat(LifeStage::Growing).take(timetable.growing as usize))
                .collect::<Vec<_>>()
                .into()
        })
        .clone()
}

/// Timetable of a crop's item. Items without one are grown from the start.
pub fn timetable_of(catalog: &ItemCatalog, item_id: &str) -> Result<CropTimetable, EngineError> {
    Ok(catalog
        .item(item_id)?
        .crop_timetable
        .unwrap_or(CropTimetable { seed: 0, growing: 0 }))
}

pub fn life_stage(crop: &Crop, catalog: &ItemCatalog) -> Result<LifeStage, EngineError> {
    let range = life_stage_range(timetable_of(catalog, &crop.item_id)?);
    Ok(range
        .get(crop.days_watered as usize)
        .copied()
        .unwrap_or(LifeStage::Grown))
}

// ─────────────────────────────────────────────────────────────────────────────
// Crop construction and growth
// ─────────────────────────────────────────────────────────────────────────────

/// A freshly planted crop.
pub fn crop_from_item_id(item_id: &str) -> PlotContent {
    PlotContent::Crop(Crop {
        item_id: item_id.to_string(),
        days_watered: 0,
        is_fertilized: false,
        was_watered_today: false,
    })
}

/// One night of growth. Watered crops gain a day (never past GROWN); the
/// watered flag clears either way. A crop whose item left the catalog stops
/// growing.
pub fn advance_crop_one_day(crop: &Crop, catalog: &ItemCatalog, watered: bool) -> Crop {
    let days_watered = match timetable_of(catalog, &crop.item_id) {
        Ok(timetable) if watered => (crop.days_watered + 1).min(timetable.days_to_grow()),
        _ => crop.days_watered,
    };
    Crop {
        days_watered,
        was_watered_today: false,
        ..crop.clone()
    }
}
