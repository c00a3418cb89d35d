//! Overnight field update: rain, sprinklers, growth, pests.

use crate::config::EngineConfig;
use crate::shared::*;

use super::crops::advance_crop_one_day;
use super::sprinkler::sprinkler_coverage;

/// What happened to the field overnight.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldReport {
    pub field: Field,
    pub crops_lost_to_pests: usize,
}

/// Advance every plot one day, row-major.
///
/// A crop counts as watered when it was watered by hand, it rained, or a
/// sprinkler covers it. Unless a scarecrow stands anywhere on the field,
/// every crop draws one pest roll and is destroyed with `pest_chance`.
pub fn advance_field_one_day(
    field: &Field,
    catalog: &ItemCatalog,
    config: &EngineConfig,
    rained: bool,
    rng: &mut dyn RandomSource,
) -> FieldReport {
    let covered = sprinkler_coverage(field, config.sprinkler_range);
    let protected = field
        .iter()
        .any(|(_, plot)| matches!(plot, Some(PlotContent::Scarecrow)));

    let mut lost = 0;
    let next = field.map_plots(|pos, plot| match plot {
        Some(PlotContent::Crop(crop)) => {
            if !protected && rng.chance(config.pest_chance) {
                lost += 1;
                return None;
            }
            let watered = crop.was_watered_today || rained || covered.contains(&pos);
            Some(PlotContent::Crop(advance_crop_one_day(crop, catalog, watered)))
        }
        other => other.cloned(),
    });

    FieldReport {
        field: next,
        crops_lost_to_pests: lost,
    }
}
