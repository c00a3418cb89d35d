//! Watering: by hand, by sprinkler, by rain.

use std::collections::HashSet;

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Manual watering
// ─────────────────────────────────────────────────────────────────────────────

fn watered(plot: Option<&PlotContent>) -> Option<PlotContent> {
    match plot {
        Some(PlotContent::Crop(crop)) => Some(PlotContent::Crop(Crop {
            was_watered_today: true,
            ..crop.clone()
        })),
        other => other.cloned(),
    }
}

/// Water one plot. Watering twice, or watering anything but a crop, changes nothing.
pub fn water_plot(field: &Field, x: i32, y: i32) -> Result<Field, EngineError> {
    let plot = field.plot(x, y)?;
    match plot {
        Some(PlotContent::Crop(crop)) if !crop.was_watered_today => {
            field.with_plot(x, y, watered(plot))
        }
        _ => Ok(field.clone()),
    }
}

pub fn water_field(field: &Field) -> Field {
    field.map_plots(|_, plot| watered(plot))
}

// ─────────────────────────────────────────────────────────────────────────────
// Sprinklers
// ─────────────────────────────────────────────────────────────────────────────

/// Square of coordinates within `range` of (x, y), one row per y. Not clipped
/// to any field, so edges can produce negative coordinates.
pub fn range_coords(range: i32, x: i32, y: i32) -> Vec<Vec<(i32, i32)>> {
    (y - range..=y + range)
        .map(|row| (x - range..=x + range).map(|col| (col, row)).collect())
        .collect()
}

/// In-bounds plots reached by at least one sprinkler.
pub fn sprinkler_coverage(field: &Field, range: i32) -> HashSet<(i32, i32)> {
    field
        .iter()
        .filter(|(_, plot)| matches!(plot, Some(PlotContent::Sprinkler)))
        .flat_map(|((x, y), _)| range_coords(range, x, y).into_iter().flatten())
        .filter(|&(x, y)| field.in_bounds(x, y))
        .collect()
}
