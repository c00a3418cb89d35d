//! Farming domain: planting, watering, crop growth, pests, harvest.
//!
//! Every function here is a pure transition over `crate::shared` types. The
//! day-advance orchestrator in `calendar` calls `advance_field_one_day`; the
//! action dispatcher calls the rest.

mod crops;
mod day_end;
mod harvest;
mod placement;
mod sprinkler;

pub use crops::{advance_crop_one_day, crop_from_item_id, life_stage, life_stage_range};
pub use day_end::{advance_field_one_day, FieldReport};
pub use harvest::{crop_yield, harvest_crop, harvest_plot};
pub use placement::{clear_plot, fertilize_crop, plant_in_plot, set_scarecrow, set_sprinkler};
pub use sprinkler::{range_coords, sprinkler_coverage, water_field, water_plot};
