//! Calendar domain: the overnight advance from one day to the next.
//!
//! `compute_state_for_next_day` is the only place that composes the farming,
//! livestock and economy engines. Randomness is drawn in a fixed order so a
//! seeded source replays a day exactly:
//!
//! 1. one rain roll
//! 2. one pest roll per crop, row-major (none while a scarecrow stands)
//! 3. one roll per catalog item for tomorrow's prices, in id order
//! 4. three rolls for the cow for sale

use crate::animals::{advance_cow_one_day, generate_cow, next_offer_id};
use crate::config::EngineConfig;
use crate::economy::{record_daily_revenue, regenerate_value_adjustments};
use crate::farming::advance_field_one_day;
use crate::shared::*;

/// Advance the farm one day. Never fails.
pub fn compute_state_for_next_day(
    state: &GameState,
    catalog: &ItemCatalog,
    config: &EngineConfig,
    rng: &mut dyn RandomSource,
) -> GameState {
    let rained = rng.chance(config.rain_chance);
    let report = advance_field_one_day(&state.field, catalog, config, rained, rng);

    let mut next = state.clone();
    next.field = report.field;
    next.cow_inventory = state
        .cow_inventory
        .iter()
        .map(|cow| advance_cow_one_day(cow, config))
        .collect();

    next.value_adjustments = regenerate_value_adjustments(catalog, rng);
    next.cow_for_sale = Some(generate_cow(next_offer_id(&next), config, rng));

    let window = config.revenue_history_length;
    next.historical_daily_revenue =
        record_daily_revenue(&state.historical_daily_revenue, state.todays_revenue, window);
    next.historical_daily_losses =
        record_daily_revenue(&state.historical_daily_losses, state.todays_losses, window);
    next.todays_revenue = Money::ZERO;
    next.todays_losses = Money::ZERO;
    next.notifications.clear();

    next.day_count = state.day_count.saturating_add(1);

    next.new_day_notifications.clear();
    if rained {
        next.new_day_notifications.push(RAIN_MESSAGE.to_string());
    }
    if report.crops_lost_to_pests > 0 {
        next.new_day_notifications
            .push(crops_lost_to_pests_message(report.crops_lost_to_pests));
    }
    next
}
