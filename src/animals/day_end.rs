use crate::config::EngineConfig;
use crate::shared::*;

/// Overnight: hug count resets, happiness decays towards zero.
pub fn advance_cow_one_day(cow: &Cow, config: &EngineConfig) -> Cow {
    Cow {
        happiness: (cow.happiness - config.cow_happiness_decay).max(0.0),
        happiness_boosts_today: 0,
        ..cow.clone()
    }
}
