use crate::config::EngineConfig;
use crate::shared::*;

/// Weight × per-kilogram value, raised by up to double for a perfectly happy cow.
pub fn cow_value(cow: &Cow, config: &EngineConfig) -> Money {
    config
        .cow_value_per_kg
        .times(cow.weight)
        .scaled(1.0 + cow.happiness.clamp(0.0, 1.0))
}

/// Pen capacity for the purchased tier; zero before any pen is bought.
pub fn cow_capacity(state: &GameState, catalog: &ItemCatalog) -> Result<usize, EngineError> {
    if state.purchased_cow_pen == 0 {
        return Ok(0);
    }
    Ok(catalog.cow_pen(state.purchased_cow_pen)?.capacity)
}

/// Buy today's cow. Needs the offer, room in the pen, and the money.
pub fn purchase_cow(
    state: &GameState,
    catalog: &ItemCatalog,
    config: &EngineConfig,
) -> Result<GameState, EngineError> {
    let Some(cow) = &state.cow_for_sale else {
        return Ok(state.clone());
    };
    if state.cow_inventory.len() >= cow_capacity(state, catalog)? {
        return Ok(state.clone());
    }
    let price = cow_value(cow, config);
    let Some(money) = state.money.checked_sub(price) else {
        return Ok(state.clone());
    };

    let mut next = state.clone();
    next.money = money;
    next.todays_losses += price;
    next.cow_inventory.push(cow.clone());
    next.cow_for_sale = None;
    Ok(next)
}

pub fn sell_cow(
    state: &GameState,
    config: &EngineConfig,
    cow_id: CowId,
) -> Result<GameState, EngineError> {
    let value = cow_value(state.cow(cow_id)?, config);
    let mut next = state.clone();
    next.cow_inventory.retain(|c| c.id != cow_id);
    next.money += value;
    next.revenue += value;
    next.todays_revenue += value;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::standard_catalog;

    fn cow(id: CowId, happiness: f64) -> Cow {
        Cow {
            id,
            name: "Rosie".into(),
            happiness,
            happiness_boosts_today: 0,
            color: CowColor::Purple,
            weight: 1000,
        }
    }

    #[test]
    fn happiness_raises_value() {
        let config = EngineConfig::default();
        assert_eq!(cow_value(&cow(1, 0.0), &config), Money::from_dollars(1_500));
        assert_eq!(cow_value(&cow(1, 1.0), &config), Money::from_dollars(3_000));
    }

    #[test]
    fn buying_needs_a_pen() {
        let catalog = standard_catalog();
        let config = EngineConfig::default();
        let mut state = GameState::new(1, 1, Money::from_dollars(10_000));
        state.cow_for_sale = Some(cow(1, 0.0));
        assert_eq!(purchase_cow(&state, &catalog, &config).unwrap(), state);

        state.purchased_cow_pen = 1;
        let next = purchase_cow(&state, &catalog, &config).unwrap();
        assert_eq!(next.cow_inventory.len(), 1);
        assert_eq!(next.cow_for_sale, None);
        assert_eq!(next.money, Money::from_dollars(8_500));
    }

    #[test]
    fn buying_needs_money() {
        let catalog = standard_catalog();
        let config = EngineConfig::default();
        let mut state = GameState::new(1, 1, Money::from_dollars(100));
        state.purchased_cow_pen = 1;
        state.cow_for_sale = Some(cow(1, 0.0));
        assert_eq!(purchase_cow(&state, &catalog, &config).unwrap(), state);
    }

    #[test]
    fn selling_credits_revenue() {
        let config = EngineConfig::default();
        let mut state = GameState::new(1, 1, Money::ZERO);
        state.cow_inventory.push(cow(4, 0.5));
        let next = sell_cow(&state, &config, 4).unwrap();
        assert!(next.cow_inventory.is_empty());
        assert_eq!(next.money, Money::from_dollars(2_250));
        assert_eq!(next.todays_revenue, next.money);
        assert_eq!(sell_cow(&next, &config, 4), Err(EngineError::UnknownCow(4)));
    }
}
