//! Field expansions.

use crate::shared::*;

/// Buy a larger field. Tiers only go up; existing plots keep their place.
pub fn purchase_field(
    state: &GameState,
    catalog: &ItemCatalog,
    tier: u8,
) -> Result<GameState, EngineError> {
    let def = catalog.field_tier(tier)?;
    if tier <= state.purchased_field {
        return Ok(state.clone());
    }
    let Some(money) = state.money.checked_sub(def.price) else {
        return Ok(state.clone());
    };

    let mut next = state.clone();
    next.money = money;
    next.todays_losses += def.price;
    next.purchased_field = tier;
    next.field = state.field.expanded(def.columns, def.rows);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::standard_catalog;
    use crate::farming::crop_from_item_id;

    #[test]
    fn expansion_keeps_plots() {
        let catalog = standard_catalog();
        let mut state = GameState::new(6, 10, Money::from_dollars(5_000));
        state.field = state.field.with_plot(5, 9, Some(crop_from_item_id("corn-seed"))).unwrap();
        let next = purchase_field(&state, &catalog, 1).unwrap();
        assert_eq!((next.field.columns(), next.field.rows()), (8, 12));
        assert_eq!(next.field.plot(5, 9).unwrap(), Some(&crop_from_item_id("corn-seed")));
        assert_eq!(next.money, Money::from_dollars(4_000));
        assert_eq!(next.purchased_field, 1);
    }

    #[test]
    fn tiers_never_go_down() {
        let catalog = standard_catalog();
        let state = GameState::new(6, 10, Money::from_dollars(10_000));
        let big = purchase_field(&state, &catalog, 2).unwrap();
        assert_eq!(purchase_field(&big, &catalog, 1).unwrap(), big);
        assert_eq!(purchase_field(&big, &catalog, 2).unwrap(), big);
    }

    #[test]
    fn unaffordable_or_unknown() {
        let catalog = standard_catalog();
        let state = GameState::new(6, 10, Money::from_dollars(10));
        assert_eq!(purchase_field(&state, &catalog, 1).unwrap(), state);
        assert_eq!(purchase_field(&state, &catalog, 9), Err(EngineError::UnknownFieldTier(9)));
    }
}
