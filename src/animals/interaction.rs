use crate::config::EngineConfig;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Hugging and naming
// ─────────────────────────────────────────────────────────────────────────────

/// One hug. Past the daily cap a hug does nothing.
pub fn hug_cow(cow: &Cow, config: &EngineConfig) -> Cow {
    if cow.happiness_boosts_today >= config.max_daily_cow_hug_benefits {
        return cow.clone();
    }
    Cow {
        happiness: (cow.happiness + config.cow_hug_benefit).min(1.0),
        happiness_boosts_today: cow.happiness_boosts_today + 1,
        ..cow.clone()
    }
}

/// Rename, keeping at most `max_animal_name_length` characters.
pub fn rename_cow(cow: &Cow, name: &str, config: &EngineConfig) -> Cow {
    Cow {
        name: name.chars().take(config.max_animal_name_length).collect(),
        ..cow.clone()
    }
}

/// Replace the cow with `cow_id` by `f(cow)`.
pub fn modify_cow(
    state: &GameState,
    cow_id: CowId,
    f: impl FnOnce(&Cow) -> Cow,
) -> Result<GameState, EngineError> {
    let idx = state
        .cow_inventory
        .iter()
        .position(|c| c.id == cow_id)
        .ok_or(EngineError::UnknownCow(cow_id))?;
    let mut next = state.clone();
    next.cow_inventory[idx] = f(&state.cow_inventory[idx]);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cow(happiness: f64) -> Cow {
        Cow {
            id: 1,
            name: "Daisy".into(),
            happiness,
            happiness_boosts_today: 0,
            color: CowColor::White,
            weight: 1200,
        }
    }

    #[test]
    fn hug_clamps_to_one() {
        let config = EngineConfig { cow_hug_benefit: 0.5, ..EngineConfig::default() };
        let hugged = hug_cow(&cow(0.9), &config);
        assert_eq!(hugged.happiness, 1.0);
        assert_eq!(hugged.happiness_boosts_today, 1);
    }

    #[test]
    fn fourth_hug_changes_nothing() {
        let config = EngineConfig::default();
        let mut c = cow(0.0);
        for _ in 0..3 {
            c = hug_cow(&c, &config);
        }
        assert_eq!(c.happiness_boosts_today, 3);
        assert_eq!(hug_cow(&c, &config), c);
    }

    #[test]
    fn names_are_truncated() {
        let config = EngineConfig { max_animal_name_length: 5, ..EngineConfig::default() };
        assert_eq!(rename_cow(&cow(0.0), "Bessie the Great", &config).name, "Bessi");
        assert_eq!(rename_cow(&cow(0.0), "Bo", &config).name, "Bo");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let config = EngineConfig { max_animal_name_length: 3, ..EngineConfig::default() };
        assert_eq!(rename_cow(&cow(0.0), "Mööhilde", &config).name, "Möö");
    }

    #[test]
    fn modify_unknown_cow_errors() {
        let state = GameState::new(1, 1, Money::ZERO);
        assert_eq!(
            modify_cow(&state, 42, Cow::clone),
            Err(EngineError::UnknownCow(42))
        );
    }
}
