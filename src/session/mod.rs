//! The running game: the current farm snapshot, the injected randomness,
//! and the systems that feed player actions through the engine.
//!
//! `FieldhandPlugin` is the one plugin a host adds. Resources inserted before
//! it (catalog, config, RNG, save backend) take precedence over its defaults.

use bevy::prelude::*;
use std::sync::Arc;

use crate::actions::apply_action;
use crate::calendar::compute_state_for_next_day;
use crate::config::EngineConfig;
use crate::data::DataPlugin;
use crate::notifications::NotificationsPlugin;
use crate::save::{SaveBackend, SavePlugin};
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

/// The current farm. Each transition swaps in a new snapshot, so anyone
/// holding an older `Arc` keeps a consistent view.
#[derive(Resource, Debug, Clone)]
pub struct Farm {
    state: Arc<GameState>,
    revision: u64,
}

impl Farm {
    pub fn new(state: GameState) -> Self {
        Self {
            state: Arc::new(state),
            revision: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(GameState::new(
            config.initial_field_columns,
            config.initial_field_rows,
            config.initial_money,
        ))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    /// Bumped on every replacement.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn replace(&mut self, state: GameState) {
        self.state = Arc::new(state);
        self.revision += 1;
    }
}

/// Source of every random roll the engine makes.
#[derive(Resource)]
pub struct GameRng(pub Box<dyn RandomSource + Send + Sync>);

impl GameRng {
    pub fn new(source: impl RandomSource + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(RngSource::from_entropy())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct FieldhandPlugin;

impl Plugin for FieldhandPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<EngineConfig>() {
            app.insert_resource(EngineConfig::default());
        }
        if !app.world().contains_resource::<GameRng>() {
            app.insert_resource(GameRng::from_entropy());
        }
        if !app.world().contains_resource::<Farm>() {
            let farm = Farm::from_config(app.world().resource::<EngineConfig>());
            app.insert_resource(farm);
        }

        app.configure_sets(
            Update,
            (
                FieldhandSet::Actions,
                FieldhandSet::Saves,
                FieldhandSet::Notifications,
            )
                .chain(),
        )
        .add_event::<ActionEvent>()
        .add_event::<DayAdvancedEvent>()
        .add_plugins((DataPlugin, SavePlugin, NotificationsPlugin))
        .add_systems(Startup, boot_farm)
        .add_systems(Update, apply_player_actions.in_set(FieldhandSet::Actions));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Resume the saved farm, or start a new one on day 1.
fn boot_farm(
    mut farm: ResMut<Farm>,
    backend: Res<SaveBackend>,
    catalog: Res<ItemCatalog>,
    config: Res<EngineConfig>,
    mut rng: ResMut<GameRng>,
    mut notifications: EventWriter<NotificationEvent>,
    mut day_advanced: EventWriter<DayAdvancedEvent>,
) {
    let saved = match backend.0.load() {
        Ok(saved) => saved,
        Err(e) => {
            warn!("[Farm] {}; starting a new farm", e);
            None
        }
    };

    match saved {
        Some(persisted) => {
            let state = persisted.into_state();
            info!("[Farm] Resuming day {} with {}", state.day_count, state.money);
            for message in &state.new_day_notifications {
                notifications.send(NotificationEvent::new(message.clone()));
            }
            farm.replace(state);
        }
        None => {
            let next = compute_state_for_next_day(farm.state(), &catalog, &config, rng.0.as_mut());
            info!("[Farm] New farm on day {} with {}", next.day_count, next.money);
            farm.replace(next);
            day_advanced.send(DayAdvancedEvent {
                day: farm.state().day_count,
                state: farm.snapshot(),
            });
        }
    }
}

/// Apply queued actions in the order they were sent. Only items the shop
/// stocks can be bought; the pure purchase transitions take any catalog item.
fn apply_player_actions(
    mut actions: EventReader<ActionEvent>,
    mut farm: ResMut<Farm>,
    catalog: Res<ItemCatalog>,
    shop: Res<ShopInventory>,
    config: Res<EngineConfig>,
    mut rng: ResMut<GameRng>,
    mut notifications: EventWriter<NotificationEvent>,
    mut day_advanced: EventWriter<DayAdvancedEvent>,
) {
    for ActionEvent(action) in actions.read() {
        if let PlayerAction::Purchase { item_id, .. } | PlayerAction::PurchaseMax { item_id } = action {
            if !shop.stocks(item_id) {
                warn!("[Economy] Dropped \"{}\": the shop does not stock {}", action, item_id);
                continue;
            }
        }
        let current = farm.snapshot();
        let next = match apply_action(&current, &catalog, &config, rng.0.as_mut(), action) {
            Ok(next) => next,
            Err(e) => {
                error!("[Farm] Dropped \"{}\": {}", action, e);
                continue;
            }
        };
        if next == *current {
            debug!("[Farm] \"{}\" changed nothing", action);
            continue;
        }

        // Same day: surface only what this action added.
        if next.day_count == current.day_count {
            for message in next.notifications.iter().skip(current.notifications.len()) {
                notifications.send(NotificationEvent::new(message.clone()));
            }
        }
        if next.money != current.money {
            info!("[Economy] {}: {} -> {}", action, current.money, next.money);
        } else {
            debug!("[Farm] {}", action);
        }

        farm.replace(next);
        if matches!(action, PlayerAction::AdvanceDay) {
            let day = farm.state().day_count;
            info!("[Calendar] Day {} begins", day);
            day_advanced.send(DayAdvancedEvent {
                day,
                state: farm.snapshot(),
            });
        }
    }
}
