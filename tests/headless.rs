//! Headless integration tests for Fieldhand.
//!
//! These tests drive the full plugin stack through Bevy's `MinimalPlugins`:
//! boot from a save store, feed `ActionEvent`s in, and check the farm, the
//! saved data and the notification log that come out.
//!
//! Run with: `cargo test --test headless`

use bevy::prelude::*;
use fieldhand::actions::apply_action;
use fieldhand::config::EngineConfig;
use fieldhand::data::standard_catalog;
use fieldhand::notifications::NotificationLog;
use fieldhand::save::{
    JsonFileStore, MemoryStore, PendingSaves, PersistedState, SaveBackend, SaveCompleteEvent,
    SaveError, SaveStore,
};
use std::sync::{Arc, Mutex};
use fieldhand::session::{Farm, GameRng};
use fieldhand::shared::*;
use fieldhand::FieldhandPlugin;

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Dry nights, no pests.
fn calm_config() -> EngineConfig {
    EngineConfig {
        rain_chance: 0.0,
        pest_chance: 0.0,
        ..EngineConfig::default()
    }
}

/// Builds a headless app around `store`, with every roll fixed at 0.99.
fn build_test_app(store: impl SaveStore, config: EngineConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SaveBackend::new(store))
        .insert_resource(GameRng::new(FixedRolls::constant(0.99)))
        .insert_resource(config);
    app.add_plugins(FieldhandPlugin);
    app
}

/// Tick until every autosave has reported back.
fn settle(app: &mut App) {
    app.update();
    for _ in 0..1_000 {
        if app.world().resource::<PendingSaves>().is_empty() {
            return;
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
        app.update();
    }
    panic!("autosave never finished");
}

fn send(app: &mut App, action: PlayerAction) {
    app.world_mut().send_event(ActionEvent(action));
}

fn farm(app: &App) -> &GameState {
    app.world().resource::<Farm>().state()
}

fn log(app: &App) -> Vec<String> {
    app.world().resource::<NotificationLog>().messages.clone()
}

/// A store whose writes always fail.
struct BrokenStore;

impl SaveStore for BrokenStore {
    fn load(&self) -> Result<Option<PersistedState>, SaveError> {
        Ok(None)
    }

    fn save(&self, _state: &PersistedState) -> Result<(), SaveError> {
        Err(std::io::Error::other("disk full").into())
    }

    fn clear(&self) -> Result<(), SaveError> {
        Ok(())
    }
}

/// Keeps every state it is asked to save, in write order.
#[derive(Clone, Default)]
struct RecordingStore {
    writes: Arc<Mutex<Vec<PersistedState>>>,
    saved: MemoryStore,
}

impl RecordingStore {
    fn saved_days(&self) -> Vec<u32> {
        self.writes.lock().unwrap().iter().map(|p| p.day_count).collect()
    }
}

impl SaveStore for RecordingStore {
    fn load(&self) -> Result<Option<PersistedState>, SaveError> {
        self.saved.load()
    }

    fn save(&self, state: &PersistedState) -> Result<(), SaveError> {
        self.writes.lock().unwrap().push(state.clone());
        self.saved.save(state)
    }

    fn clear(&self) -> Result<(), SaveError> {
        self.saved.clear()
    }
}

/// Rolls 0.0 once, then 0.99 forever: only the first night can rain.
struct RainFirstNight {
    rolled: bool,
}

impl RandomSource for RainFirstNight {
    fn roll(&mut self) -> f64 {
        if self.rolled {
            0.99
        } else {
            self.rolled = true;
            0.0
        }
    }
}

#[derive(Resource, Default)]
struct SaveResults(Vec<SaveCompleteEvent>);

fn record_save_results(mut events: EventReader<SaveCompleteEvent>, mut results: ResMut<SaveResults>) {
    results.0.extend(events.read().cloned());
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_fresh_boot_starts_on_day_one_and_saves() {
    let store = MemoryStore::default();
    let mut app = build_test_app(store.clone(), calm_config());
    settle(&mut app);

    assert_eq!(farm(&app).day_count, 1, "A new farm should open on day 1");
    assert_eq!(
        store.snapshot().map(|p| p.day_count),
        Some(1),
        "Day 1 should be autosaved"
    );
    assert_eq!(log(&app), vec![PROGRESS_SAVED_MESSAGE.to_string()]);
    assert!(
        !farm(&app).value_adjustments.is_empty(),
        "Day 1 prices should be rolled"
    );
    assert!(farm(&app).cow_for_sale.is_some());
}

#[test]
fn test_boot_resumes_saved_farm_and_replays_news() {
    let mut saved = GameState::new(6, 10, Money::from_dollars(42));
    saved.day_count = 5;
    saved.inventory.add("pumpkin", 2);
    saved.new_day_notifications.push(RAIN_MESSAGE.to_string());
    let store = MemoryStore::with_saved(PersistedState::from_state(&saved));

    let mut app = build_test_app(store.clone(), calm_config());
    settle(&mut app);

    let state = farm(&app);
    assert_eq!(state.day_count, 5, "Saved day should be resumed, not advanced");
    assert_eq!(state.money, Money::from_dollars(42));
    assert_eq!(state.inventory.quantity("pumpkin"), 2);
    assert_eq!(log(&app), vec![RAIN_MESSAGE.to_string()]);
    assert_eq!(app.world().resource::<Farm>().revision(), 1);
}

#[test]
fn test_unreadable_save_boots_fresh() {
    let dir = std::env::temp_dir().join(format!("fieldhand-headless-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("farm.json");
    std::fs::write(&path, "this is not a farm").unwrap();

    let mut app = build_test_app(JsonFileStore::new(&path), calm_config());
    settle(&mut app);

    assert_eq!(farm(&app).day_count, 1);
    let reloaded = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(
        reloaded.map(|p| p.day_count),
        Some(1),
        "The fresh farm should overwrite the unreadable save"
    );
    let _ = std::fs::remove_dir_all(&dir);
}

// ─────────────────────────────────────────────────────────────────────────────
// Actions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_actions_apply_in_issue_order() {
    let mut app = build_test_app(MemoryStore::default(), calm_config());
    settle(&mut app);

    send(&mut app, PlayerAction::Purchase { item_id: "carrot-seed".into(), quantity: 2 });
    send(&mut app, PlayerAction::Plant { x: 0, y: 0, item_id: "carrot-seed".into() });
    send(&mut app, PlayerAction::Plant { x: 1, y: 0, item_id: "carrot-seed".into() });
    // No seed left for this one.
    send(&mut app, PlayerAction::Plant { x: 2, y: 0, item_id: "carrot-seed".into() });
    send(&mut app, PlayerAction::WaterField);
    app.update();

    let state = farm(&app);
    assert!(state.inventory.is_empty(), "Both seeds should be planted");
    assert!(state.field.plot(0, 0).unwrap().is_some());
    assert!(state.field.plot(1, 0).unwrap().is_some());
    assert_eq!(state.field.plot(2, 0).unwrap(), None);
    let watered = state
        .field
        .iter()
        .filter_map(|(_, plot)| plot.and_then(PlotContent::as_crop))
        .all(|crop| crop.was_watered_today);
    assert!(watered, "Watering the field should reach every crop");
    assert!(state.todays_losses > Money::ZERO);
}

#[test]
fn test_invalid_actions_leave_farm_untouched() {
    let mut app = build_test_app(MemoryStore::default(), calm_config());
    settle(&mut app);
    let before = app.world().resource::<Farm>().snapshot();
    let revision = app.world().resource::<Farm>().revision();

    // No-op: nothing to sell.
    send(&mut app, PlayerAction::Sell { item_id: "carrot".into(), quantity: 1 });
    // Programmer errors: logged and dropped.
    send(&mut app, PlayerAction::Sell { item_id: "unobtainium".into(), quantity: 1 });
    send(&mut app, PlayerAction::WaterPlot { x: 99, y: 0 });
    send(&mut app, PlayerAction::HugCow { cow_id: 404 });
    app.update();

    assert_eq!(app.world().resource::<Farm>().revision(), revision);
    assert_eq!(*farm(&app), *before);

    // Later actions still go through.
    send(&mut app, PlayerAction::Purchase { item_id: "fertilizer".into(), quantity: 1 });
    app.update();
    assert_eq!(farm(&app).inventory.quantity("fertilizer"), 1);
}

#[test]
fn test_only_shop_stock_can_be_bought() {
    let mut app = build_test_app(MemoryStore::default(), calm_config());
    settle(&mut app);
    let revision = app.world().resource::<Farm>().revision();

    send(&mut app, PlayerAction::Purchase { item_id: "carrot".into(), quantity: 1 });
    send(&mut app, PlayerAction::PurchaseMax { item_id: "carrot-soup".into() });
    app.update();
    assert_eq!(
        app.world().resource::<Farm>().revision(),
        revision,
        "Produce and dishes are not for sale"
    );

    send(&mut app, PlayerAction::Purchase { item_id: "carrot-seed".into(), quantity: 1 });
    app.update();
    assert_eq!(farm(&app).inventory.quantity("carrot-seed"), 1);
    assert!(app.world().resource::<ShopInventory>().stocks("carrot-seed"));
}

#[test]
fn test_cow_pen_purchase_is_announced() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SaveBackend::new(MemoryStore::default()))
        .insert_resource(GameRng::new(FixedRolls::constant(0.99)))
        .insert_resource(calm_config())
        .insert_resource(Farm::new(GameState::new(6, 10, Money::from_dollars(5_000))));
    app.add_plugins(FieldhandPlugin);
    settle(&mut app);

    send(&mut app, PlayerAction::PurchaseCowPen { tier: 1 });
    app.update();

    let state = farm(&app);
    assert_eq!(state.purchased_cow_pen, 1);
    assert_eq!(state.cow_inventory.len(), 2, "Tier 1 comes with two cows");
    assert_eq!(log(&app).last(), Some(&cow_pen_purchased_message(10)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Day advance and persistence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_advance_day_autosaves_then_shows_news() {
    let config = EngineConfig {
        rain_chance: 1.0,
        pest_chance: 0.0,
        ..EngineConfig::default()
    };
    let store = MemoryStore::default();
    let mut app = build_test_app(store.clone(), config);
    settle(&mut app);

    send(&mut app, PlayerAction::AdvanceDay);
    settle(&mut app);

    assert_eq!(farm(&app).day_count, 2);
    let saved = store.snapshot().expect("day 2 should be saved");
    assert_eq!(saved.day_count, 2);
    assert_eq!(saved.new_day_notifications, vec![RAIN_MESSAGE.to_string()]);
    assert_eq!(
        log(&app),
        vec![
            PROGRESS_SAVED_MESSAGE.to_string(),
            RAIN_MESSAGE.to_string(),
            PROGRESS_SAVED_MESSAGE.to_string(),
            RAIN_MESSAGE.to_string(),
        ]
    );
}

#[test]
fn test_back_to_back_advances_save_each_day_in_order() {
    let mut saved = GameState::new(6, 10, Money::from_dollars(42));
    saved.day_count = 5;
    let store = RecordingStore::default();
    store.saved.save(&PersistedState::from_state(&saved)).unwrap();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SaveBackend::new(store.clone()))
        .insert_resource(GameRng::new(RainFirstNight { rolled: false }))
        .insert_resource(EngineConfig {
            rain_chance: 0.5,
            pest_chance: 0.0,
            ..EngineConfig::default()
        })
        .init_resource::<SaveResults>();
    app.add_plugins(FieldhandPlugin);
    app.add_systems(Update, record_save_results.after(FieldhandSet::Saves));
    settle(&mut app);

    send(&mut app, PlayerAction::AdvanceDay);
    send(&mut app, PlayerAction::AdvanceDay);
    settle(&mut app);

    assert_eq!(farm(&app).day_count, 7);
    assert_eq!(store.saved_days(), vec![6, 7], "Each advance saves its own day, in order");
    assert_eq!(
        store.writes.lock().unwrap()[0].new_day_notifications,
        vec![RAIN_MESSAGE.to_string()]
    );
    assert_eq!(
        log(&app),
        vec![
            PROGRESS_SAVED_MESSAGE.to_string(),
            RAIN_MESSAGE.to_string(),
            PROGRESS_SAVED_MESSAGE.to_string(),
        ],
        "Day 6 news must not be lost behind day 7"
    );
    let days: Vec<(u32, bool)> = app
        .world()
        .resource::<SaveResults>()
        .0
        .iter()
        .map(|ev| (ev.day, ev.success))
        .collect();
    assert_eq!(days, vec![(6, true), (7, true)]);
}

#[test]
fn test_failed_save_is_reported_and_never_rolls_back() {
    let config = EngineConfig {
        rain_chance: 1.0,
        pest_chance: 0.0,
        ..EngineConfig::default()
    };
    let mut app = build_test_app(BrokenStore, config);
    settle(&mut app);

    assert_eq!(farm(&app).day_count, 1, "The day advance must stand");
    assert_eq!(
        log(&app),
        vec![
            "Could not save your farm: disk full".to_string(),
            RAIN_MESSAGE.to_string(),
        ]
    );
}

#[test]
fn test_clear_save_event_forgets_the_farm() {
    let store = MemoryStore::default();
    let mut app = build_test_app(store.clone(), calm_config());
    settle(&mut app);
    assert!(store.snapshot().is_some());

    app.world_mut().send_event(ClearSaveEvent);
    app.update();

    assert!(store.snapshot().is_none());
    assert_eq!(
        app.world().resource::<NotificationLog>().latest(),
        Some(SAVE_CLEARED_MESSAGE)
    );
    assert_eq!(farm(&app).day_count, 1, "Clearing the save keeps the running farm");
}

// ─────────────────────────────────────────────────────────────────────────────
// Pure engine properties over a long random session
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_random_session_keeps_invariants() {
    let catalog = standard_catalog();
    let config = EngineConfig::default();
    let mut rng = RngSource::seeded(2024);
    let mut script_rng = RngSource::seeded(7);
    let item_ids: Vec<ItemId> = catalog.sorted_ids().into_iter().cloned().collect();

    let mut state = GameState::new(6, 10, Money::from_dollars(50));
    for _ in 0..400 {
        let x = script_rng.pick_index(6) as i32;
        let y = script_rng.pick_index(10) as i32;
        let item_id = item_ids[script_rng.pick_index(item_ids.len())].clone();
        let action = match script_rng.pick_index(9) {
            0 => PlayerAction::Purchase { item_id, quantity: 3 },
            1 => PlayerAction::Plant { x, y, item_id },
            2 => PlayerAction::WaterPlot { x, y },
            3 => PlayerAction::Harvest { x, y },
            4 => PlayerAction::Sell { item_id, quantity: 1 },
            5 => PlayerAction::Fertilize { x, y },
            6 => PlayerAction::SetSprinkler { x, y },
            7 => PlayerAction::ClearPlot { x, y },
            _ => PlayerAction::AdvanceDay,
        };

        let next = apply_action(&state, &catalog, &config, &mut rng, &action)
            .unwrap_or_else(|e| panic!("{action} failed: {e}"));

        assert!(
            next.inventory.entries().iter().all(|e| e.quantity > 0),
            "Inventory must never hold empty stacks"
        );
        let ids: std::collections::HashSet<&str> =
            next.inventory.entries().iter().map(|e| e.item_id.as_str()).collect();
        assert_eq!(ids.len(), next.inventory.entries().len(), "Stacks must be unique");
        assert!(next.historical_daily_revenue.len() <= config.revenue_history_length);
        for (id, sold) in &state.items_sold {
            assert!(next.items_sold.get(id).copied().unwrap_or(0) >= *sold);
        }
        if matches!(action, PlayerAction::AdvanceDay) {
            assert_eq!(next.day_count, state.day_count + 1);
        } else {
            assert_eq!(next.day_count, state.day_count);
        }
        state = next;
    }
}

#[test]
fn test_purchase_max_and_sell_examples() {
    let catalog = standard_catalog();
    let config = EngineConfig::default();
    let mut rng = FixedRolls::constant(0.5);

    let mut state = GameState::new(1, 1, Money::from_cents(250));
    // Scarecrow base $1.60; force it to exactly $1.00.
    state.value_adjustments.insert("scarecrow".into(), 1.0 / 1.6);
    let bought = apply_action(
        &state,
        &catalog,
        &config,
        &mut rng,
        &PlayerAction::PurchaseMax { item_id: "scarecrow".into() },
    )
    .unwrap();
    assert_eq!(bought.inventory.quantity("scarecrow"), 2);
    assert_eq!(bought.money, Money::from_cents(50));

    let sold = apply_action(
        &bought,
        &catalog,
        &config,
        &mut rng,
        &PlayerAction::Sell { item_id: "scarecrow".into(), quantity: 2 },
    )
    .unwrap();
    assert_eq!(sold.money, Money::from_cents(250));
    assert_eq!(sold.items_sold["scarecrow"], 2);
}
