//! Headless autopilot: plays a farm for a number of days and logs what happens.
//!
//! Usage: `fieldhand [days]` (default 14). Tunables are read from
//! `fieldhand.ron` in the working directory when present.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::path::Path;

use fieldhand::config::EngineConfig;
use fieldhand::economy::{farm_products_sold, level_for_items_sold};
use fieldhand::farming::life_stage;
use fieldhand::save::PendingSaves;
use fieldhand::session::{Farm, GameRng};
use fieldhand::shared::*;
use fieldhand::FieldhandPlugin;

const DEFAULT_DAYS: u32 = 14;
const SEED_ID: &str = "carrot-seed";

fn main() {
    let days = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_DAYS);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .insert_resource(EngineConfig::load_or_default(Path::new("fieldhand.ron")))
        .insert_resource(GameRng::from_entropy())
        .add_plugins(FieldhandPlugin);

    // Startup: load or create the farm.
    app.update();

    for _ in 0..days {
        let plan = {
            let world = app.world();
            plan_day(world.resource::<Farm>().state(), world.resource::<ItemCatalog>())
        };
        for action in plan {
            app.world_mut().send_event(ActionEvent(action));
        }
        app.update();
        wait_for_saves(&mut app);
    }

    let world = app.world();
    let state = world.resource::<Farm>().state();
    let sold = farm_products_sold(&state.items_sold, world.resource::<ItemCatalog>());
    info!(
        "[Autopilot] Day {}: {} in the bank, {} sold all time, farmer level {}",
        state.day_count,
        state.money,
        state.revenue,
        level_for_items_sold(sold)
    );
}

/// Harvest what is ready, sell produce, replant every empty plot, water, sleep.
fn plan_day(state: &GameState, catalog: &ItemCatalog) -> Vec<PlayerAction> {
    let mut actions = Vec::new();
    let mut empty = 0u32;

    for ((x, y), plot) in state.field.iter() {
        match plot {
            None => {
                empty += 1;
                actions.push(PlayerAction::Plant { x, y, item_id: SEED_ID.into() });
            }
            Some(PlotContent::Crop(crop))
                if life_stage(crop, catalog).is_ok_and(|stage| stage == LifeStage::Grown) =>
            {
                empty += 1;
                actions.push(PlayerAction::Harvest { x, y });
                actions.push(PlayerAction::Plant { x, y, item_id: SEED_ID.into() });
            }
            Some(_) => {}
        }
    }

    let mut plan = Vec::with_capacity(actions.len() + 4);
    for entry in state.inventory.entries() {
        if catalog.get(&entry.item_id).is_some_and(|def| def.category.is_farm_product()) {
            plan.push(PlayerAction::SellAll { item_id: entry.item_id.clone() });
        }
    }
    let seeds_needed = empty.saturating_sub(state.inventory.quantity(SEED_ID));
    if seeds_needed > 0 {
        plan.push(PlayerAction::Purchase { item_id: SEED_ID.into(), quantity: seeds_needed });
    }
    plan.extend(actions);
    plan.push(PlayerAction::WaterField);
    plan.push(PlayerAction::AdvanceDay);
    plan
}

/// Tick until every autosave has reported back.
fn wait_for_saves(app: &mut App) {
    for _ in 0..500 {
        app.update();
        if app.world().resource::<PendingSaves>().is_empty() {
            return;
        }
        std::thread::sleep(std::time::Duration::from_millis(2));
    }
    warn!("[Autopilot] Gave up waiting for the autosave");
}
