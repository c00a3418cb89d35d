//! Persistence: what gets saved, where, and the fire-and-forget autosave.
//!
//! The farm is saved after every day advance on Bevy's `IoTaskPool`. The
//! result is polled once per frame and reported through `NotificationEvent`;
//! a failed save never touches the in-memory farm and is not retried.

use bevy::prelude::*;
use bevy::tasks::{block_on, futures_lite::future, IoTaskPool, Task};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// PUBLIC TYPES
// ═══════════════════════════════════════════════════════════════════════

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Could not save your farm: {0}")]
    Io(#[from] std::io::Error),

    #[error("Saved farm is unreadable: {0}")]
    Json(#[from] serde_json::Error),
}

/// The slice of `GameState` that survives a restart. Per-day transients are
/// rebuilt empty on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    pub day_count: u32,
    pub field: Field,
    pub inventory: Inventory,
    pub cow_inventory: Vec<Cow>,
    pub cow_for_sale: Option<Cow>,
    pub money: Money,
    pub items_sold: BTreeMap<ItemId, u32>,
    pub value_adjustments: ValueAdjustments,
    pub purchased_field: u8,
    pub purchased_cow_pen: u8,
    pub learned_recipes: BTreeSet<ItemId>,
    pub new_day_notifications: Vec<String>,
    #[serde(default)]
    pub revenue: Money,
    #[serde(default)]
    pub historical_daily_revenue: Vec<Money>,
    #[serde(default)]
    pub historical_daily_losses: Vec<Money>,
}

impl PersistedState {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            day_count: state.day_count,
            field: state.field.clone(),
            inventory: state.inventory.clone(),
            cow_inventory: state.cow_inventory.clone(),
            cow_for_sale: state.cow_for_sale.clone(),
            money: state.money,
            items_sold: state.items_sold.clone(),
            value_adjustments: state.value_adjustments.clone(),
            purchased_field: state.purchased_field,
            purchased_cow_pen: state.purchased_cow_pen,
            learned_recipes: state.learned_recipes.clone(),
            new_day_notifications: state.new_day_notifications.clone(),
            revenue: state.revenue,
            historical_daily_revenue: state.historical_daily_revenue.clone(),
            historical_daily_losses: state.historical_daily_losses.clone(),
        }
    }

    /// Rehydrate into a full state with empty per-day transients.
    pub fn into_state(self) -> GameState {
        GameState {
            day_count: self.day_count,
            field: self.field,
            inventory: self.inventory,
            cow_inventory: self.cow_inventory,
            cow_for_sale: self.cow_for_sale,
            money: self.money,
            items_sold: self.items_sold,
            purchased_field: self.purchased_field,
            purchased_cow_pen: self.purchased_cow_pen,
            value_adjustments: self.value_adjustments,
            revenue: self.revenue,
            historical_daily_revenue: self.historical_daily_revenue,
            historical_daily_losses: self.historical_daily_losses,
            learned_recipes: self.learned_recipes,
            todays_revenue: Money::ZERO,
            todays_losses: Money::ZERO,
            notifications: Vec::new(),
            new_day_notifications: self.new_day_notifications,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// STORES
// ═══════════════════════════════════════════════════════════════════════

/// Where the farm is kept between sessions.
pub trait SaveStore: Send + Sync + 'static {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PersistedState>, SaveError>;
    fn save(&self, state: &PersistedState) -> Result<(), SaveError>;
    fn clear(&self) -> Result<(), SaveError>;
}

/// A pretty-printed JSON file, written through a temp file and renamed.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `saves/farm.json` next to the executable.
    pub fn default_location() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(exe_dir.join("saves").join("farm.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedState>, SaveError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let persisted: PersistedState = serde_json::from_str(&json)?;
        if persisted.version != SAVE_VERSION {
            warn!(
                "[Save] {} has version {} but current version is {}. Attempting to load anyway.",
                self.path.display(),
                persisted.version,
                SAVE_VERSION
            );
        }
        Ok(Some(persisted))
    }

    fn save(&self, state: &PersistedState) -> Result<(), SaveError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<PersistedState>>>,
}

impl MemoryStore {
    pub fn with_saved(state: PersistedState) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(state))),
        }
    }

    /// What is currently saved.
    pub fn snapshot(&self) -> Option<PersistedState> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set(&self, value: Option<PersistedState>) {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = value;
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedState>, SaveError> {
        Ok(self.snapshot())
    }

    fn save(&self, state: &PersistedState) -> Result<(), SaveError> {
        self.set(Some(state.clone()));
        Ok(())
    }

    fn clear(&self) -> Result<(), SaveError> {
        self.set(None);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// RESOURCES & EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// The store the running app saves to.
#[derive(Resource, Clone)]
pub struct SaveBackend(pub Arc<dyn SaveStore>);

impl SaveBackend {
    pub fn new(store: impl SaveStore) -> Self {
        Self(Arc::new(store))
    }
}

struct PendingSave {
    day: u32,
    persisted: Arc<PersistedState>,
    /// `None` until the saves queued ahead of this one have finished.
    task: Option<Task<Result<(), SaveError>>>,
    /// Shown after the save result, whichever way it went.
    new_day_notifications: Vec<String>,
}

/// Autosaves not yet reported. They run one at a time in day order, so the
/// store always ends on the newest day and the news arrives in order.
#[derive(Resource, Default)]
pub struct PendingSaves {
    queue: VecDeque<PendingSave>,
}

impl PendingSaves {
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Sent once a save task has finished.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SaveCompleteEvent {
    pub day: u32,
    pub success: bool,
    pub error_message: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SaveBackend>() {
            let store = JsonFileStore::default_location();
            info!("[Save] Saving to {}", store.path().display());
            app.insert_resource(SaveBackend::new(store));
        }
        app.init_resource::<PendingSaves>()
            .add_event::<SaveCompleteEvent>()
            .add_event::<ClearSaveEvent>()
            .add_systems(
                Update,
                (autosave_on_day_advance, poll_save_tasks, handle_clear_save)
                    .chain()
                    .in_set(FieldhandSet::Saves),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

/// Queue a save for every day advance, of the state that advance produced.
fn autosave_on_day_advance(
    mut day_events: EventReader<DayAdvancedEvent>,
    mut pending: ResMut<PendingSaves>,
) {
    for ev in day_events.read() {
        info!("[Save] Autosaving day {}", ev.day);
        pending.queue.push_back(PendingSave {
            day: ev.day,
            persisted: Arc::new(PersistedState::from_state(&ev.state)),
            task: None,
            new_day_notifications: ev.state.new_day_notifications.clone(),
        });
    }
}

/// Drive the save queue: report the front save once it finishes (the outcome
/// first, then the day's news) and start the one behind it.
fn poll_save_tasks(
    backend: Res<SaveBackend>,
    mut pending: ResMut<PendingSaves>,
    mut notifications: EventWriter<NotificationEvent>,
    mut complete: EventWriter<SaveCompleteEvent>,
) {
    while let Some(front) = pending.queue.front_mut() {
        let task = front.task.get_or_insert_with(|| {
            let store = Arc::clone(&backend.0);
            let persisted = Arc::clone(&front.persisted);
            IoTaskPool::get().spawn(async move { store.save(&persisted) })
        });
        let Some(result) = block_on(future::poll_once(task)) else {
            return;
        };
        let Some(save) = pending.queue.pop_front() else {
            return;
        };
        match result {
            Ok(()) => {
                info!("[Save] Day {} saved", save.day);
                notifications.send(NotificationEvent::new(PROGRESS_SAVED_MESSAGE));
                complete.send(SaveCompleteEvent {
                    day: save.day,
                    success: true,
                    error_message: None,
                });
            }
            Err(e) => {
                error!("[Save] Day {} not saved: {}", save.day, e);
                notifications.send(NotificationEvent::new(e.to_string()));
                complete.send(SaveCompleteEvent {
                    day: save.day,
                    success: false,
                    error_message: Some(e.to_string()),
                });
            }
        }
        for message in save.new_day_notifications {
            notifications.send(NotificationEvent::new(message));
        }
    }
}

fn handle_clear_save(
    mut clear_events: EventReader<ClearSaveEvent>,
    backend: Res<SaveBackend>,
    mut notifications: EventWriter<NotificationEvent>,
) {
    for _ in clear_events.read() {
        match backend.0.clear() {
            Ok(()) => {
                info!("[Save] Saved data cleared");
                notifications.send(NotificationEvent::new(SAVE_CLEARED_MESSAGE));
            }
            Err(e) => {
                error!("[Save] Could not clear saved data: {}", e);
                notifications.send(NotificationEvent::new(e.to_string()));
            }
        }
    }
}
