//! Shared types, resources, events, and constants for Fieldhand.
//!
//! This is the type contract. Every domain module imports from here.
//! No domain imports from any other domain's internals directly; the
//! day-advance orchestrator in `calendar` is the only place that composes them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

pub mod error;
pub mod money;
pub mod random;

pub use error::EngineError;
pub use money::{round_half_even, Money};
pub use random::{FixedRolls, RandomSource, RngSource};

// ═══════════════════════════════════════════════════════════════════════
// ITEMS
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every item type in the game.
/// Using string IDs for data-driven flexibility.
pub type ItemId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    CropSeed,
    CropProduct,
    Tool,
    Recipe,
}

impl ItemCategory {
    /// Farm products count towards the farmer level.
    pub fn is_farm_product(self) -> bool {
        matches!(self, ItemCategory::CropProduct)
    }
}

/// What the player is doing to the field when an item is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldMode {
    Observe,
    Plant,
    Fertilize,
    SetSprinkler,
    SetScarecrow,
}

/// Days a crop spends in each stage before it is fully grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropTimetable {
    pub seed: u32,
    pub growing: u32,
}

impl CropTimetable {
    /// Watered days after which the crop is GROWN.
    pub fn days_to_grow(&self) -> u32 {
        self.seed + self.growing
    }
}

/// A recipe is learned once `quantity` units of `item_id` have been sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesCondition {
    pub item_id: ItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDef {
    pub ingredients: Vec<(ItemId, u32)>,
    pub learned_after: SalesCondition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    /// Base value before the day's adjustment.
    pub value: Money,
    pub category: ItemCategory,
    #[serde(default)]
    pub crop_timetable: Option<CropTimetable>,
    /// Product a seed turns into when harvested.
    #[serde(default)]
    pub grows_into: Option<ItemId>,
    #[serde(default)]
    pub enables_field_mode: Option<FieldMode>,
    #[serde(default)]
    pub is_plantable_crop: bool,
    #[serde(default)]
    pub recipe: Option<RecipeDef>,
}

/// Purchasable field size. Tier 0 is the starting field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTier {
    pub tier: u8,
    pub columns: usize,
    pub rows: usize,
    pub price: Money,
}

/// Purchasable cow pen. Buying one brings `starter_cows` new cows along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CowPenTier {
    pub tier: u8,
    pub capacity: usize,
    pub starter_cows: usize,
    pub price: Money,
}

/// Static catalog: items plus the expansion tier tables. Read-only at runtime.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: HashMap<ItemId, ItemDef>,
    pub field_tiers: Vec<FieldTier>,
    pub cow_pens: Vec<CowPenTier>,
}

impl ItemCatalog {
    pub fn get(&self, id: &str) -> Option<&ItemDef> {
        self.items.get(id)
    }

    /// Look up an item, treating a missing id as a caller defect.
    pub fn item(&self, id: &str) -> Result<&ItemDef, EngineError> {
        self.items
            .get(id)
            .ok_or_else(|| EngineError::UnknownItem(id.to_string()))
    }

    /// Item ids in a stable order, used wherever randomness is drawn per item.
    pub fn sorted_ids(&self) -> Vec<&ItemId> {
        let mut ids: Vec<&ItemId> = self.items.keys().collect();
        ids.sort();
        ids
    }

    pub fn field_tier(&self, tier: u8) -> Result<&FieldTier, EngineError> {
        self.field_tiers
            .iter()
            .find(|t| t.tier == tier)
            .ok_or(EngineError::UnknownFieldTier(tier))
    }

    pub fn cow_pen(&self, tier: u8) -> Result<&CowPenTier, EngineError> {
        self.cow_pens
            .iter()
            .find(|t| t.tier == tier)
            .ok_or(EngineError::UnknownCowPenTier(tier))
    }
}

pub const FERTILIZER_ID: &str = "fertilizer";
pub const SPRINKLER_ID: &str = "sprinkler";
pub const SCARECROW_ID: &str = "scarecrow";

/// Item ids stocked by the shop, in display order.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopInventory {
    pub item_ids: Vec<ItemId>,
}

impl ShopInventory {
    pub fn stocks(&self, item_id: &str) -> bool {
        self.item_ids.iter().any(|id| id == item_id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FIELD
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    Seed,
    Growing,
    Grown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub item_id: ItemId,
    pub days_watered: u32,
    pub is_fertilized: bool,
    pub was_watered_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PlotContent {
    Crop(Crop),
    Sprinkler,
    Scarecrow,
}

impl PlotContent {
    pub fn as_crop(&self) -> Option<&Crop> {
        match self {
            PlotContent::Crop(crop) => Some(crop),
            _ => None,
        }
    }
}

/// Rectangular grid of plots. `plots[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    plots: Vec<Vec<Option<PlotContent>>>,
}

impl Field {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            plots: vec![vec![None; columns]; rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.plots.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> usize {
        self.plots.len()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.columns() && (y as usize) < self.rows()
    }

    fn index(&self, x: i32, y: i32) -> Result<(usize, usize), EngineError> {
        if self.in_bounds(x, y) {
            Ok((x as usize, y as usize))
        } else {
            Err(EngineError::OutOfBounds {
                x,
                y,
                columns: self.columns(),
                rows: self.rows(),
            })
        }
    }

    pub fn plot(&self, x: i32, y: i32) -> Result<Option<&PlotContent>, EngineError> {
        let (col, row) = self.index(x, y)?;
        Ok(self.plots[row][col].as_ref())
    }

    /// Copy of this field with one plot replaced.
    pub fn with_plot(
        &self,
        x: i32,
        y: i32,
        content: Option<PlotContent>,
    ) -> Result<Field, EngineError> {
        let (col, row) = self.index(x, y)?;
        let mut next = self.clone();
        next.plots[row][col] = content;
        Ok(next)
    }

    /// Row-major iteration over every plot.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), Option<&PlotContent>)> + '_ {
        self.plots.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, plot)| ((x as i32, y as i32), plot.as_ref()))
        })
    }

    /// Build a new field by mapping every plot, row-major.
    pub fn map_plots(
        &self,
        mut f: impl FnMut((i32, i32), Option<&PlotContent>) -> Option<PlotContent>,
    ) -> Field {
        let plots = self
            .plots
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, plot)| f((x as i32, y as i32), plot.as_ref()))
                    .collect()
            })
            .collect();
        Field { plots }
    }

    /// Grow to at least `columns` × `rows`, keeping every existing plot in place.
    pub fn expanded(&self, columns: usize, rows: usize) -> Field {
        let columns = columns.max(self.columns());
        let rows = rows.max(self.rows());
        let mut plots = self.plots.clone();
        for row in plots.iter_mut() {
            row.resize(columns, None);
        }
        plots.resize(rows, vec![None; columns]);
        Field { plots }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// Player inventory. Entries are unique per item and never hold zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.item_id == item_id)
            .map_or(0, |e| e.quantity)
    }

    pub fn has(&self, item_id: &str, quantity: u32) -> bool {
        self.quantity(item_id) >= quantity
    }

    pub fn add(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.entries.iter_mut().find(|e| e.item_id == item_id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
            None => self.entries.push(InventoryEntry {
                item_id: item_id.to_string(),
                quantity,
            }),
        }
    }

    /// Remove exactly `quantity` units. Returns false (and changes nothing)
    /// when the inventory holds fewer.
    pub fn remove(&mut self, item_id: &str, quantity: u32) -> bool {
        let Some(idx) = self.entries.iter().position(|e| e.item_id == item_id) else {
            return quantity == 0;
        };
        let entry = &mut self.entries[idx];
        if entry.quantity < quantity {
            return false;
        }
        entry.quantity -= quantity;
        if entry.quantity == 0 {
            self.entries.remove(idx);
        }
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════
// LIVESTOCK
// ═══════════════════════════════════════════════════════════════════════

pub type CowId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CowColor {
    Blue,
    Brown,
    Green,
    Orange,
    Purple,
    White,
    Yellow,
}

impl CowColor {
    pub const ALL: [CowColor; 7] = [
        CowColor::Blue,
        CowColor::Brown,
        CowColor::Green,
        CowColor::Orange,
        CowColor::Purple,
        CowColor::White,
        CowColor::Yellow,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cow {
    pub id: CowId,
    pub name: String,
    /// 0.0 = miserable, 1.0 = as happy as a cow gets.
    pub happiness: f64,
    pub happiness_boosts_today: u32,
    pub color: CowColor,
    /// Kilograms.
    pub weight: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — the aggregate snapshot
// ═══════════════════════════════════════════════════════════════════════

/// Item id → price multiplier for the current day. Missing = 1.0.
pub type ValueAdjustments = BTreeMap<ItemId, f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub day_count: u32,
    pub field: Field,
    pub inventory: Inventory,
    pub cow_inventory: Vec<Cow>,
    pub cow_for_sale: Option<Cow>,
    pub money: Money,
    /// Item id → cumulative units sold.
    pub items_sold: BTreeMap<ItemId, u32>,
    pub purchased_field: u8,
    pub purchased_cow_pen: u8,
    pub value_adjustments: ValueAdjustments,
    /// All-time sales revenue.
    pub revenue: Money,
    pub historical_daily_revenue: Vec<Money>,
    pub historical_daily_losses: Vec<Money>,
    pub learned_recipes: BTreeSet<ItemId>,
    // Transient, reset at every day advance.
    pub todays_revenue: Money,
    pub todays_losses: Money,
    pub notifications: Vec<String>,
    /// Messages produced by the last day advance, waiting to be shown.
    pub new_day_notifications: Vec<String>,
}

impl GameState {
    /// Fresh game at day 0 with the configured starting field and money.
    pub fn new(columns: usize, rows: usize, money: Money) -> Self {
        Self {
            day_count: 0,
            field: Field::new(columns, rows),
            inventory: Inventory::default(),
            cow_inventory: Vec::new(),
            cow_for_sale: None,
            money,
            items_sold: BTreeMap::new(),
            purchased_field: 0,
            purchased_cow_pen: 0,
            value_adjustments: ValueAdjustments::new(),
            revenue: Money::ZERO,
            historical_daily_revenue: Vec::new(),
            historical_daily_losses: Vec::new(),
            learned_recipes: BTreeSet::new(),
            todays_revenue: Money::ZERO,
            todays_losses: Money::ZERO,
            notifications: Vec::new(),
            new_day_notifications: Vec::new(),
        }
    }

    pub fn cow(&self, id: CowId) -> Result<&Cow, EngineError> {
        self.cow_inventory
            .iter()
            .find(|c| c.id == id)
            .ok_or(EngineError::UnknownCow(id))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER ACTIONS
// ═══════════════════════════════════════════════════════════════════════

/// Every transition the player can request. Applied strictly in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    Plant { x: i32, y: i32, item_id: ItemId },
    WaterPlot { x: i32, y: i32 },
    WaterField,
    Fertilize { x: i32, y: i32 },
    SetSprinkler { x: i32, y: i32 },
    SetScarecrow { x: i32, y: i32 },
    Harvest { x: i32, y: i32 },
    ClearPlot { x: i32, y: i32 },
    Purchase { item_id: ItemId, quantity: u32 },
    PurchaseMax { item_id: ItemId },
    Sell { item_id: ItemId, quantity: u32 },
    SellAll { item_id: ItemId },
    PurchaseField { tier: u8 },
    PurchaseCowPen { tier: u8 },
    PurchaseCow,
    SellCow { cow_id: CowId },
    HugCow { cow_id: CowId },
    RenameCow { cow_id: CowId, name: String },
    MakeRecipe { recipe_id: ItemId },
    AdvanceDay,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Plant { x, y, item_id } => write!(f, "plant {item_id} at ({x}, {y})"),
            PlayerAction::WaterPlot { x, y } => write!(f, "water ({x}, {y})"),
            PlayerAction::WaterField => write!(f, "water field"),
            PlayerAction::Fertilize { x, y } => write!(f, "fertilize ({x}, {y})"),
            PlayerAction::SetSprinkler { x, y } => write!(f, "set sprinkler at ({x}, {y})"),
            PlayerAction::SetScarecrow { x, y } => write!(f, "set scarecrow at ({x}, {y})"),
            PlayerAction::Harvest { x, y } => write!(f, "harvest ({x}, {y})"),
            PlayerAction::ClearPlot { x, y } => write!(f, "clear ({x}, {y})"),
            PlayerAction::Purchase { item_id, quantity } => write!(f, "buy {quantity} × {item_id}"),
            PlayerAction::PurchaseMax { item_id } => write!(f, "buy max {item_id}"),
            PlayerAction::Sell { item_id, quantity } => write!(f, "sell {quantity} × {item_id}"),
            PlayerAction::SellAll { item_id } => write!(f, "sell all {item_id}"),
            PlayerAction::PurchaseField { tier } => write!(f, "buy field tier {tier}"),
            PlayerAction::PurchaseCowPen { tier } => write!(f, "buy cow pen tier {tier}"),
            PlayerAction::PurchaseCow => write!(f, "buy cow"),
            PlayerAction::SellCow { cow_id } => write!(f, "sell cow {cow_id}"),
            PlayerAction::HugCow { cow_id } => write!(f, "hug cow {cow_id}"),
            PlayerAction::RenameCow { cow_id, name } => write!(f, "rename cow {cow_id} to {name:?}"),
            PlayerAction::MakeRecipe { recipe_id } => write!(f, "make {recipe_id}"),
            PlayerAction::AdvanceDay => write!(f, "advance day"),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — host boundary
// ═══════════════════════════════════════════════════════════════════════

/// A player action requested by the presentation layer.
#[derive(Event, Debug, Clone)]
pub struct ActionEvent(pub PlayerAction);

/// Sent after the farm has moved on to a new day. Carries the state the
/// advance produced; the autosave persists exactly that snapshot.
#[derive(Event, Debug, Clone)]
pub struct DayAdvancedEvent {
    pub day: u32,
    pub state: Arc<GameState>,
}

/// Ask the persistence layer to forget the saved farm.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ClearSaveEvent;

/// A user-facing message for the notification sink.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub message: String,
}

impl NotificationEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEM ORDERING
// ═══════════════════════════════════════════════════════════════════════

/// Per-frame order: player actions, then save bookkeeping, then the
/// notification sink sees everything both produced.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldhandSet {
    Actions,
    Saves,
    Notifications,
}

// ═══════════════════════════════════════════════════════════════════════
// MESSAGES
// ═══════════════════════════════════════════════════════════════════════

pub const PROGRESS_SAVED_MESSAGE: &str = "Progress saved!";
pub const SAVE_CLEARED_MESSAGE: &str = "Saved data cleared.";
pub const RAIN_MESSAGE: &str = "It rained! All plots were watered.";

pub fn crops_lost_to_pests_message(count: usize) -> String {
    if count == 1 {
        "Crows destroyed a crop!".to_string()
    } else {
        format!("Crows destroyed {count} crops!")
    }
}

pub fn cow_pen_purchased_message(capacity: usize) -> String {
    format!("Purchased a cow pen with capacity for {capacity} cows! You can visit your cows by pressing \"C\".")
}

pub fn recipe_learned_message(recipe_name: &str) -> String {
    format!("You learned a new recipe: **{recipe_name}**!")
}
