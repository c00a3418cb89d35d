//! Tunables for the simulation.
//!
//! `EngineConfig::default()` is the shipped balance. A RON file with any
//! subset of the fields overrides it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::shared::Money;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Probability that it rains on a given day.
    pub rain_chance: f64,
    /// Probability that any single unprotected crop is destroyed overnight.
    pub pest_chance: f64,
    /// Chebyshev radius watered by a sprinkler.
    pub sprinkler_range: i32,
    pub cow_hug_benefit: f64,
    pub max_daily_cow_hug_benefits: u32,
    pub max_animal_name_length: usize,
    pub cow_happiness_decay: f64,
    /// Days kept in the revenue and loss history windows.
    pub revenue_history_length: usize,
    pub initial_money: Money,
    pub initial_field_columns: usize,
    pub initial_field_rows: usize,
    /// Extra units harvested from a fertilized crop.
    pub fertilizer_yield_bonus: u32,
    /// Base cow value per kilogram, before happiness.
    pub cow_value_per_kg: Money,
    pub cow_weight_range: (u32, u32),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rain_chance: 0.1,
            pest_chance: 0.1,
            sprinkler_range: 1,
            cow_hug_benefit: 0.2,
            max_daily_cow_hug_benefits: 3,
            max_animal_name_length: 20,
            cow_happiness_decay: 0.05,
            revenue_history_length: 7,
            initial_money: Money::from_dollars(500),
            initial_field_columns: 6,
            initial_field_rows: 10,
            fertilizer_yield_bonus: 1,
            cow_value_per_kg: Money::from_cents(150),
            cow_weight_range: (1000, 2000),
        }
    }
}

impl EngineConfig {
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Load from `path`, falling back to the defaults when the file is
    /// missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("[Config] Loaded {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                warn!("[Config] {} ({}); using defaults", e, path.display());
                Self::default()
            }
        }
    }
}
