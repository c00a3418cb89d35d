//! Fieldhand library crate: the farm simulation engine and its Bevy host.
//!
//! The binary (`main.rs`) runs a headless autopilot session. Everything it
//! uses lives here so that `tests/` can drive the same plugins without a
//! window.

pub mod shared;
pub mod config;
pub mod data;
pub mod farming;
pub mod economy;
pub mod animals;
pub mod crafting;
pub mod calendar;
pub mod actions;
pub mod save;
pub mod notifications;
pub mod session;

pub use session::FieldhandPlugin;
