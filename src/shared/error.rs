use thiserror::Error;

use super::{CowId, ItemId};

/// Defects in the calling layer. Ordinary invalid moves (not enough money,
/// nothing to harvest) are never errors; they leave the state unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown item id `{0}`")]
    UnknownItem(ItemId),

    #[error("unknown cow id {0}")]
    UnknownCow(CowId),

    #[error("plot ({x}, {y}) is outside the {columns}x{rows} field")]
    OutOfBounds {
        x: i32,
        y: i32,
        columns: usize,
        rows: usize,
    },

    #[error("unknown field tier {0}")]
    UnknownFieldTier(u8),

    #[error("unknown cow pen tier {0}")]
    UnknownCowPenTier(u8),
}
