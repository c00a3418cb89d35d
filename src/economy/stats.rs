//! Sales bookkeeping and the figures derived from it.

use std::collections::BTreeMap;

use crate::shared::*;

/// Append today's figure, dropping the oldest once the window is exceeded.
pub fn record_daily_revenue(history: &[Money], today: Money, window: usize) -> Vec<Money> {
    let mut next = history.to_vec();
    next.push(today);
    let excess = next.len().saturating_sub(window);
    next.drain(..excess);
    next
}

/// Units of farm products sold, all time.
pub fn farm_products_sold(items_sold: &BTreeMap<ItemId, u32>, catalog: &ItemCatalog) -> u64 {
    items_sold
        .iter()
        .filter(|(id, _)| catalog.get(id).is_some_and(|def| def.category.is_farm_product()))
        .map(|(_, &qty)| u64::from(qty))
        .sum()
}

/// Farmer level: ⌊√sold / 10⌋ + 1.
pub fn level_for_items_sold(sold: u64) -> u32 {
    ((sold as f64).sqrt() / 10.0).floor() as u32 + 1
}

/// Total farm products that must have been sold to reach `level`.
pub fn items_sold_for_level(level: u32) -> u64 {
    let root = u64::from(level.saturating_sub(1)) * 10;
    root * root
}

pub fn sales_needed_for_next_level(sold: u64) -> u64 {
    items_sold_for_level(level_for_items_sold(sold) + 1).saturating_sub(sold)
}

/// Mean revenue over the window. Days not yet played count as zero.
pub fn average_daily_revenue(history: &[Money], window: usize) -> Money {
    if window == 0 {
        return Money::ZERO;
    }
    let total: Money = history.iter().rev().take(window).copied().sum();
    Money::from_cents(round_half_even(total.cents() as f64 / window as f64) as u64)
}
