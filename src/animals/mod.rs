//! Livestock domain: cows, their happiness, pens, and the cow market.

mod day_end;
mod interaction;
mod pens;
mod spawning;
mod trading;

pub use day_end::advance_cow_one_day;
pub use interaction::{hug_cow, modify_cow, rename_cow};
pub use pens::purchase_cow_pen;
pub use spawning::{generate_cow, next_cow_id, next_offer_id, COW_NAMES};
pub use trading::{cow_capacity, cow_value, purchase_cow, sell_cow};
