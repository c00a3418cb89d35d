//! Crafting domain: recipes learned through sales, and cooking them.

mod cooking;
mod unlock;

pub use cooking::make_recipe;
pub(crate) use unlock::learn_new_recipes;
