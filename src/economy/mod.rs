//! Economy domain: prices, the shop, expansions, sales statistics.

pub mod expansion;
pub mod inventory;
pub mod pricing;
pub mod shop;
pub mod stats;

pub use expansion::purchase_field;
pub use inventory::{
    field_tool_inventory, inventory_quantities, plantable_crop_inventory, player_inventory,
    InventoryView,
};
pub use pricing::{item_value, regenerate_value_adjustments};
pub use shop::{purchase_item, purchase_item_max, sell_all_of_item, sell_item};
pub use stats::{
    average_daily_revenue, farm_products_sold, level_for_items_sold, record_daily_revenue,
    sales_needed_for_next_level,
};
