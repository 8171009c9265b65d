//! UI Components
//!
//! Leptos components mounted into the page's menu containers.

mod category_chips;
mod menu_card;
mod menu_grid;

pub use category_chips::{CategoryChips, CHIP_CATEGORY_ATTR};
pub use menu_card::MenuCard;
pub use menu_grid::MenuGrid;
