//! UI Components
//!
//! Leptos components for the packing list page.

mod logo;
mod add_item_form;
mod packing_list;
mod item_row;
mod sort_selector;
mod stats_footer;

pub use logo::Logo;
pub use add_item_form::AddItemForm;
pub use packing_list::PackingList;
pub use item_row::ItemRow;
pub use sort_selector::SortSelector;
pub use stats_footer::StatsFooter;
