//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::item_list::{ItemError, ItemList};
use crate::models::{Item, SortBy, Stats};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The packing list, in insertion order
    pub list: ItemList,
    /// Display order picked in the list footer
    pub sort_by: SortBy,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let list = if config.seed_demo_items {
            ItemList::with_demo_items()
        } else {
            ItemList::new()
        };
        Self {
            list,
            sort_by: config.default_sort,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add an item to the list
pub fn store_add_item(store: &AppStore, description: &str, quantity: u32) -> Result<Item, ItemError> {
    store.list().write().add(description, quantity)
}

/// Remove an item by ID
pub fn store_remove_item(store: &AppStore, item_id: u32) {
    store.list().write().remove(item_id);
}

/// Flip the packed flag of an item by ID
pub fn store_toggle_item(store: &AppStore, item_id: u32) {
    store.list().write().toggle(item_id);
}

/// Empty the list
pub fn store_clear_items(store: &AppStore) {
    store.list().write().clear();
}

/// Change the display order
pub fn store_set_sort(store: &AppStore, sort_by: SortBy) {
    store.sort_by().set(sort_by);
}

/// Items in the current display order (tracked)
pub fn store_sorted_items(store: &AppStore) -> Vec<Item> {
    let sort_by = store.sort_by().get();
    store.list().read().sorted_by(sort_by)
}

/// Whether the item with `item_id` is packed (tracked); false when absent
pub fn store_is_packed(store: &AppStore, item_id: u32) -> bool {
    store.list().read().get(item_id).is_some_and(|item| item.packed)
}

/// Whether the list has no items (tracked)
pub fn store_is_empty(store: &AppStore) -> bool {
    store.list().read().is_empty()
}

/// Derived stats (tracked)
pub fn store_stats(store: &AppStore) -> Stats {
    store.list().read().stats()
}
