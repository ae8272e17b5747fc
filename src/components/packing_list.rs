//! Packing List Component
//!
//! Sorted item rows plus the sort and clear actions.

use leptos::prelude::*;

use crate::components::{ItemRow, SortSelector};
use crate::context::use_app_context;
use crate::dialog;
use crate::store::{store_clear_items, store_is_empty, store_sorted_items, use_app_store};

const CLEAR_CONFIRM_MESSAGE: &str = "Are you sure you want to delete all items?";

/// The list of items with its footer actions
#[component]
pub fn PackingList() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let clear_list = move |_| {
        if ctx.confirm_clear() && !dialog::confirm(CLEAR_CONFIRM_MESSAGE) {
            log::debug!("[LIST] Clear cancelled");
            return;
        }
        store_clear_items(&store);
        log::info!("[LIST] Cleared");
    };

    view! {
        <div class="list">
            <ul>
                <For
                    each=move || store_sorted_items(&store)
                    key=|item| item.id
                    children=|item| view! { <ItemRow item=item /> }
                />
            </ul>

            <div class="actions">
                <SortSelector />
                <button
                    on:click=clear_list
                    disabled=move || store_is_empty(&store)
                >
                    "Clear list"
                </button>
            </div>
        </div>
    }
}
