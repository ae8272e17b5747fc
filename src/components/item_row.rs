//! Item Row Component
//!
//! Individual entry in the packing list.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_is_packed, store_remove_item, store_toggle_item, use_app_store};

/// A single packing-list row
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    // Read from the store so a toggle updates this row in place
    let packed = move || store_is_packed(&store, id);

    view! {
        <li class=move || if packed() { "item packed" } else { "item" }>
            <input
                type="checkbox"
                prop:checked=packed
                on:change=move |_| store_toggle_item(&store, id)
            />
            <span>{item.quantity} " " {item.description}</span>
            <button class="delete-btn" on:click=move |_| store_remove_item(&store, id)>"❌"</button>
        </li>
    }
}
