//! Sort Selector Component

use leptos::prelude::*;

use crate::models::SortBy;
use crate::store::{store_set_sort, use_app_store, AppStateStoreFields};

/// Select for the list display order
#[component]
pub fn SortSelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <select on:change=move |ev| {
            match event_target_value(&ev).parse::<SortBy>() {
                Ok(sort_by) => store_set_sort(&store, sort_by),
                Err(err) => log::warn!("[SORT] {}", err),
            }
        }>
            {SortBy::ALL.iter().map(|&sort_by| view! {
                <option
                    value=sort_by.as_str()
                    selected=move || store.sort_by().get() == sort_by
                >
                    {sort_by.label()}
                </option>
            }).collect_view()}
        </select>
    }
}
