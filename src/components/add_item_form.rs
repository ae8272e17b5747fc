//! Add Item Form Component
//!
//! Controlled quantity select and description input.

use leptos::prelude::*;

use crate::models::MAX_QUANTITY;
use crate::store::{store_add_item, use_app_store};

/// Form for appending items to the packing list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();

    let (description, set_description) = signal(String::new());
    let (quantity, set_quantity) = signal(1u32);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = description.get();

        match store_add_item(&store, &text, quantity.get()) {
            Ok(item) => {
                log::info!(
                    "[FORM] Added {}",
                    serde_json::to_string(&item).unwrap_or_else(|_| item.description.clone())
                );
                // Back to the initial form state
                set_description.set(String::new());
                set_quantity.set(1);
            }
            Err(err) => log::debug!("[FORM] Ignored submit: {}", err),
        }
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for your 😍 trip?"</h3>
            <select on:change=move |ev| {
                match event_target_value(&ev).parse::<u32>() {
                    Ok(value) => set_quantity.set(value),
                    Err(err) => log::warn!("[FORM] Bad quantity: {}", err),
                }
            }>
                {(1..=MAX_QUANTITY).map(|num| view! {
                    <option value=num.to_string() selected=move || quantity.get() == num>
                        {num}
                    </option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
