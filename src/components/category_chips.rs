//! Category Chips Component
//!
//! One chip per category offered at the selected location. Clicks are not
//! handled here: the chip container carries a single delegated listener.

use leptos::prelude::*;

use crate::store::{store_categories, store_is_loaded, MenuStateStoreFields, MenuStore};

/// Attribute the delegated listener reads the category from
pub const CHIP_CATEGORY_ATTR: &str = "data-category";

/// Class list for the chip named `category` while `selected` is chosen
fn chip_class(category: &str, selected: &str) -> &'static str {
    if category == selected { "chip active" } else { "chip" }
}

#[component]
pub fn CategoryChips(store: MenuStore) -> impl IntoView {
    view! {
        <Show when=move || store_is_loaded(&store)>
            <For
                each=move || store_categories(&store)
                key=|category| category.clone()
                children=move |category: String| {
                    let name = category.clone();
                    let label = category.clone();
                    let class = move || chip_class(&name, &store.filter().read().category);
                    view! {
                        <button class=class data-category=category type="button">
                            {label}
                        </button>
                    }
                }
            />
        </Show>
    }
}
