//! Menu Card Component

use leptos::prelude::*;

use crate::format::{format_price, placeholder_image, resolve_image};
use crate::models::MenuItem;

/// Image source for a card, with a placeholder swap that fires at most once
#[derive(Debug, Clone, PartialEq)]
pub struct CardImage {
    src: String,
    armed: bool,
}

impl CardImage {
    pub fn new(src: String) -> Self {
        Self { src, armed: true }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Handle a load error. Returns whether the source changed.
    pub fn on_error(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.src = placeholder_image();
        true
    }
}

/// Card for a single menu item.
///
/// A failed image load swaps in the placeholder once; later errors are ignored.
#[component]
pub fn MenuCard(item: MenuItem, default_image: Option<String>) -> impl IntoView {
    let image = RwSignal::new(CardImage::new(resolve_image(&item, default_image.as_deref())));

    view! {
        <article class="menu-card">
            <img
                class="menu-card-image"
                src=move || image.with(|img| img.src().to_string())
                alt=item.title.clone()
                loading="lazy"
                on:error=move |_| {
                    // Untracked check keeps a broken placeholder from re-notifying
                    if image.with_untracked(CardImage::is_armed) {
                        image.update(|img| {
                            img.on_error();
                        });
                    }
                }
            />
            <div class="menu-card-body">
                <h3 class="menu-card-title">{item.title.clone()}</h3>
                <p class="menu-card-meta">{item.category.clone()}</p>
            </div>
            <div class="menu-card-footer">
                <span></span>
                <div class="price">{format_price(item.price)}</div>
            </div>
        </article>
    }
}
