//! Menu Grid Component
//!
//! Cards for the items matching the current filter, or an empty-state notice.

use leptos::prelude::*;

use crate::components::MenuCard;
use crate::models::MenuItem;
use crate::store::{store_visible_items, MenuStore};

/// What the grid shows for a given filter result
#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    /// Catalog still loading: render nothing
    Loading,
    Empty,
    Cards(Vec<MenuItem>),
}

impl GridContent {
    pub fn from_visible(visible: Option<Vec<MenuItem>>) -> Self {
        match visible {
            None => Self::Loading,
            Some(items) if items.is_empty() => Self::Empty,
            Some(items) => Self::Cards(items),
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            Self::Cards(items) => items.len(),
            _ => 0,
        }
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <strong>"No items found"</strong>
            " Try selecting a different category."
        </div>
    }
}

#[component]
pub fn MenuGrid(store: MenuStore, default_image: Option<String>) -> impl IntoView {
    move || {
        let content = GridContent::from_visible(store_visible_items(&store));
        log::debug!("grid: {} cards", content.card_count());
        render_content(content, default_image.clone())
    }
}

fn render_content(content: GridContent, default_image: Option<String>) -> AnyView {
    match content {
        GridContent::Loading => ().into_any(),
        GridContent::Empty => view! { <EmptyState /> }.into_any(),
        GridContent::Cards(items) => items
            .into_iter()
            .map(|item| view! { <MenuCard item=item default_image=default_image.clone() /> })
            .collect_view()
            .into_any(),
    }
}
