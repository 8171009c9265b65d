//! Menu State Store
//!
//! Uses Leptos reactive_stores so the chips and the grid each track only the
//! fields they render.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{Catalog, FilterState};
use crate::models::MenuItem;

/// Menu browser state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct MenuState {
    /// `None` until the catalog load has settled (loaded or fallback)
    pub catalog: Option<Catalog>,
    pub filter: FilterState,
}

impl MenuState {
    pub fn new(default_location: &str) -> Self {
        Self {
            catalog: None,
            filter: FilterState::new(default_location),
        }
    }
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// User interactions, routed through [`dispatch`]
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    SelectLocation(String),
    SelectCategory(String),
}

pub fn dispatch(store: &MenuStore, action: MenuAction) {
    log::debug!("menu action: {:?}", action);
    match action {
        MenuAction::SelectLocation(location) => {
            store.filter().write().select_location(&location);
        }
        MenuAction::SelectCategory(category) => {
            let available = store_categories(store);
            store.filter().write().select_category(&category, &available);
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Install the loaded catalog and drop a selection it doesn't offer
pub fn store_set_catalog(store: &MenuStore, catalog: Catalog) {
    let location = store.filter().read_untracked().location.clone();
    let available = catalog.categories_for(&location);
    *store.catalog().write() = Some(catalog);
    store.filter().write().reconcile(&available);
}

pub fn store_is_loaded(store: &MenuStore) -> bool {
    store.catalog().with(Option::is_some)
}

/// Categories for the selected location (just `"All"` before load)
pub fn store_categories(store: &MenuStore) -> Vec<String> {
    let location = store.filter().read().location.clone();
    store.catalog().with(|catalog| match catalog {
        Some(catalog) => catalog.categories_for(&location),
        None => vec![crate::catalog::ALL_CATEGORIES.to_string()],
    })
}

/// Items matching the current filter, `None` before load
pub fn store_visible_items(store: &MenuStore) -> Option<Vec<MenuItem>> {
    let filter = store.filter().get();
    store.catalog().with(|catalog| catalog.as_ref().map(|c| c.visible(&filter)))
}
