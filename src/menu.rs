//! Menu Browser
//!
//! Wires the menu store to the page: location buttons, the delegated chip
//! listener, the chip and grid mounts, the grid transition and the one-shot
//! catalog load.

use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use web_sys::HtmlElement;

use crate::catalog::ALL_CATEGORIES;
use crate::components::{CategoryChips, MenuGrid};
use crate::config::SiteConfig;
use crate::dom;
use crate::menu_source::load_catalog;
use crate::store::{dispatch, store_set_catalog, MenuAction, MenuState, MenuStateStoreFields, MenuStore};

const LOCATION_BUTTONS: &str = ".location-btn";
const CHIP: &str = ".chip";
const CHIPS_ROOT_ID: &str = "category-chips";
const GRID_ROOT_ID: &str = "menu-grid";
/// First carousel image doubles as the default card image
const DEFAULT_IMAGE_SOURCE: &str = ".carousel-slide img";
const ACTIVE_CLASS: &str = "active";

pub fn start(config: &SiteConfig) -> MenuStore {
    let store = Store::new(MenuState::new(&config.default_location));
    let default_image = dom::query_one(DEFAULT_IMAGE_SOURCE)
        .and_then(|img| img.get_attribute("src"))
        .filter(|src| !src.is_empty());

    bind_location_buttons(store, &config.default_location);

    match dom::html_element_by_id(CHIPS_ROOT_ID) {
        Some(chips_root) => {
            bind_chip_clicks(store, &chips_root);
            let handle = mount_to(chips_root, move || view! { <CategoryChips store=store /> });
            std::mem::forget(handle);
        }
        None => log::debug!("#{} not found, chips disabled", CHIPS_ROOT_ID),
    }

    match dom::html_element_by_id(GRID_ROOT_ID) {
        Some(grid_root) => {
            bind_grid_transition(store, grid_root.clone());
            let handle = mount_to(grid_root, move || view! { <MenuGrid store=store default_image=default_image /> });
            std::mem::forget(handle);
        }
        None => log::debug!("#{} not found, grid disabled", GRID_ROOT_ID),
    }

    let menu_src = config.menu_src.clone();
    spawn_local(async move {
        let catalog = load_catalog(&menu_src).await;
        store_set_catalog(&store, catalog);
    });

    store
}

/// Location from a button's `data-location`, defaulting when absent or empty
fn location_from_attr(attr: Option<String>, default_location: &str) -> String {
    attr.filter(|l| !l.is_empty()).unwrap_or_else(|| default_location.to_string())
}

/// Category from a chip's `data-category`, `"All"` when absent or empty
fn category_from_attr(attr: Option<String>) -> String {
    attr.filter(|c| !c.is_empty()).unwrap_or_else(|| ALL_CATEGORIES.to_string())
}

fn bind_location_buttons(store: MenuStore, default_location: &str) {
    let buttons = dom::query_all(LOCATION_BUTTONS);
    for button in &buttons {
        let all = buttons.clone();
        let this = button.clone();
        let default_location = default_location.to_string();
        dom::on_click(button, move |_| {
            let location = location_from_attr(this.get_attribute("data-location"), &default_location);
            for other in &all {
                let _ = other.class_list().remove_1(ACTIVE_CLASS);
            }
            let _ = this.class_list().add_1(ACTIVE_CLASS);
            dispatch(&store, MenuAction::SelectLocation(location));
        });
    }
}

/// One listener on the stable container; chips come and go beneath it
fn bind_chip_clicks(store: MenuStore, chips_root: &HtmlElement) {
    dom::on_click(chips_root, move |ev| {
        let Some(chip) = dom::closest_target(&ev, CHIP) else {
            return;
        };
        let category = category_from_attr(chip.get_attribute(crate::components::CHIP_CATEGORY_ATTR));
        dispatch(&store, MenuAction::SelectCategory(category));
    });
}

/// Fade the grid out on every change and back in on the next frame
fn bind_grid_transition(store: MenuStore, grid_root: HtmlElement) {
    Effect::new(move |_| {
        store.filter().track();
        store.catalog().track();

        dom::set_style(&grid_root, "opacity", "0");
        dom::set_style(&grid_root, "transform", "translateY(8px)");
        let root = grid_root.clone();
        request_animation_frame(move || {
            dom::set_style(&root, "opacity", "1");
            dom::set_style(&root, "transform", "translateY(0)");
        });
    });
}
