//! Storefront Frontend Entry Point
//!
//! Hero carousel and filtered menu grid, rendered into the page's existing
//! markup.

mod carousel;
mod catalog;
mod components;
mod config;
mod dom;
mod format;
mod menu;
mod menu_source;
mod models;
mod store;

use any_spawner::Executor;
use leptos::reactive::owner::Owner;

use config::SiteConfig;

fn main() {
    // Panic reports carry the latest log lines
    std::panic::set_hook(Box::new(|info| {
        if let Some(report) = console_logger::recent_report() {
            web_sys::console::error_1(&report.into());
        }
        console_error_panic_hook::hook(info);
    }));

    let config = SiteConfig::load();
    if let Err(e) = console_logger::init_logger("Storefront", config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    for issue in &config.issues {
        log::warn!("{}", issue);
    }

    // Effects and the catalog load need an executor even when no menu
    // container gets mounted
    init_executor();

    // Root owner for the page's lifetime
    let owner = Owner::new();
    owner.with(|| {
        carousel::start(&config);
        menu::start(&config);
        dom::render_year();
    });
    std::mem::forget(owner);
}

/// Install the wasm-bindgen task executor. Returns false if one was already set.
fn init_executor() -> bool {
    match Executor::init_wasm_bindgen() {
        Ok(()) => true,
        Err(e) => {
            log::debug!("executor already initialised: {}", e);
            false
        }
    }
}
