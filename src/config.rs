//! Site Configuration
//!
//! Built-in defaults, optionally overridden by `data-*` attributes on `<body>`.

use leptos_carousel::AUTO_PLAY_DELAY_MS;
use log::LevelFilter;

pub const DEFAULT_MENU_SRC: &str = "menu.json";
pub const DEFAULT_LOCATION: &str = "dominion";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Menu data file, relative to the page
    pub menu_src: String,
    /// Venue selected on load
    pub default_location: String,
    pub autoplay_ms: u32,
    pub log_level: LevelFilter,
    /// Rejected overrides, reported once logging is up
    pub issues: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            menu_src: DEFAULT_MENU_SRC.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            autoplay_ms: AUTO_PLAY_DELAY_MS,
            log_level: LevelFilter::Info,
            issues: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Read overrides from the page's `<body>` element
    pub fn load() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::from_attributes(|name| body.get_attribute(name)),
            None => Self::default(),
        }
    }

    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |name: &str| attr(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(src) = non_empty("data-menu-src") {
            config.menu_src = src;
        }
        if let Some(location) = non_empty("data-default-location") {
            config.default_location = location;
        }
        if let Some(raw) = non_empty("data-autoplay-ms") {
            match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => config.autoplay_ms = ms,
                _ => config.issues.push(format!("ignoring data-autoplay-ms={:?}", raw)),
            }
        }
        if let Some(raw) = non_empty("data-log-level") {
            match console_logger::parse_level(&raw) {
                Some(level) => config.log_level = level,
                None => config.issues.push(format!("ignoring data-log-level={:?}", raw)),
            }
        }
        config
    }
}
