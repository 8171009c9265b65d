//! Menu Data Source
//!
//! Fetches the menu data file. Failure of any kind swaps in the built-in
//! fallback catalog so the page always has something to show.

use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestCache;

use crate::catalog::Catalog;
use crate::models::{MenuDocument, MenuItem};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed menu data: {0}")]
    Parse(String),

    #[error("menu data has no items")]
    Empty,
}

/// Decode the data file body into items.
///
/// A body without an `items` array counts as empty, not malformed.
pub fn parse_menu_document(body: &str) -> Result<Vec<MenuItem>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| LoadError::Parse(e.to_string()))?;
    if !value.get("items").is_some_and(serde_json::Value::is_array) {
        return Err(LoadError::Empty);
    }
    let document: MenuDocument = serde_json::from_value(value).map_err(|e| LoadError::Parse(e.to_string()))?;
    if document.items.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(document.items)
}

pub async fn fetch_menu(path: &str) -> Result<Vec<MenuItem>, LoadError> {
    let response = Request::get(path)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response.text().await.map_err(|e| LoadError::Network(e.to_string()))?;
    parse_menu_document(&body)
}

/// Resolve a load outcome into the catalog to display
pub fn catalog_or_fallback(path: &str, loaded: Result<Vec<MenuItem>, LoadError>) -> Catalog {
    match loaded {
        Ok(items) => {
            log::info!("loaded {} menu items from {}", items.len(), path);
            Catalog::new(items)
        }
        Err(e) => {
            log::warn!(
                "could not load {} ({}); falling back to sample items. Serve the page over HTTP for JSON loading.",
                path,
                e
            );
            Catalog::fallback()
        }
    }
}

pub async fn load_catalog(path: &str) -> Catalog {
    catalog_or_fallback(path, fetch_menu(path).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items() {
        let items = parse_menu_document(
            r#"{"items":[
                {"id":"d1","location":"dominion","category":"Dosa","title":"Masala Dosa","price":13.99},
                {"id":"s1","location":"stoddard","category":"Indo Chinese","title":"Veg Manchurian","price":14.99,"image":"x.jpg"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].image_src(), Some("x.jpg"));
    }

    #[test]
    fn test_empty_items() {
        assert!(matches!(parse_menu_document(r#"{"items":[]}"#), Err(LoadError::Empty)));
        assert!(matches!(parse_menu_document(r#"{"items":{}}"#), Err(LoadError::Empty)));
        assert!(matches!(parse_menu_document(r#"{"menu":[]}"#), Err(LoadError::Empty)));
        assert!(matches!(parse_menu_document("[]"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(parse_menu_document("<html>"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_menu_document(r#"{"items":[1,2]}"#), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_failure_uses_fallback() {
        let catalog = catalog_or_fallback("menu.json", Err(LoadError::Status(404)));
        assert_eq!(catalog, Catalog::fallback());

        let catalog = catalog_or_fallback("menu.json", parse_menu_document(r#"{"items":[]}"#));
        assert_eq!(catalog, Catalog::fallback());
    }

    #[test]
    fn test_success_keeps_loaded_items() {
        let items = vec![MenuItem::new("1", "a", "X", "One", 1.0)];
        let catalog = catalog_or_fallback("menu.json", Ok(items.clone()));
        assert_eq!(catalog.items(), items.as_slice());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LoadError::Status(500).to_string(), "unexpected HTTP status 500");
        assert_eq!(LoadError::Empty.to_string(), "menu data has no items");
    }
}
