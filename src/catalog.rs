//! Menu Catalog
//!
//! The loaded item list plus the location/category filter applied to it.

use crate::models::MenuItem;

/// Category sentinel meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "All";

/// Immutable, ordered list of menu items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Built-in sample items used when the data file can't be loaded
    pub fn fallback() -> Self {
        Self::new(vec![
            MenuItem::new("d1", "dominion", "Dosa", "Masala Dosa", 13.99).with_image("images/hero-1.jpg"),
            MenuItem::new("d2", "dominion", "Dosa", "Ghee Roast Dosa", 14.49),
            MenuItem::new("d3", "dominion", "Tiffin", "Idli Vada Combo", 10.99),
            MenuItem::new("d4", "dominion", "Biryani", "Veg Dum Biryani", 15.99),
            MenuItem::new("d5", "dominion", "Beverages", "Filter Coffee", 3.99),
            MenuItem::new("s1", "stoddard", "Indo Chinese", "Veg Manchurian", 14.99).with_image("images/hero-2.jpg"),
            MenuItem::new("s2", "stoddard", "Indo Chinese", "Gobi 65", 12.99),
            MenuItem::new("s3", "stoddard", "Dosa", "Mysore Masala Dosa", 14.99),
            MenuItem::new("s4", "stoddard", "Beverages", "Mango Lassi", 4.99),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Categories offered at `location`: `"All"` first, then each category
    /// once, in order of first appearance.
    pub fn categories_for(&self, location: &str) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for item in self.items.iter().filter(|item| item.location == location) {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Items passing `filter`, in catalog order
    pub fn visible(&self, filter: &FilterState) -> Vec<MenuItem> {
        self.items.iter().filter(|item| filter.matches(item)).cloned().collect()
    }
}

/// Current location and category selection
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub location: String,
    pub category: String,
}

impl FilterState {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
            category: ALL_CATEGORIES.to_string(),
        }
    }

    /// Switch venue; the category always resets
    pub fn select_location(&mut self, location: &str) {
        self.location = location.to_string();
        self.category = ALL_CATEGORIES.to_string();
    }

    pub fn select_category(&mut self, category: &str, available: &[String]) {
        self.category = category.to_string();
        self.reconcile(available);
    }

    /// Fall back to `"All"` if the selected category isn't offered
    pub fn reconcile(&mut self, available: &[String]) {
        if !available.iter().any(|c| *c == self.category) {
            self.category = ALL_CATEGORIES.to_string();
        }
    }

    pub fn is_all(&self) -> bool {
        self.category == ALL_CATEGORIES
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        item.location == self.location && (self.is_all() || item.category == self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            MenuItem::new("1", "a", "X", "One", 1.0),
            MenuItem::new("2", "a", "Y", "Two", 2.0),
            MenuItem::new("3", "b", "X", "Three", 3.0),
            MenuItem::new("4", "a", "X", "Four", 4.0),
        ])
    }

    fn ids(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let catalog = sample();
        assert_eq!(catalog.categories_for("a"), vec!["All", "X", "Y"]);
        assert_eq!(catalog.categories_for("b"), vec!["All", "X"]);
        assert_eq!(catalog.categories_for("nowhere"), vec!["All"]);
    }

    #[test]
    fn test_all_keeps_catalog_order() {
        let catalog = sample();
        let filter = FilterState::new("a");
        assert_eq!(ids(&catalog.visible(&filter)), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_category_exact_match() {
        let catalog = sample();
        let mut filter = FilterState::new("a");
        filter.select_category("X", &catalog.categories_for("a"));
        assert_eq!(ids(&catalog.visible(&filter)), vec!["1", "4"]);

        filter.select_category("Y", &catalog.categories_for("a"));
        assert_eq!(ids(&catalog.visible(&filter)), vec!["2"]);
    }

    #[test]
    fn test_location_switch_resets_category() {
        let catalog = sample();
        let mut filter = FilterState::new("a");
        filter.select_category("Y", &catalog.categories_for("a"));
        filter.select_location("b");
        assert!(filter.is_all());
        assert_eq!(ids(&catalog.visible(&filter)), vec!["3"]);
    }

    #[test]
    fn test_unknown_category_reconciles_to_all() {
        let catalog = sample();
        let mut filter = FilterState::new("b");
        filter.select_category("Y", &catalog.categories_for("b"));
        assert_eq!(filter.category, ALL_CATEGORIES);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = sample();
        let filter = FilterState::new("c");
        assert!(catalog.visible(&filter).is_empty());
    }

    #[test]
    fn test_fallback_covers_both_venues() {
        let catalog = Catalog::fallback();
        assert!(!catalog.is_empty());
        assert!(catalog.categories_for("dominion").len() > 2);
        assert!(catalog.categories_for("stoddard").len() > 2);

        let mut unique: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), catalog.len());
    }
}
