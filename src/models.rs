//! Frontend Models
//!
//! Data structures matching the menu data file.

use serde::{Deserialize, Deserializer, Serialize};

/// Menu item (one entry of `items` in the menu data file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    /// `None` when the file carries anything other than a number
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    /// Carried through but not rendered
    #[serde(default)]
    pub badge: Option<String>,
}

impl MenuItem {
    pub fn new(id: &str, location: &str, category: &str, title: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            location: location.to_string(),
            category: category.to_string(),
            title: title.to_string(),
            price: Some(price),
            image: None,
            badge: None,
        }
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    /// Image URI if set and non-empty
    pub fn image_src(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }
}

/// Top-level shape of the menu data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDocument {
    pub items: Vec<MenuItem>,
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}
