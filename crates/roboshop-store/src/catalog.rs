//! Static catalog content.
//!
//! Products, courses, and the rest of the marketing content ship as
//! read-only JSON documents. Only `id`, `title`/`name`, and `price`/`cost`
//! carry behavior (they feed the cart); everything else is display
//! metadata. Unlike the cart slot, a malformed document here is a real
//! error — the content is developer-owned, not user data.

use roboshop_cart::NewItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
#[error("Malformed catalog document: {0}")]
pub struct CatalogError(#[from] serde_json::Error);

/// A purchasable product from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// The add-to-cart payload for this product, carrying display metadata
    /// through to the cart line.
    pub fn to_cart_item(&self) -> NewItem {
        NewItem {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
            image: self.image.clone(),
            category: self.category.clone(),
            custom_note: None,
        }
    }
}

/// A live class from the classroom content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub name: String,
    pub cost: f64,
    /// Scheduled start, RFC 3339; `None` for on-demand content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,
}

pub fn load_products(json: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_courses(json: &str) -> Result<Vec<Course>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_products_and_ignores_unknown_display_fields() {
        let json = r#"[
            {"id": 1, "title": "Controller Board", "price": 100.0, "category": "electronics"},
            {"id": 2, "title": "Wheel Set", "price": 15.5, "image": "wheels.png"}
        ]"#;
        let products = load_products(json).expect("valid catalog");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].category.as_deref(), Some("electronics"));
        let item = products[1].to_cart_item();
        assert_eq!(item.id, 2);
        assert_eq!(item.price, 15.5);
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(load_products("{\"not\": \"an array\"}").is_err());
        assert!(load_courses("[{]").is_err());
    }
}
