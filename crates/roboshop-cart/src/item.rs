//! Cart line-item model.
//!
//! A line is conceptually keyed by `(id, custom_note)`: product ids are not
//! globally unique across catalog categories, and a non-empty note marks a
//! personalized line that never merges with anything else.

use serde::{Deserialize, Serialize};

/// One entry in the cart.
///
/// `quantity` is always ≥ 1 in stored state; an update that would drop it to
/// zero or below removes the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
    /// Display metadata only, no behavioral effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display metadata only, no behavioral effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text personalization. Presence changes line identity: a noted
    /// line is always distinct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_note: Option<String>,
}

/// Payload for adding an item: a [`CartItem`] without a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_note: Option<String>,
}

impl NewItem {
    pub fn new(id: u32, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: None,
            category: None,
            custom_note: None,
        }
    }

    /// Attach a personalization note. Empty strings normalize to "no note"
    /// so merge behavior cannot depend on empty-vs-absent distinctions.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.custom_note = normalize_note(Some(note.into()));
        self
    }

    /// Materialize the first unit of this line.
    pub fn into_line(self) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            price: self.price,
            quantity: 1,
            image: self.image,
            category: self.category,
            custom_note: normalize_note(self.custom_note),
        }
    }
}

/// Collapse empty or whitespace-only notes to `None`.
pub(crate) fn normalize_note(note: Option<String>) -> Option<String> {
    note.filter(|n| !n.trim().is_empty())
}

/// Sum of price × quantity over all lines.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_note_normalizes_to_none() {
        let item = NewItem::new(1, "Servo", 12.5).with_note("   ");
        assert_eq!(item.custom_note, None);
        let item = NewItem::new(1, "Servo", 12.5).with_note("engrave: R2");
        assert_eq!(item.custom_note.as_deref(), Some("engrave: R2"));
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut a = NewItem::new(1, "Board", 100.0).into_line();
        a.quantity = 2;
        let b = NewItem::new(2, "Chassis", 40.0).into_line();
        assert_eq!(cart_total(&[a, b]), 240.0);
        assert_eq!(cart_total(&[]), 0.0);
    }
}
