//! Favorite products
//!
//! Membership is keyed by product id.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Favorite products, in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    items: Vec<Product>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_items(items: Vec<Product>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Add the product if absent, remove it if present.
    /// Returns whether the product is a favorite afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.contains(product.id) {
            self.items.retain(|p| p.id != product.id);
            false
        } else {
            self.items.push(product.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tint() -> Product {
        Product {
            id: 3,
            name: "Velvet Lip Tint".to_string(),
            slug: "velvet-lip-tint".to_string(),
            price: "€29".to_string(),
            description: String::new(),
            img: "/assets/product3.svg".to_string(),
        }
    }

    #[test]
    fn test_toggle_membership() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle(&tint()));
        assert!(favorites.contains(3));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle(&tint()));
        assert!(!favorites.contains(3));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_matches_by_id_only() {
        let mut favorites = Favorites::new();
        favorites.toggle(&tint());

        let mut renamed = tint();
        renamed.name = "Velvet Lip Tint (new)".to_string();
        assert!(!favorites.toggle(&renamed));
        assert!(favorites.is_empty());
    }
}
