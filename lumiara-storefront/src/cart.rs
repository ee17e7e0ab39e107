//! Shopping cart
//!
//! Lines are keyed by product id. Totals use decimal arithmetic on the
//! parsed display prices.

use crate::catalog::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::price::format_price;

/// One cart line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity; zero when the price cannot be read
    pub fn line_total(&self) -> Decimal {
        self.product.price_value().unwrap_or_default() * Decimal::from(self.quantity)
    }
}

/// In-memory cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.line(product_id).is_some()
    }

    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Add one unit: bumps an existing line or appends a new one
    pub fn add(&mut self, product: &Product) {
        self.add_quantity(product, 1);
    }

    /// Add several units at once. Zero is ignored.
    pub fn add_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            }),
        }
    }

    /// Drop a line. Returns whether it existed.
    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != before
    }

    /// Set a line's quantity. Quantities below 1 are ignored; use
    /// [`Cart::remove`] to drop a line.
    pub fn update_quantity(&mut self, product_id: i64, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }

        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Total number of units
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total in display form (`"€167"`)
    pub fn total_display(&self) -> String {
        format_price(self.total())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, price: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            slug: shared::slug::slugify(name),
            price: price.to_string(),
            description: String::new(),
            img: String::new(),
        }
    }

    #[test]
    fn test_add_new_then_existing() {
        let cream = product(1, "Hydra Glow Cream", "€49");
        let mut cart = Cart::new();

        cart.add(&cream);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 1);

        cart.add(&cream);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_quantity_ignores_zero() {
        let serum = product(2, "Silk Serum", "€69");
        let mut cart = Cart::new();

        cart.add_quantity(&serum, 0);
        assert!(cart.is_empty());

        cart.add_quantity(&serum, 3);
        cart.add_quantity(&serum, 2);
        assert_eq!(cart.line(2).unwrap().quantity, 5);
    }

    #[test]
    fn test_update_quantity_below_one_is_ignored() {
        let serum = product(2, "Silk Serum", "€69");
        let mut cart = Cart::new();
        cart.add(&serum);

        assert!(cart.update_quantity(2, 4));
        assert_eq!(cart.line(2).unwrap().quantity, 4);

        assert!(!cart.update_quantity(2, 0));
        assert_eq!(cart.line(2).unwrap().quantity, 4);

        assert!(!cart.update_quantity(99, 2));
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Hydra Glow Cream", "€49"));
        cart.add(&product(2, "Silk Serum", "€69"));

        assert!(cart.remove(1));
        assert!(!cart.remove(1));
        assert!(!cart.contains(1));
        assert!(cart.contains(2));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Hydra Glow Cream", "€49"));
        cart.add_quantity(&product(2, "Silk Serum", "€69"), 2);
        cart.add(&product(3, "Mystery Box", "скоро"));

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total(), Decimal::new(187, 0));
        assert_eq!(cart.total_display(), "€187");

        cart.clear();
        assert_eq!(cart.total(), Decimal::ZERO);
    }
}
