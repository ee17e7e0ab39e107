//! Storefront session: current view, user and their cart/favorites/orders
//!
//! There is no account backend. Login accepts any username with the demo
//! password and fills the profile with sample data.

use crate::cart::{Cart, CartLine};
use crate::catalog::{Catalog, Product};
use crate::error::{StoreError, StoreResult};
use crate::favorites::Favorites;
use crate::orders::{OrderHistory, OrderRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Password accepted by the demo login
pub const DEMO_PASSWORD: &str = "password";

/// Top-level page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Catalog,
    Profile,
}

/// Logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

/// Whole storefront state
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: Catalog,
    view: View,
    login_open: bool,
    user: Option<User>,
    cart: Cart,
    favorites: Favorites,
    orders: OrderHistory,
}

impl Storefront {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Default::default()
        }
    }

    // ========== Accessors ==========

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Requested view
    pub fn view(&self) -> View {
        self.view
    }

    /// View actually shown: the profile needs a user, otherwise home
    pub fn effective_view(&self) -> View {
        match self.view {
            View::Profile if self.user.is_none() => View::Home,
            view => view,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_login_open(&self) -> bool {
        self.login_open
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    // ========== Navigation ==========

    pub fn open_catalog(&mut self) {
        self.set_view(View::Catalog);
    }

    pub fn open_profile(&mut self) {
        self.set_view(View::Profile);
    }

    pub fn back_home(&mut self) {
        self.set_view(View::Home);
    }

    fn set_view(&mut self, view: View) {
        debug!(from = ?self.view, to = ?view, "View change");
        self.view = view;
    }

    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    // ========== Auth ==========

    /// Demo login. A wrong password leaves all state untouched.
    ///
    /// On success the profile is seeded with sample cart, order history and
    /// favorites, the login dialog closes and the profile opens.
    pub fn login(&mut self, username: &str, password: &str) -> StoreResult<()> {
        if password != DEMO_PASSWORD {
            debug!(username, "Login rejected");
            return Err(StoreError::WrongPassword);
        }

        self.user = Some(User {
            username: username.to_string(),
        });
        self.cart = demo::cart();
        self.orders = demo::orders();
        self.favorites = demo::favorites();
        self.login_open = false;
        self.set_view(View::Profile);

        info!(username, "Logged in");
        Ok(())
    }

    /// Forget the user and everything attached to them
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(username = %user.username, "Logged out");
        }
        self.cart.clear();
        self.favorites.clear();
        self.orders.clear();
        self.set_view(View::Home);
    }

    // ========== Cart / favorites by product id ==========

    /// Add one unit of a catalog product. Returns false for unknown ids.
    pub fn add_to_cart(&mut self, product_id: i64) -> bool {
        self.add_to_cart_quantity(product_id, 1)
    }

    /// Add several units (product detail dialog). Zero is ignored.
    pub fn add_to_cart_quantity(&mut self, product_id: i64, quantity: u32) -> bool {
        match self.catalog.get(product_id) {
            Some(product) => {
                self.cart.add_quantity(product, quantity);
                true
            }
            None => false,
        }
    }

    pub fn remove_from_cart(&mut self, product_id: i64) -> bool {
        self.cart.remove(product_id)
    }

    pub fn update_quantity(&mut self, product_id: i64, quantity: u32) -> bool {
        self.cart.update_quantity(product_id, quantity)
    }

    /// Toggle a product in favorites. Known catalog products and current
    /// favorites can both be toggled; returns the new membership, or `None`
    /// when the id is unknown.
    pub fn toggle_favorite(&mut self, product_id: i64) -> Option<bool> {
        let product = self
            .catalog
            .get(product_id)
            .or_else(|| self.favorites.items().iter().find(|p| p.id == product_id))
            .cloned()?;
        Some(self.favorites.toggle(&product))
    }
}

/// Sample profile data shown after login
mod demo {
    use super::*;

    fn product(id: i64, name: &str, price: &str, img: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            slug: shared::slug::slugify(name),
            price: price.to_string(),
            description: String::new(),
            img: img.to_string(),
        }
    }

    pub(super) fn cart() -> Cart {
        Cart::from_lines(vec![
            CartLine {
                product: product(1, "Hydra Glow Cream", "€49", "/assets/product1.svg"),
                quantity: 1,
            },
            CartLine {
                product: product(2, "Silk Serum", "€69", "/assets/product2.svg"),
                quantity: 2,
            },
        ])
    }

    pub(super) fn orders() -> OrderHistory {
        OrderHistory::new(vec![
            OrderRecord {
                id: 1,
                date: "2024-01-15".to_string(),
                total: "€118".to_string(),
                items: 2,
                status: "Доставлен".to_string(),
                products: vec!["Hydra Glow Cream".to_string(), "Silk Serum".to_string()],
            },
            OrderRecord {
                id: 2,
                date: "2024-01-10".to_string(),
                total: "€49".to_string(),
                items: 1,
                status: "Доставлен".to_string(),
                products: vec!["Velvet Lip Tint".to_string()],
            },
        ])
    }

    pub(super) fn favorites() -> Favorites {
        Favorites::from_items(vec![product(
            3,
            "Velvet Lip Tint",
            "€29",
            "/assets/product3.svg",
        )])
    }
}
