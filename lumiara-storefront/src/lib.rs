//! # lumiara-storefront
//!
//! Storefront state for the Lumiára site, independent of any rendering:
//!
//! - Catalog search, price filter and sort
//! - Cart lines and totals
//! - Favorites
//! - Demo login, profile data and view switching
//!
//! All state lives in memory and is lost when the [`Storefront`] is dropped.
//!
//! ## Example
//!
//! ```ignore
//! use lumiara_storefront::{Catalog, CatalogQuery, SortBy, Storefront};
//!
//! let content = shared::ContentFile::from_path("src/data/content.json")?;
//! let mut store = Storefront::new(Catalog::from_content(&content));
//!
//! let query = CatalogQuery::new().search("serum").sort(SortBy::PriceDesc);
//! for product in store.catalog().query(&query) {
//!     println!("{} {}", product.name, product.price);
//! }
//!
//! store.login("anna", "password")?;
//! println!("cart total: {}", store.cart().total_display());
//! ```

mod cart;
mod catalog;
mod error;
mod favorites;
mod orders;
mod session;

// Re-exports
pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogQuery, DEFAULT_MAX_PRICE, Product, SortBy};
pub use error::{StoreError, StoreResult};
pub use favorites::Favorites;
pub use orders::{OrderHistory, OrderRecord};
pub use session::{DEMO_PASSWORD, Storefront, User, View};
