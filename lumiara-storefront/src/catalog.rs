//! Product catalog
//!
//! Search, price filter and sort over the fully loaded product list.

use crate::error::{StoreError, StoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::price::parse_price;
use shared::slug::resolve_slug;
use shared::{ContentFile, ProductEntry};
use std::cmp::Ordering;
use std::str::FromStr;

/// Price slider starting position
pub const DEFAULT_MAX_PRICE: Decimal = Decimal::ONE_HUNDRED;

/// Catalog product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Display price (`"€49"`)
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img: String,
}

impl Product {
    /// Build from a content record; records without an integer id cannot be
    /// carted or favorited and are skipped.
    pub fn from_entry(entry: &ProductEntry) -> Option<Self> {
        let id = entry.id.as_ref()?.as_i64()?;
        let name = entry.name.clone().unwrap_or_default();
        let slug = resolve_slug(entry.slug.as_deref(), Some(name.as_str())).unwrap_or_default();

        Some(Self {
            id,
            name,
            slug,
            price: entry
                .price
                .as_ref()
                .map(|p| p.as_text())
                .unwrap_or_default(),
            description: entry.description.clone().unwrap_or_default(),
            img: entry.img.clone().unwrap_or_default(),
        })
    }

    /// Numeric price, if the display price can be read
    pub fn price_value(&self) -> Option<Decimal> {
        parse_price(&self.price)
    }

    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.slug.to_lowercase().contains(needle)
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Alphabetical
    #[default]
    #[serde(rename = "name")]
    Name,
    /// Cheapest first
    #[serde(rename = "price")]
    Price,
    /// Most expensive first
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::PriceDesc => "price-desc",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            Self::Price => compare_prices(a.price_value(), b.price_value(), false),
            Self::PriceDesc => compare_prices(a.price_value(), b.price_value(), true),
        }
    }
}

impl FromStr for SortBy {
    type Err = StoreError;

    fn from_str(s: &str) -> StoreResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "price-desc" => Ok(Self::PriceDesc),
            other => Err(StoreError::UnknownSort(other.to_string())),
        }
    }
}

// Unreadable prices go last in either direction.
fn compare_prices(a: Option<Decimal>, b: Option<Decimal>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Catalog filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Case-insensitive substring of name or slug
    pub search: String,
    /// Inclusive upper price bound
    pub max_price: Decimal,
    pub sort: SortBy,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            max_price: DEFAULT_MAX_PRICE,
            sort: SortBy::default(),
        }
    }
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn max_price(mut self, max: Decimal) -> Self {
        self.max_price = max;
        self
    }

    pub fn sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }
}

/// Loaded product list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build from the content file, skipping products without an id
    pub fn from_content(content: &ContentFile) -> Self {
        let products: Vec<Product> = content
            .products()
            .iter()
            .filter_map(|entry| {
                let product = Product::from_entry(entry);
                if product.is_none() {
                    tracing::warn!(name = ?entry.name, "Skipping product without id");
                }
                product
            })
            .collect();

        Self::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Highest readable price, the price slider's upper end
    pub fn max_price(&self) -> Option<Decimal> {
        self.products.iter().filter_map(Product::price_value).max()
    }

    /// Apply search, price filter and sort
    pub fn query(&self, query: &CatalogQuery) -> Vec<&Product> {
        let needle = query.search.to_lowercase();

        let mut found: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.matches(&needle))
            .filter(|p| p.price_value().is_some_and(|price| price <= query.max_price))
            .collect();

        found.sort_by(|a, b| query.sort.compare(a, b));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, slug: &str, price: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            price: price.to_string(),
            description: String::new(),
            img: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "Hydra Glow Cream", "hydra-glow-cream", "€49"),
            product(2, "Silk Serum", "silk-serum", "€69"),
            product(3, "Velvet Lip Tint", "velvet-lip-tint", "€29"),
            product(4, "Radiance Palette", "radiance-palette", "€120"),
            product(5, "vitamin C Serum", "vitamin-c", "€55"),
        ])
    }

    fn ids(found: &[&Product]) -> Vec<i64> {
        found.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_query_sorts_by_name_under_100() {
        let catalog = catalog();
        let found = catalog.query(&CatalogQuery::new());
        // Radiance Palette (€120) is above the default bound
        assert_eq!(ids(&found), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_search_matches_name_or_slug_case_insensitive() {
        let catalog = catalog();

        let found = catalog.query(&CatalogQuery::new().search("SERUM"));
        assert_eq!(ids(&found), vec![2, 5]);

        let found = catalog.query(&CatalogQuery::new().search("vitamin-c"));
        assert_eq!(ids(&found), vec![5]);

        let found = catalog.query(&CatalogQuery::new().search("nothing"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_price_filter_is_inclusive() {
        let catalog = catalog();
        let found = catalog.query(&CatalogQuery::new().max_price(Decimal::new(49, 0)));
        assert_eq!(ids(&found), vec![1, 3]);
    }

    #[test]
    fn test_price_sorts() {
        let catalog = catalog();
        let all = Decimal::new(1000, 0);

        let found = catalog.query(&CatalogQuery::new().max_price(all).sort(SortBy::Price));
        assert_eq!(ids(&found), vec![3, 1, 5, 2, 4]);

        let found = catalog.query(&CatalogQuery::new().max_price(all).sort(SortBy::PriceDesc));
        assert_eq!(ids(&found), vec![4, 2, 5, 1, 3]);
    }

    #[test]
    fn test_unreadable_price_never_passes_filter() {
        let catalog = Catalog::new(vec![
            product(1, "Gift Card", "gift-card", "по запросу"),
            product(2, "Silk Serum", "silk-serum", "€69"),
        ]);
        let found = catalog.query(&CatalogQuery::new().max_price(Decimal::new(1_000_000, 0)));
        assert_eq!(ids(&found), vec![2]);
        assert_eq!(catalog.max_price(), Some(Decimal::new(69, 0)));
    }

    #[test]
    fn test_max_price() {
        assert_eq!(catalog().max_price(), Some(Decimal::new(120, 0)));
        assert_eq!(Catalog::default().max_price(), None);
    }

    #[test]
    fn test_sort_by_from_str() {
        assert_eq!("name".parse::<SortBy>().unwrap(), SortBy::Name);
        assert_eq!("price".parse::<SortBy>().unwrap(), SortBy::Price);
        assert_eq!("price-desc".parse::<SortBy>().unwrap(), SortBy::PriceDesc);
        assert_eq!(
            "rating".parse::<SortBy>().unwrap_err(),
            StoreError::UnknownSort("rating".to_string())
        );
        assert_eq!(SortBy::PriceDesc.as_str(), "price-desc");
    }

    #[test]
    fn test_from_content_skips_products_without_id() {
        let content = ContentFile::from_json_str(
            r#"{ "products": [
                { "id": 1, "name": "Hydra Glow Cream", "price": "€49" },
                { "name": "Orphan" },
                { "id": 2.5, "name": "Half" },
                { "id": 2, "name": "Silk Serum", "slug": "silk", "price": 69 }
            ] }"#,
        )
        .unwrap();

        let catalog = Catalog::from_content(&content);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().slug, "hydra-glow-cream");
        assert_eq!(catalog.get(2).unwrap().slug, "silk");
        assert_eq!(catalog.get(2).unwrap().price_value(), Some(Decimal::new(69, 0)));
        assert!(catalog.get(3).is_none());
    }
}
