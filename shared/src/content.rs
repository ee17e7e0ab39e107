//! Static content file
//!
//! The site ships its copy as a single JSON file (`src/data/content.json`).
//! Every field is optional: the importer fills in defaults when it builds
//! the CMS documents.

use crate::error::SharedResult;
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Whole content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub brand: Option<BrandEntry>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub products: Option<Vec<ProductEntry>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub featured: Option<Vec<FeaturedEntry>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub testimonials: Option<Vec<TestimonialEntry>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub blog: Option<Vec<BlogEntry>>,
}

impl ContentFile {
    /// Read and parse a content file from disk
    pub fn from_path(path: impl AsRef<Path>) -> SharedResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Parse content from a JSON string
    pub fn from_json_str(raw: &str) -> SharedResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn products(&self) -> &[ProductEntry] {
        self.products.as_deref().unwrap_or_default()
    }

    pub fn featured(&self) -> &[FeaturedEntry] {
        self.featured.as_deref().unwrap_or_default()
    }

    pub fn testimonials(&self) -> &[TestimonialEntry] {
        self.testimonials.as_deref().unwrap_or_default()
    }

    pub fn blog(&self) -> &[BlogEntry] {
        self.blog.as_deref().unwrap_or_default()
    }

    /// Number of documents an import of this file would write
    pub fn document_count(&self) -> usize {
        usize::from(self.brand.is_some())
            + self.products().len()
            + self.featured().len()
            + self.testimonials().len()
            + self.blog().len()
    }
}

/// Brand singleton
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandEntry {
    pub name: Option<String>,
    pub slogan: Option<String>,
    pub description: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
}

/// Product record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductEntry {
    /// Numeric id, doubles as the display order in the CMS
    pub id: Option<serde_json::Number>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub price: Option<PriceValue>,
    pub description: Option<String>,
    pub img: Option<String>,
}

/// Featured-collection record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturedEntry {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Any JSON number, passed through to the CMS as written
    pub order: Option<serde_json::Number>,
    pub img: Option<String>,
}

/// Customer testimonial
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialEntry {
    pub name: Option<String>,
    pub role: Option<String>,
    pub text: Option<String>,
}

/// Blog teaser
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogEntry {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
}

/// Price as written in the content file: usually `"€49"`, sometimes a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Text(String),
    Number(serde_json::Number),
}

impl PriceValue {
    /// Display form stored in the CMS `price` string field. A numeric zero
    /// counts as no price and renders empty.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) if n.as_f64() == Some(0.0) => String::new(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for PriceValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Accept a list only when the value really is an array; anything else
/// (null, object, string) counts as absent.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect::<Result<Vec<T>, D::Error>>()
            .map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "brand": { "name": "Lumiára", "slogan": "Свет вашей кожи", "contactEmail": "hello@lumiara.example" },
        "products": [
            { "id": 1, "name": "Hydra Glow Cream", "slug": "hydra-glow-cream", "price": "€49", "img": "/assets/product1.svg" },
            { "id": 2, "name": "Silk Serum", "price": 69 }
        ],
        "featured": [ { "title": "Ночная маска", "order": 1 } ],
        "testimonials": [ { "name": "Анна", "text": "Прекрасно!" } ],
        "blog": [ { "title": "Уход зимой", "excerpt": "..." } ],
        "extra": { "ignored": true }
    }"#;

    #[test]
    fn test_parse_full_file() {
        let content = ContentFile::from_json_str(SAMPLE).unwrap();

        let brand = content.brand.as_ref().unwrap();
        assert_eq!(brand.name.as_deref(), Some("Lumiára"));
        assert_eq!(brand.contact_email.as_deref(), Some("hello@lumiara.example"));
        assert!(brand.phone.is_none());

        assert_eq!(content.products().len(), 2);
        assert_eq!(content.products()[0].price, Some(PriceValue::from("€49")));
        assert_eq!(content.products()[1].price.as_ref().unwrap().as_text(), "69");
        assert_eq!(content.featured()[0].order, Some(1.into()));
        assert_eq!(content.testimonials()[0].role, None);
        assert_eq!(content.blog()[0].slug, None);
        assert_eq!(content.document_count(), 6);
    }

    #[test]
    fn test_non_array_lists_are_absent() {
        let content = ContentFile::from_json_str(
            r#"{ "products": { "id": 1 }, "featured": null, "blog": "nope" }"#,
        )
        .unwrap();

        assert!(content.products.is_none());
        assert!(content.featured.is_none());
        assert!(content.blog.is_none());
        assert!(content.products().is_empty());
        assert_eq!(content.document_count(), 0);
    }

    #[test]
    fn test_fractional_numbers_are_kept() {
        let content = ContentFile::from_json_str(
            r#"{ "products": [ { "id": 1, "name": "A" } ], "featured": [ { "title": "x", "order": 1.5 } ] }"#,
        )
        .unwrap();

        assert_eq!(content.products().len(), 1);
        assert_eq!(content.featured()[0].order.as_ref().unwrap().as_f64(), Some(1.5));
    }

    #[test]
    fn test_zero_price_renders_empty() {
        let content = ContentFile::from_json_str(
            r#"{ "products": [ { "name": "A", "price": 0 }, { "name": "B", "price": 12.5 } ] }"#,
        )
        .unwrap();

        assert_eq!(content.products()[0].price.as_ref().unwrap().as_text(), "");
        assert_eq!(content.products()[1].price.as_ref().unwrap().as_text(), "12.5");
    }

    #[test]
    fn test_empty_object() {
        let content = ContentFile::from_json_str("{}").unwrap();
        assert!(content.brand.is_none());
        assert_eq!(content.document_count(), 0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(ContentFile::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let content = ContentFile::from_path(file.path()).unwrap();
        assert_eq!(content.products().len(), 2);
    }

    #[test]
    fn test_from_missing_path_is_io_error() {
        let err = ContentFile::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::SharedError::Io(_)));
    }
}
