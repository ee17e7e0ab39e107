//! CMS document shapes
//!
//! These are the payloads written to the content store. Every document
//! carries its schema type in `_type`; only the brand singleton has a fixed
//! `_id`.

use crate::content::{BlogEntry, BrandEntry, FeaturedEntry, ProductEntry, TestimonialEntry};
use crate::error::{SharedError, SharedResult};
use crate::slug::resolve_slug;
use crate::util::to_cms_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Fixed id of the brand singleton
pub const BRAND_DOCUMENT_ID: &str = "brand-main";

/// Role shown for testimonials that do not name one ("Customer")
pub const DEFAULT_TESTIMONIAL_ROLE: &str = "Покупатель";

/// Any document the importer can write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Document {
    #[serde(rename = "brand")]
    Brand(BrandDocument),
    #[serde(rename = "product")]
    Product(ProductDocument),
    #[serde(rename = "featured")]
    Featured(FeaturedDocument),
    #[serde(rename = "testimonial")]
    Testimonial(TestimonialDocument),
    #[serde(rename = "blogPost")]
    BlogPost(BlogPostDocument),
}

impl Document {
    /// Schema type name (`_type`)
    pub fn doc_type(&self) -> &'static str {
        match self {
            Self::Brand(_) => "brand",
            Self::Product(_) => "product",
            Self::Featured(_) => "featured",
            Self::Testimonial(_) => "testimonial",
            Self::BlogPost(_) => "blogPost",
        }
    }

    /// Fixed document id, if the document has one
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Brand(doc) => Some(&doc.id),
            _ => None,
        }
    }

    /// Short human label for log lines
    pub fn label(&self) -> &str {
        match self {
            Self::Brand(doc) => &doc.name,
            Self::Product(doc) => &doc.title,
            Self::Featured(doc) => &doc.title,
            Self::Testimonial(doc) => &doc.name,
            Self::BlogPost(doc) => &doc.title,
        }
    }

    /// Check the document against its schema definition
    pub fn validate(&self) -> SharedResult<()> {
        let value = serde_json::to_value(self)?;
        crate::schema::validate(self.doc_type(), &value)
    }
}

/// Slug field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(rename = "_type")]
    pub kind: String,
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            kind: "slug".to_string(),
            current: current.into(),
        }
    }
}

/// Brand singleton document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slogan: String,
    pub description: String,
    pub contact_email: String,
    pub phone: String,
}

impl BrandDocument {
    pub fn from_entry(entry: &BrandEntry) -> Self {
        Self {
            id: BRAND_DOCUMENT_ID.to_string(),
            name: text_or_empty(&entry.name),
            slogan: text_or_empty(&entry.slogan),
            description: text_or_empty(&entry.description),
            contact_email: text_or_empty(&entry.contact_email),
            phone: text_or_empty(&entry.phone),
        }
    }
}

/// Product document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    pub title: String,
    pub slug: Slug,
    /// Display price, kept as a string in the CMS
    pub price: String,
    pub description: String,
    pub order: Number,
}

impl ProductDocument {
    /// Build from a content record. Fails when the record has neither a
    /// slug nor a name to derive one from.
    pub fn from_entry(entry: &ProductEntry) -> SharedResult<Self> {
        let slug = resolve_slug(entry.slug.as_deref(), entry.name.as_deref())
            .ok_or_else(|| SharedError::missing_field("product", "name"))?;

        Ok(Self {
            title: text_or_empty(&entry.name),
            slug: Slug::new(slug),
            price: entry
                .price
                .as_ref()
                .map(|p| p.as_text())
                .unwrap_or_default(),
            description: text_or_empty(&entry.description),
            order: entry.id.clone().unwrap_or_else(|| 0.into()),
        })
    }
}

/// Featured collection document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedDocument {
    pub title: String,
    pub subtitle: String,
    pub order: Number,
}

impl FeaturedDocument {
    pub fn from_entry(entry: &FeaturedEntry) -> Self {
        Self {
            title: text_or_empty(&entry.title),
            subtitle: text_or_empty(&entry.subtitle),
            order: entry.order.clone().unwrap_or_else(|| 0.into()),
        }
    }
}

/// Testimonial document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialDocument {
    pub name: String,
    pub role: String,
    pub text: String,
}

impl TestimonialDocument {
    pub fn from_entry(entry: &TestimonialEntry) -> Self {
        let role = match entry.role.as_deref() {
            Some(role) if !role.is_empty() => role.to_string(),
            _ => DEFAULT_TESTIMONIAL_ROLE.to_string(),
        };

        Self {
            name: text_or_empty(&entry.name),
            role,
            text: text_or_empty(&entry.text),
        }
    }
}

/// Blog post document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDocument {
    pub title: String,
    pub slug: Slug,
    pub excerpt: String,
    pub published_at: String,
}

impl BlogPostDocument {
    /// Build from a content record, stamping `publishedAt` with the given time.
    pub fn from_entry(entry: &BlogEntry, published_at: DateTime<Utc>) -> SharedResult<Self> {
        let slug = resolve_slug(entry.slug.as_deref(), entry.title.as_deref())
            .ok_or_else(|| SharedError::missing_field("blog", "title"))?;

        Ok(Self {
            title: text_or_empty(&entry.title),
            slug: Slug::new(slug),
            excerpt: text_or_empty(&entry.excerpt),
            published_at: to_cms_datetime(published_at),
        })
    }
}

fn text_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
