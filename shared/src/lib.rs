//! Shared types for Lumiára
//!
//! Content model used by both the CMS importer and the storefront:
//! the static content file, the CMS document shapes, the schema catalogue,
//! and small helpers for slugs and prices.

pub mod content;
pub mod document;
pub mod error;
pub mod price;
pub mod schema;
pub mod slug;
pub mod util;

// Re-exports
pub use content::{BlogEntry, BrandEntry, ContentFile, FeaturedEntry, ProductEntry, TestimonialEntry};
pub use document::{
    BlogPostDocument, BrandDocument, Document, FeaturedDocument, ProductDocument, Slug,
    TestimonialDocument,
};
pub use error::{SharedError, SharedResult};
pub use serde::{Deserialize, Serialize};
