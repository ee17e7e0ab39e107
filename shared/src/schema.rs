//! CMS schema catalogue
//!
//! Mirrors the document types registered in the content studio, so that
//! documents can be checked locally before they are written.

use crate::error::{SharedError, SharedResult};
use serde_json::Value;

/// Field value kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line string
    String,
    /// Multi-line text
    Text,
    /// `{ _type: "slug", current }`
    Slug,
    Image,
    Number,
    Datetime,
    /// Portable-text block array
    BlockArray,
}

/// One field of a document type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub title: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Field a slug is generated from in the studio
    pub slug_source: Option<&'static str>,
    /// Image hotspot editing enabled
    pub hotspot: bool,
}

impl FieldDef {
    const fn new(name: &'static str, title: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            title,
            kind,
            required: false,
            slug_source: None,
            hotspot: false,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn source(mut self, field: &'static str) -> Self {
        self.slug_source = Some(field);
        self
    }

    const fn hotspot(mut self) -> Self {
        self.hotspot = true;
        self
    }
}

/// A document type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaType {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldDef],
}

impl SchemaType {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

use FieldKind::*;

const PRODUCT_FIELDS: &[FieldDef] = &[
    FieldDef::new("title", "Title", String).required(),
    FieldDef::new("slug", "Slug", Slug).source("title"),
    FieldDef::new("price", "Price", String),
    FieldDef::new("image", "Image", Image).hotspot(),
    FieldDef::new("description", "Description", Text),
    FieldDef::new("order", "Order", Number),
];

const FEATURED_FIELDS: &[FieldDef] = &[
    FieldDef::new("title", "Title", String),
    FieldDef::new("subtitle", "Subtitle", String),
    FieldDef::new("image", "image", Image),
    FieldDef::new("order", "order", Number),
];

const TESTIMONIAL_FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Name", String),
    FieldDef::new("role", "Role", String),
    FieldDef::new("text", "Text", Text),
    FieldDef::new("photo", "photo", Image),
];

const BLOG_POST_FIELDS: &[FieldDef] = &[
    FieldDef::new("title", "Title", String),
    FieldDef::new("slug", "Slug", Slug).source("title"),
    FieldDef::new("excerpt", "Excerpt", Text),
    FieldDef::new("content", "Content", BlockArray),
    FieldDef::new("coverImage", "Cover image", Image),
    FieldDef::new("publishedAt", "Published at", Datetime),
];

const BRAND_FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "Name", String),
    FieldDef::new("slogan", "Slogan", String),
    FieldDef::new("description", "Description", Text),
    FieldDef::new("contactEmail", "Contact Email", String),
    FieldDef::new("phone", "Phone", String),
    FieldDef::new("logo", "Logo", Image),
];

/// Registered types, in studio registration order
static TYPES: [SchemaType; 5] = [
    SchemaType { name: "product", title: "Product", fields: PRODUCT_FIELDS },
    SchemaType { name: "featured", title: "Featured", fields: FEATURED_FIELDS },
    SchemaType { name: "testimonial", title: "Testimonial", fields: TESTIMONIAL_FIELDS },
    SchemaType { name: "blogPost", title: "Blog Post", fields: BLOG_POST_FIELDS },
    SchemaType { name: "brand", title: "Brand", fields: BRAND_FIELDS },
];

/// All document types
pub fn types() -> &'static [SchemaType] {
    &TYPES
}

/// Look up a document type by name
pub fn find(name: &str) -> Option<&'static SchemaType> {
    TYPES.iter().find(|t| t.name == name)
}

/// Validate a serialized document against its type.
///
/// System keys (`_type`, `_id`) are skipped; any other key must be a field
/// of the type and hold a value of the right kind.
pub fn validate(doc_type: &str, doc: &Value) -> SharedResult<()> {
    let schema = find(doc_type)
        .ok_or_else(|| SharedError::validation(doc_type, "unknown document type"))?;
    let object = doc
        .as_object()
        .ok_or_else(|| SharedError::validation(doc_type, "document must be an object"))?;

    for key in object.keys().filter(|k| !k.starts_with('_')) {
        if schema.field(key).is_none() {
            return Err(SharedError::validation(
                doc_type,
                format!("unknown field '{key}'"),
            ));
        }
    }

    for field in schema.fields {
        let value = object.get(field.name).filter(|v| !v.is_null());

        let Some(value) = value else {
            if field.required {
                return Err(SharedError::validation(
                    doc_type,
                    format!("{} is required", field.name),
                ));
            }
            continue;
        };

        check_kind(doc_type, field, value)?;
    }

    Ok(())
}

fn check_kind(doc_type: &str, field: &FieldDef, value: &Value) -> SharedResult<()> {
    let ok = match field.kind {
        String | Text | Datetime => match value.as_str() {
            Some(s) => !(field.required && s.is_empty()),
            None => false,
        },
        Number => value.is_number(),
        Slug => value
            .get("current")
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty()),
        BlockArray => value.is_array(),
        Image => value.is_object(),
    };

    if ok {
        Ok(())
    } else {
        Err(SharedError::validation(
            doc_type,
            format!("field '{}' has an invalid {:?} value", field.name, field.kind),
        ))
    }
}
