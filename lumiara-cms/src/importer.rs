//! Content importer
//!
//! Writes the content file to the store in one sequential pass:
//! brand (upsert on a fixed id), then one create per product, featured
//! entry, testimonial and blog post, in file order. The first failure
//! aborts the run; documents already written stay written.

use crate::error::{ImportError, ImportResult};
use crate::store::ContentStore;
use chrono::{DateTime, Utc};
use shared::{
    BlogPostDocument, BrandDocument, ContentFile, Document, FeaturedDocument, ProductDocument,
    TestimonialDocument,
};
use std::path::Path;
use tracing::{info, warn};

/// What a finished run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Brand document id, when the file had a brand
    pub brand: Option<String>,
    /// Ids of created products, in file order
    pub products: Vec<String>,
    pub featured: Vec<String>,
    pub testimonials: Vec<String>,
    pub blog_posts: Vec<String>,
}

impl ImportReport {
    /// Total number of documents written
    pub fn total(&self) -> usize {
        usize::from(self.brand.is_some())
            + self.products.len()
            + self.featured.len()
            + self.testimonials.len()
            + self.blog_posts.len()
    }
}

/// Sequential importer over any [`ContentStore`]
pub struct Importer<S> {
    store: S,
    clock: fn() -> DateTime<Utc>,
}

impl<S: ContentStore> Importer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: shared::util::now_utc,
        }
    }

    /// Replace the clock used for `publishedAt`
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load a content file and import it
    pub async fn run_path(&self, path: impl AsRef<Path>) -> ImportResult<ImportReport> {
        let path = path.as_ref();
        let content = ContentFile::from_path(path)?;
        info!(
            path = %path.display(),
            documents = content.document_count(),
            "Content file loaded"
        );
        self.run(&content).await
    }

    /// Import parsed content
    pub async fn run(&self, content: &ContentFile) -> ImportResult<ImportReport> {
        let mut report = ImportReport::default();

        if let Some(brand) = &content.brand {
            let doc = Document::Brand(BrandDocument::from_entry(brand));
            let id = self.upsert(&doc).await?;
            info!("Brand imported.");
            report.brand = Some(id);
        }

        for entry in content.products() {
            let doc = Document::Product(ProductDocument::from_entry(entry)?);
            let id = self.create(&doc).await?;
            info!("Created product {}", id);
            report.products.push(id);
        }

        for entry in content.featured() {
            let doc = Document::Featured(FeaturedDocument::from_entry(entry));
            let id = self.create(&doc).await?;
            info!("Created featured {}", id);
            report.featured.push(id);
        }

        for entry in content.testimonials() {
            let doc = Document::Testimonial(TestimonialDocument::from_entry(entry));
            let id = self.create(&doc).await?;
            info!("Created testimonial {}", id);
            report.testimonials.push(id);
        }

        for entry in content.blog() {
            let doc = Document::BlogPost(BlogPostDocument::from_entry(entry, (self.clock)())?);
            let id = self.create(&doc).await?;
            info!("Created blog post {}", id);
            report.blog_posts.push(id);
        }

        info!(documents = report.total(), "Import finished.");
        Ok(report)
    }

    async fn create(&self, doc: &Document) -> ImportResult<String> {
        check_schema(doc);
        self.store
            .create(doc)
            .await
            .map_err(|e| ImportError::store(doc.doc_type(), e))
    }

    async fn upsert(&self, doc: &Document) -> ImportResult<String> {
        check_schema(doc);
        self.store
            .create_or_replace(doc)
            .await
            .map_err(|e| ImportError::store(doc.doc_type(), e))
    }
}

// Schema violations are reported but still sent; the store decides.
fn check_schema(doc: &Document) {
    if let Err(e) = doc.validate() {
        warn!(doc_type = doc.doc_type(), label = doc.label(), "{}", e);
    }
}
