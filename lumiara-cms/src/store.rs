//! Content store abstraction
//!
//! The importer only needs two write operations, so it talks to this trait
//! rather than to the HTTP client directly.

use crate::ClientResult;
use async_trait::async_trait;
use shared::Document;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Write side of the content store
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Create a new document; returns the id assigned by the store.
    async fn create(&self, doc: &Document) -> ClientResult<String>;

    /// Create or overwrite the document with the same `_id`.
    async fn create_or_replace(&self, doc: &Document) -> ClientResult<String>;
}

/// Store that writes nothing and logs each document instead
#[derive(Debug, Default)]
pub struct DryRunStore {
    counter: AtomicUsize,
}

impl DryRunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents seen so far
    pub fn count(&self) -> usize {
        self.counter.load(Ordering::Relaxed)
    }

    fn record(&self, op: &str, doc: &Document) -> ClientResult<String> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let body = serde_json::to_string(doc)?;
        tracing::info!(op, doc_type = doc.doc_type(), "dry-run: {}", body);

        Ok(doc
            .id()
            .map(str::to_string)
            .unwrap_or_else(|| format!("dry-run-{n}")))
    }
}

#[async_trait]
impl ContentStore for DryRunStore {
    async fn create(&self, doc: &Document) -> ClientResult<String> {
        self.record("create", doc)
    }

    async fn create_or_replace(&self, doc: &Document) -> ClientResult<String> {
        self.record("createOrReplace", doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BrandDocument, BrandEntry, FeaturedDocument, FeaturedEntry};

    #[tokio::test]
    async fn test_dry_run_ids() {
        let store = DryRunStore::new();

        let featured = Document::Featured(FeaturedDocument::from_entry(&FeaturedEntry::default()));
        assert_eq!(store.create(&featured).await.unwrap(), "dry-run-1");
        assert_eq!(store.create(&featured).await.unwrap(), "dry-run-2");

        let brand = Document::Brand(BrandDocument::from_entry(&BrandEntry::default()));
        assert_eq!(store.create_or_replace(&brand).await.unwrap(), "brand-main");
        assert_eq!(store.count(), 3);
    }
}
