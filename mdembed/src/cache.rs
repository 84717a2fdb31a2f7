//! Cache capability for fetched embed HTML.
//!
//! Keys are derived from the transformer name and the canonical URL, so one
//! URL cached under two transformers never collides. A stored `None` means
//! "fetched, but no embed" and is a hit like any other value.

use crate::error::BoxError;
use crate::transformer::EmbedHtml;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Key-value store for raw transformer output
///
/// Both operations may suspend so remote stores fit the same interface.
#[async_trait]
pub trait Cache: Send + Sync {
    /// `None` when there is no entry, `Some(value)` otherwise (including a stored `None`).
    async fn get(&self, key: &str) -> Result<Option<EmbedHtml>, BoxError>;

    async fn set(&self, key: &str, value: EmbedHtml) -> Result<(), BoxError>;
}

/// Cache key for `url` fetched through the transformer called `transformer`.
pub fn cache_key(transformer: &str, url: &str) -> String {
    format!("mdembed:{transformer}:{url}")
}

/// In-memory cache, used per run when the caller does not supply one.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, EmbedHtml>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Synchronous view of an entry.
    pub fn peek(&self, key: &str) -> Option<EmbedHtml> {
        self.entries.read().get(key).cloned()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<EmbedHtml>, BoxError> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: EmbedHtml) -> Result<(), BoxError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }
}
