//! The embedding pass over a document tree.
//!
//! Pipeline: scan → dispatch (sequential per candidate) → fetch (concurrent
//! across candidates) → splice.
//!
//! Every fetch runs to completion. Successful results are spliced into the
//! tree even when another candidate failed; the first failure in document
//! order is then returned for the whole pass.

use crate::ast::Node;
use crate::cache::{Cache, MemoryCache};
use crate::dispatch::resolve;
use crate::error::EmbedError;
use crate::fetch::Fetcher;
use crate::hooks::{ErrorHandler, HtmlHandler};
use crate::scan::scan;
use crate::splice::splice;
use crate::transformer::{Transformer, TransformerConfig, TransformerEntry, TransformerRegistry};
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;

/// Replaces bare link paragraphs with embeds.
///
/// # Examples
///
/// ```ignore
/// let embedder = Embedder::builder()
///     .transformer(Arc::new(Video))
///     .cache(Arc::new(MemoryCache::new()))
///     .build();
///
/// embedder.transform(&mut tree).await?;
/// ```
#[derive(Clone)]
pub struct Embedder {
    registry: TransformerRegistry,
    cache: Option<Arc<dyn Cache>>,
    html_handler: Option<Arc<dyn HtmlHandler>>,
    error_handler: Option<Arc<dyn ErrorHandler>>,
}

impl Embedder {
    pub fn builder() -> EmbedderBuilder {
        EmbedderBuilder::default()
    }

    pub fn registry(&self) -> &TransformerRegistry {
        &self.registry
    }

    /// Run one pass over `tree`, mutating matched paragraphs in place.
    ///
    /// Without a configured cache a fresh [`MemoryCache`] is used for this call only.
    pub async fn transform<'t>(&self, tree: &'t mut Node) -> Result<&'t mut Node, EmbedError> {
        let run_cache;
        let cache: &dyn Cache = match &self.cache {
            Some(cache) => cache.as_ref(),
            None => {
                run_cache = MemoryCache::new();
                &run_cache
            }
        };
        let fetcher = Fetcher {
            cache,
            html_handler: self.html_handler.as_deref(),
            error_handler: self.error_handler.as_deref(),
        };

        let candidates = scan(tree);
        let dispatched = resolve(candidates, self.registry.bindings()).await;
        let results = join_all(dispatched.iter().map(|d| fetcher.fetch(d))).await;

        let mut first_error = None;
        for (dispatched, result) in dispatched.iter().zip(results) {
            match result {
                Ok(Some(html)) => {
                    splice(tree, &dispatched.candidate.path, &html);
                }
                Ok(None) => {}
                Err(error) => {
                    first_error.get_or_insert(error);
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(tree),
        }
    }
}

impl fmt::Debug for Embedder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Embedder")
            .field("transformers", &self.registry.names())
            .field("cache", &self.cache.is_some())
            .field("html_handler", &self.html_handler.is_some())
            .field("error_handler", &self.error_handler.is_some())
            .finish()
    }
}

/// Builder for [`Embedder`]. Transformers are dispatched in the order they are added.
#[derive(Default)]
pub struct EmbedderBuilder {
    registry: TransformerRegistry,
    cache: Option<Arc<dyn Cache>>,
    html_handler: Option<Arc<dyn HtmlHandler>>,
    error_handler: Option<Arc<dyn ErrorHandler>>,
}

impl EmbedderBuilder {
    pub fn transformer(mut self, transformer: Arc<dyn Transformer>) -> Self {
        self.registry.register(transformer);
        self
    }

    pub fn transformer_with_config(
        mut self,
        transformer: Arc<dyn Transformer>,
        config: TransformerConfig,
    ) -> Self {
        self.registry.register_with_config(transformer, config);
        self
    }

    /// Append several entries, bare or configured, keeping their order.
    pub fn transformers<I, E>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<TransformerEntry>,
    {
        for entry in entries {
            match entry.into() {
                TransformerEntry::Bare(transformer) => self.registry.register(transformer),
                TransformerEntry::Configured(transformer, config) => {
                    self.registry.register_with_config(transformer, config)
                }
            };
        }
        self
    }

    /// Share a cache across runs.
    pub fn cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn handle_html(mut self, handler: Arc<dyn HtmlHandler>) -> Self {
        self.html_handler = Some(handler);
        self
    }

    pub fn handle_error(mut self, handler: Arc<dyn ErrorHandler>) -> Self {
        self.error_handler = Some(handler);
        self
    }

    pub fn build(self) -> Embedder {
        Embedder {
            registry: self.registry,
            cache: self.cache,
            html_handler: self.html_handler,
            error_handler: self.error_handler,
        }
    }
}
