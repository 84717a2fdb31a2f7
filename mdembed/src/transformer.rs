//! Transformer trait definition and registry
//!
//! A transformer is a caller-supplied capability that decides whether a URL
//! should be embedded and produces the embed HTML for it. Transformers are
//! registered in priority order; the first one that accepts a URL handles it.

use crate::error::BoxError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Opaque per-registration configuration, forwarded verbatim to [`Transformer::get_html`].
pub type TransformerConfig = serde_json::Value;

/// HTML produced for a URL, or `None` when the node should be left alone.
pub type EmbedHtml = Option<String>;

/// Trait for URL-aware embed providers
///
/// # Examples
///
/// ```ignore
/// struct Video;
///
/// #[async_trait]
/// impl Transformer for Video {
///     fn name(&self) -> &str {
///         "video"
///     }
///
///     async fn should_transform(&self, url: &str) -> bool {
///         url.starts_with("https://videos.example/")
///     }
///
///     async fn get_html(
///         &self,
///         url: &str,
///         _config: Option<&TransformerConfig>,
///     ) -> Result<EmbedHtml, BoxError> {
///         Ok(Some(format!(r#"<iframe src="{url}"></iframe>"#)))
///     }
/// }
/// ```
#[async_trait]
pub trait Transformer: Send + Sync {
    /// Name used in cache keys and error messages
    fn name(&self) -> &str;

    /// Whether this transformer wants to handle `url`
    async fn should_transform(&self, url: &str) -> bool;

    /// Produce the embed HTML for `url`
    ///
    /// `config` is the value the transformer was registered with, if any.
    async fn get_html(
        &self,
        url: &str,
        config: Option<&TransformerConfig>,
    ) -> Result<EmbedHtml, BoxError>;
}

/// A registration as supplied by the caller: a transformer alone, or paired with a config.
#[derive(Clone)]
pub enum TransformerEntry {
    Bare(Arc<dyn Transformer>),
    Configured(Arc<dyn Transformer>, TransformerConfig),
}

impl From<Arc<dyn Transformer>> for TransformerEntry {
    fn from(transformer: Arc<dyn Transformer>) -> Self {
        TransformerEntry::Bare(transformer)
    }
}

impl From<(Arc<dyn Transformer>, TransformerConfig)> for TransformerEntry {
    fn from((transformer, config): (Arc<dyn Transformer>, TransformerConfig)) -> Self {
        TransformerEntry::Configured(transformer, config)
    }
}

/// A transformer together with its optional static config.
#[derive(Clone)]
pub struct TransformerBinding {
    pub transformer: Arc<dyn Transformer>,
    pub config: Option<TransformerConfig>,
}

impl TransformerBinding {
    pub fn name(&self) -> &str {
        self.transformer.name()
    }
}

impl From<TransformerEntry> for TransformerBinding {
    fn from(entry: TransformerEntry) -> Self {
        match entry {
            TransformerEntry::Bare(transformer) => TransformerBinding {
                transformer,
                config: None,
            },
            TransformerEntry::Configured(transformer, config) => TransformerBinding {
                transformer,
                config: Some(config),
            },
        }
    }
}

impl fmt::Debug for TransformerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerBinding")
            .field("transformer", &self.name())
            .field("config", &self.config)
            .finish()
    }
}

/// Ordered list of transformer bindings
///
/// Registration order is dispatch priority. Unlike a lookup table, names are
/// not unique: registering two transformers with the same name keeps both.
#[derive(Clone, Debug, Default)]
pub struct TransformerRegistry {
    bindings: Vec<TransformerBinding>,
}

impl TransformerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize caller entries into bindings, keeping their order
    pub fn from_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<TransformerEntry>,
    {
        TransformerRegistry {
            bindings: entries
                .into_iter()
                .map(|entry| TransformerBinding::from(entry.into()))
                .collect(),
        }
    }

    /// Append a transformer without config
    pub fn register(&mut self, transformer: Arc<dyn Transformer>) -> &mut Self {
        self.bindings.push(TransformerEntry::Bare(transformer).into());
        self
    }

    /// Append a transformer with a static config
    pub fn register_with_config(
        &mut self,
        transformer: Arc<dyn Transformer>,
        config: TransformerConfig,
    ) -> &mut Self {
        self.bindings
            .push(TransformerEntry::Configured(transformer, config).into());
        self
    }

    pub fn bindings(&self) -> &[TransformerBinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Names in dispatch order
    pub fn names(&self) -> Vec<String> {
        self.bindings.iter().map(|b| b.name().to_string()).collect()
    }
}
