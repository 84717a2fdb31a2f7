//! Error types for embedding operations

use thiserror::Error;

/// Error type returned by caller-supplied capabilities (transformers, caches, hooks).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while embedding or while converting formats
#[derive(Debug, Error)]
pub enum EmbedError {
    /// A transformer, cache, or hook failed while processing a candidate and
    /// nothing recovered from it.
    #[error(
        "The following error occurred while processing `{url}` with the mdembed transformer `{transformer}`:\n\n{source}"
    )]
    Transform {
        /// Canonical URL of the candidate
        url: String,
        /// Name of the transformer that claimed the URL
        transformer: String,
        /// The underlying failure
        #[source]
        source: BoxError,
    },

    /// Error during HTML serialization
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EmbedError {
    pub(crate) fn transform(url: &str, transformer: &str, source: BoxError) -> Self {
        EmbedError::Transform {
            url: url.to_string(),
            transformer: transformer.to_string(),
            source,
        }
    }
}

/// The first line of a transform error message, shared with the diagnostic log.
pub(crate) fn banner(url: &str, transformer: &str) -> String {
    format!(
        "The following error occurred while processing `{url}` with the mdembed transformer `{transformer}`:"
    )
}
