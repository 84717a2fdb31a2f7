//! Optional hooks around a transformer's output.
//!
//! [`HtmlHandler`] post-processes the HTML obtained for a URL (it may wrap,
//! replace, or drop it). [`ErrorHandler`] turns a failure of the fetch or of
//! the post-processing into substitute HTML so the run can continue.

use crate::error::BoxError;
use crate::transformer::{EmbedHtml, Transformer, TransformerConfig};
use async_trait::async_trait;

/// Context handed to [`HtmlHandler::handle_html`].
#[derive(Clone, Copy)]
pub struct EmbedInfo<'a> {
    pub url: &'a str,
    pub transformer: &'a dyn Transformer,
    pub config: Option<&'a TransformerConfig>,
}

/// Context handed to [`ErrorHandler::handle_error`].
pub struct ErrorInfo<'a> {
    pub error: BoxError,
    pub url: &'a str,
    pub transformer: &'a dyn Transformer,
    pub config: Option<&'a TransformerConfig>,
}

#[async_trait]
pub trait HtmlHandler: Send + Sync {
    async fn handle_html(&self, html: EmbedHtml, info: EmbedInfo<'_>)
        -> Result<EmbedHtml, BoxError>;
}

#[async_trait]
pub trait ErrorHandler: Send + Sync {
    async fn handle_error(&self, info: ErrorInfo<'_>) -> Result<EmbedHtml, BoxError>;
}
