//! Embed fetching.
//!
//! For a dispatched candidate: look the raw HTML up in the cache, or ask the
//! transformer and store what it returned (before any post-processing), then
//! run the optional post-processing hook. A failure of the fetch, the cache
//! write, or the hook goes to the error hook when one is configured, and is
//! returned wrapped with the URL and transformer name otherwise.

use crate::cache::{cache_key, Cache};
use crate::dispatch::Dispatched;
use crate::error::{banner, BoxError, EmbedError};
use crate::hooks::{EmbedInfo, ErrorHandler, ErrorInfo, HtmlHandler};
use crate::transformer::{EmbedHtml, TransformerBinding};

/// Everything a fetch needs besides the candidate itself.
pub struct Fetcher<'a> {
    pub cache: &'a dyn Cache,
    pub html_handler: Option<&'a dyn HtmlHandler>,
    pub error_handler: Option<&'a dyn ErrorHandler>,
}

impl Fetcher<'_> {
    /// Final HTML for a dispatched candidate. `Ok(None)` leaves the node untouched.
    pub async fn fetch(&self, dispatched: &Dispatched<'_>) -> Result<EmbedHtml, EmbedError> {
        let url = dispatched.candidate.url.as_str();
        let binding = dispatched.binding;
        let name = binding.name();
        let key = cache_key(name, url);

        let cached = self
            .cache
            .get(&key)
            .await
            .map_err(|source| EmbedError::transform(url, name, source))?;

        match self.produce(cached, &key, url, binding).await {
            Ok(html) => Ok(html),
            Err(error) => self.recover(error, url, binding).await,
        }
    }

    async fn produce(
        &self,
        cached: Option<EmbedHtml>,
        key: &str,
        url: &str,
        binding: &TransformerBinding,
    ) -> Result<EmbedHtml, BoxError> {
        let html = match cached {
            Some(html) => {
                tracing::trace!(key, "embed cache hit");
                html
            }
            None => {
                let html = binding
                    .transformer
                    .get_html(url, binding.config.as_ref())
                    .await?;
                let html = trimmed(html);
                self.cache.set(key, html.clone()).await?;
                html
            }
        };

        match self.html_handler {
            Some(handler) => {
                let info = EmbedInfo {
                    url,
                    transformer: binding.transformer.as_ref(),
                    config: binding.config.as_ref(),
                };
                Ok(trimmed(handler.handle_html(html, info).await?))
            }
            None => Ok(html),
        }
    }

    async fn recover(
        &self,
        error: BoxError,
        url: &str,
        binding: &TransformerBinding,
    ) -> Result<EmbedHtml, EmbedError> {
        let name = binding.name();
        let Some(handler) = self.error_handler else {
            return Err(EmbedError::transform(url, name, error));
        };

        tracing::error!("{}\n\n{}", banner(url, name), error);
        let info = ErrorInfo {
            error,
            url,
            transformer: binding.transformer.as_ref(),
            config: binding.config.as_ref(),
        };
        handler
            .handle_error(info)
            .await
            .map(trimmed)
            .map_err(|source| EmbedError::transform(url, name, source))
    }
}

/// Trim surrounding whitespace; blank output counts as no embed.
fn trimmed(html: EmbedHtml) -> EmbedHtml {
    html.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
