//! Bare-link embedding for markdown documents
//!
//!     This crate finds paragraphs that hold nothing but a link and replaces their rendering
//!     with embedded content (an iframe, a card, a player) produced by transformers the caller
//!     plugs in.
//!
//!     TLDR: For transformer authors:
//!         - Implement [`Transformer`]: a name, an async predicate, and an async HTML producer.
//!         - Register transformers in priority order, the first that accepts a URL handles it.
//!         - Return `Ok(None)` to leave a paragraph alone, an error to fail it.
//!         - Never touch the tree: the pipeline owns all mutation.
//!
//! Architecture
//!
//!     The pipeline is a chain of small passes over an owned mdast-style tree (./ast):
//!
//!         scan       → which paragraphs are bare links, and what is their canonical url
//!         dispatch   → which transformer claims each of them
//!         fetch      → cache lookup, transformer call, hooks
//!         splice     → embed html becomes the paragraph's render override
//!
//!     Nodes are addressed by child-index paths rather than references, so the tree stays
//!     exclusively borrowed by the orchestrator while the fetch futures run.
//!
//!     This is a pure lib: no executor is spawned and nothing is printed. Futures are joined on
//!     whatever runtime polls [`Embedder::transform`], and diagnostics go through `tracing`.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── normalize.rs            # Raw link text → canonical url
//!     ├── scan.rs                 # Candidate detection
//!     ├── transformer.rs          # Transformer trait and registry
//!     ├── dispatch.rs             # First-match transformer resolution
//!     ├── cache.rs                # Cache trait and in-memory cache
//!     ├── hooks.rs                # Html / error hooks
//!     ├── fetch.rs                # Per-candidate html production
//!     ├── splice.rs               # Html → render override
//!     ├── pipeline.rs             # Embedder and its builder
//!     ├── ast                     # Tree and hast element model
//!     ├── formats
//!     │   ├── markdown            # comrak adapter (in)
//!     │   └── html                # html5ever adapter (fragments in, documents out)
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── common                  # Mock transformers, log capture
//!     └── pipeline
//!         └── <area>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Library Choices
//!
//!     We never write a markdown parser or an html serializer: comrak parses, html5ever parses
//!     fragments and serializes. The format adapters only map between those libraries' trees and
//!     ours.
//!
pub mod ast;
pub mod cache;
pub mod dispatch;
pub mod error;
pub mod fetch;
pub mod formats;
pub mod hooks;
pub mod normalize;
pub mod pipeline;
pub mod scan;
pub mod splice;
pub mod transformer;

pub use ast::{Element, HastNode, Node, NodeKind, NodePath, RenderData};
pub use cache::{cache_key, Cache, MemoryCache};
pub use error::{BoxError, EmbedError};
pub use formats::{HtmlOptions, MarkdownOptions};
pub use hooks::{EmbedInfo, ErrorHandler, ErrorInfo, HtmlHandler};
pub use normalize::normalize_url;
pub use pipeline::{Embedder, EmbedderBuilder};
pub use transformer::{
    EmbedHtml, Transformer, TransformerBinding, TransformerConfig, TransformerEntry,
    TransformerRegistry,
};

/// Parse markdown, embed its bare links, and render the result as HTML.
pub async fn embed_markdown(
    source: &str,
    embedder: &Embedder,
    markdown: &MarkdownOptions,
    html: &HtmlOptions,
) -> Result<String, EmbedError> {
    let mut tree = formats::parse_markdown(source, markdown);
    embedder.transform(&mut tree).await?;
    formats::render_html(&tree, html)
}
