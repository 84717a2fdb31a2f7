//! Format adapters
//!
//! Markdown comes in through comrak and HTML goes out through html5ever. The
//! HTML adapter also parses the fragments transformers return.

pub mod html;
pub mod markdown;

pub use html::{render_html, HtmlOptions};
pub use markdown::{parse_markdown, MarkdownOptions};
