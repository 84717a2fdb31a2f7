//! Markdown format adapter
//!
//! Converts CommonMark Markdown into the mdembed document tree.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing. This choice is based on:
//! - CommonMark compliance with GFM extensions (tables, strikethrough, autolinks, task lists)
//! - A full AST rather than an event stream, which maps directly onto our owned tree
//!
//! # Element Mapping Table
//!
//! | Comrak node             | Tree node                 | Notes                                   |
//! |-------------------------|---------------------------|-----------------------------------------|
//! | Document                | Root                      |                                         |
//! | Paragraph               | Paragraph                 |                                         |
//! | Heading                 | Heading { depth }         |                                         |
//! | Text / SoftBreak        | Text                      | Adjacent text is merged into one node   |
//! | LineBreak               | Break                     |                                         |
//! | Link                    | Link { url, title }       | Empty title becomes `None`              |
//! | Image                   | Image { url, title }      | Alt text stays as children              |
//! | Emph / Strong           | Emphasis / Strong         |                                         |
//! | Strikethrough           | Delete                    |                                         |
//! | Code                    | InlineCode                |                                         |
//! | CodeBlock               | Code { lang, value }      | First word of the info string           |
//! | HtmlBlock / HtmlInline  | Html                      |                                         |
//! | BlockQuote              | Blockquote                |                                         |
//! | List / Item             | List / ListItem           | Tightness preserved                     |
//! | TaskItem                | ListItem { checked }      | Any mark counts as checked              |
//! | Table / TableRow / Cell | Table / TableRow / Cell   |                                         |
//! | FrontMatter             | (dropped)                 |                                         |
//! | anything else           | (unwrapped)               | Children are lifted into the parent     |
//!
//! Merging text matters for embedding: a paragraph holding only a URL has
//! exactly one text child no matter how comrak split the inline run.

pub mod parser;

pub use parser::parse_markdown;

/// Comrak extension switches used when parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// GFM autolinks. Autolinked bare URLs become self-titled links, which are
    /// still embed candidates; `www.` autolinks are not, since their text
    /// differs from the generated href.
    pub autolink: bool,
    pub table: bool,
    pub strikethrough: bool,
    pub tasklist: bool,
    /// Front matter fence, `None` to disable front matter parsing.
    pub front_matter_delimiter: Option<String>,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            autolink: false,
            table: true,
            strikethrough: true,
            tasklist: true,
            front_matter_delimiter: Some("---".to_string()),
        }
    }
}
