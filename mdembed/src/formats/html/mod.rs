//! HTML format adapter
//!
//! Two directions:
//! - HTML fragment → [`Element`](crate::ast::Element), used to turn embed HTML into a
//!   render override ([`parser`]).
//! - Tree → HTML string, emitting render overrides in place of the nodes that
//!   carry them ([`serializer`]).
//!
//! # Library Choice
//!
//! We use the `html5ever` + `rcdom` + `markup5ever` ecosystem for HTML parsing and serialization:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//! - `markup5ever`: Serialization infrastructure
//!
//! Embed HTML is trusted: nothing is sanitized on the way in or out.
//!
//! # Element Mapping Table
//!
//! | Tree node            | HTML                                   |
//! |----------------------|----------------------------------------|
//! | Paragraph            | `<p>` (omitted inside tight list items)|
//! | Heading { depth }    | `<h1>`..`<h6>`                         |
//! | Link / Image         | `<a href title>` / `<img src alt title>` |
//! | Emphasis / Strong    | `<em>` / `<strong>`                    |
//! | Delete               | `<del>`                                |
//! | InlineCode / Code    | `<code>` / `<pre><code class="language-*">` |
//! | Html                 | parsed and inlined when `raw_html` is on |
//! | Blockquote           | `<blockquote>`                         |
//! | List / ListItem      | `<ul>`/`<ol start>` / `<li>`           |
//! | task ListItem        | `<li>` led by a disabled checkbox      |
//! | ThematicBreak, Break | `<hr>`, `<br>`                         |
//! | Table / Row / Cell   | `<table>` / `<tr>` / `<th>` or `<td>`  |
//! | any node with data   | the render override element            |

pub mod parser;
pub mod serializer;

pub use parser::{html_to_element, html_to_nodes};
pub use serializer::render_html;

/// Options for HTML serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Pass raw HTML from the markdown source through instead of dropping it
    pub raw_html: bool,
}

impl HtmlOptions {
    pub fn new(raw_html: bool) -> Self {
        Self { raw_html }
    }
}
