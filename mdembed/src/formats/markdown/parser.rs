//! Markdown parsing (Markdown → tree)
//!
//! Pipeline: Markdown string → Comrak AST → owned tree

use crate::ast::{Node, NodeKind};
use crate::formats::markdown::MarkdownOptions;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};

/// Parse a Markdown string into a document tree
pub fn parse_markdown(source: &str, options: &MarkdownOptions) -> Node {
    let arena = Arena::new();
    let comrak_options = comrak_options(options);
    let root = parse_document(&arena, source, &comrak_options);

    Node::root(convert_children(root))
}

fn comrak_options(options: &MarkdownOptions) -> Options<'static> {
    let mut comrak = Options::default();
    comrak.extension.autolink = options.autolink;
    comrak.extension.table = options.table;
    comrak.extension.strikethrough = options.strikethrough;
    comrak.extension.tasklist = options.tasklist;
    comrak.extension.front_matter_delimiter = options.front_matter_delimiter.clone();
    comrak
}

/// How a single comrak node maps onto the tree
enum Mapping {
    Node(NodeKind),
    /// Lift the node's children into its parent
    Unwrap,
    Skip,
}

fn convert_children<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    let mut children = Vec::new();

    for child in node.children() {
        match mapping(child) {
            Mapping::Node(kind) => {
                let converted = Node::with_children(kind, convert_children(child));
                push_merging_text(&mut children, converted);
            }
            Mapping::Unwrap => {
                for grandchild in convert_children(child) {
                    push_merging_text(&mut children, grandchild);
                }
            }
            Mapping::Skip => {}
        }
    }

    children
}

fn mapping<'a>(node: &'a AstNode<'a>) -> Mapping {
    let data = node.data.borrow();

    let kind = match &data.value {
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::Heading(heading) => NodeKind::Heading {
            depth: heading.level,
        },
        NodeValue::Text(text) => NodeKind::Text(text.to_string()),
        NodeValue::SoftBreak => NodeKind::Text("\n".to_string()),
        NodeValue::LineBreak => NodeKind::Break,
        NodeValue::Link(link) => NodeKind::Link {
            url: link.url.to_string(),
            title: non_empty(&link.title),
        },
        NodeValue::Image(link) => NodeKind::Image {
            url: link.url.to_string(),
            title: non_empty(&link.title),
        },
        NodeValue::Emph => NodeKind::Emphasis,
        NodeValue::Strong => NodeKind::Strong,
        NodeValue::Strikethrough => NodeKind::Delete,
        NodeValue::Code(code) => NodeKind::InlineCode(code.literal.to_string()),
        NodeValue::CodeBlock(code_block) => NodeKind::Code {
            lang: code_block
                .info
                .split_whitespace()
                .next()
                .map(str::to_string),
            value: code_block.literal.to_string(),
        },
        NodeValue::HtmlBlock(html) => NodeKind::Html(html.literal.to_string()),
        NodeValue::HtmlInline(html) => NodeKind::Html(html.to_string()),
        NodeValue::BlockQuote => NodeKind::Blockquote,
        NodeValue::List(list) => NodeKind::List {
            ordered: matches!(list.list_type, ListType::Ordered),
            start: matches!(list.list_type, ListType::Ordered).then_some(list.start),
            tight: list.tight,
        },
        NodeValue::Item(_) => NodeKind::ListItem { checked: None },
        NodeValue::TaskItem(mark) => NodeKind::ListItem {
            checked: Some(mark.is_some()),
        },
        NodeValue::ThematicBreak => NodeKind::ThematicBreak,
        NodeValue::Table(_) => NodeKind::Table,
        NodeValue::TableRow(header) => NodeKind::TableRow { header: *header },
        NodeValue::TableCell => NodeKind::TableCell,
        NodeValue::FrontMatter(_) => return Mapping::Skip,
        _ => return Mapping::Unwrap,
    };

    Mapping::Node(kind)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Append `node`, folding it into the previous sibling when both are text
fn push_merging_text(children: &mut Vec<Node>, node: Node) {
    if let (Some(last), NodeKind::Text(next)) = (children.last_mut(), &node.kind) {
        if let NodeKind::Text(previous) = &mut last.kind {
            previous.push_str(next);
            return;
        }
    }
    children.push(node);
}
