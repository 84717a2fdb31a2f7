//! HTML serialization (tree → HTML)
//!
//! Pipeline: tree → RcDom handles → HTML string
//!
//! A node carrying render data is emitted as its override element; its own
//! kind and children are not rendered.

use crate::ast::{Element, HastNode, Node, NodeKind, RenderData};
use crate::error::EmbedError;
use crate::formats::html::parser::html_to_nodes;
use crate::formats::html::HtmlOptions;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node as DomNode, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Rendering state inherited from ancestors
#[derive(Debug, Clone, Copy, Default)]
struct Scope {
    /// Inside an item of a tight list: paragraphs render without `<p>`
    tight: bool,
    /// Inside a table header row: cells render as `<th>`
    header: bool,
}

/// Serialize a tree to HTML. Top-level blocks are separated by newlines.
pub fn render_html(tree: &Node, options: &HtmlOptions) -> Result<String, EmbedError> {
    let top_level = match (&tree.kind, &tree.data) {
        (NodeKind::Root, None) => tree.children.as_slice(),
        _ => std::slice::from_ref(tree),
    };

    let mut blocks = Vec::new();
    for node in top_level {
        for handle in render_node(node, options, Scope::default()) {
            blocks.push(serialize_handle(&handle)?);
        }
    }

    Ok(blocks.join("\n"))
}

fn render_node(node: &Node, options: &HtmlOptions, scope: Scope) -> Vec<Handle> {
    if let Some(data) = &node.data {
        return vec![render_override(data)];
    }

    let element = |tag: &str, attrs: Vec<(&str, &str)>, child_scope: Scope| {
        let handle = create_element(tag, attrs);
        append_all(&handle, render_children(node, options, child_scope));
        vec![handle]
    };
    let block = Scope::default();

    match &node.kind {
        NodeKind::Root => render_children(node, options, block),
        NodeKind::Paragraph if scope.tight => render_children(node, options, scope),
        NodeKind::Paragraph => element("p", vec![], scope),
        NodeKind::Heading { depth } => {
            let tag = format!("h{}", (*depth).clamp(1, 6));
            element(tag.as_str(), vec![], scope)
        }
        NodeKind::Text(value) => vec![create_text(value)],
        NodeKind::Link { url, title } => {
            let mut attrs = vec![("href", url.as_str())];
            if let Some(title) = title {
                attrs.push(("title", title.as_str()));
            }
            element("a", attrs, scope)
        }
        NodeKind::Image { url, title } => {
            let alt = plain_text(node);
            let mut attrs = vec![("src", url.as_str()), ("alt", alt.as_str())];
            if let Some(title) = title {
                attrs.push(("title", title.as_str()));
            }
            vec![create_element("img", attrs)]
        }
        NodeKind::Emphasis => element("em", vec![], scope),
        NodeKind::Strong => element("strong", vec![], scope),
        NodeKind::Delete => element("del", vec![], scope),
        NodeKind::InlineCode(value) => {
            let code = create_element("code", vec![]);
            append_all(&code, vec![create_text(value)]);
            vec![code]
        }
        NodeKind::Code { lang, value } => {
            let class = lang.as_ref().map(|lang| format!("language-{lang}"));
            let attrs = match &class {
                Some(class) => vec![("class", class.as_str())],
                None => vec![],
            };
            let code = create_element("code", attrs);
            append_all(&code, vec![create_text(value)]);
            let pre = create_element("pre", vec![]);
            append_all(&pre, vec![code]);
            vec![pre]
        }
        NodeKind::Html(raw) if options.raw_html => {
            html_to_nodes(raw.trim()).iter().map(create_hast).collect()
        }
        NodeKind::Html(_) => Vec::new(),
        NodeKind::Blockquote => element("blockquote", vec![], block),
        NodeKind::List {
            ordered,
            start,
            tight,
        } => {
            let start = start
                .filter(|start| *ordered && *start != 1)
                .map(|start| start.to_string());
            let attrs = match &start {
                Some(start) => vec![("start", start.as_str())],
                None => vec![],
            };
            let tag = if *ordered { "ol" } else { "ul" };
            let item_scope = Scope {
                tight: *tight,
                header: false,
            };
            element(tag, attrs, item_scope)
        }
        NodeKind::ListItem { checked: None } => element("li", vec![], scope),
        NodeKind::ListItem {
            checked: Some(checked),
        } => {
            let mut attrs = vec![("type", "checkbox")];
            if *checked {
                attrs.push(("checked", ""));
            }
            attrs.push(("disabled", ""));

            let item = create_element("li", vec![]);
            let mut children = vec![create_element("input", attrs), create_text(" ")];
            children.extend(render_children(node, options, scope));
            append_all(&item, children);
            vec![item]
        }
        NodeKind::ThematicBreak => vec![create_element("hr", vec![])],
        NodeKind::Break => vec![create_element("br", vec![])],
        NodeKind::Table => element("table", vec![], block),
        NodeKind::TableRow { header } => {
            let row_scope = Scope {
                tight: false,
                header: *header,
            };
            element("tr", vec![], row_scope)
        }
        NodeKind::TableCell => element(if scope.header { "th" } else { "td" }, vec![], block),
    }
}

fn render_children(node: &Node, options: &HtmlOptions, scope: Scope) -> Vec<Handle> {
    node.children
        .iter()
        .flat_map(|child| render_node(child, options, scope))
        .collect()
}

fn render_override(data: &RenderData) -> Handle {
    let attrs = data
        .h_properties
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    let handle = create_element(&data.h_name, attrs);
    append_all(&handle, data.h_children.iter().map(create_hast).collect());
    handle
}

fn create_hast(node: &HastNode) -> Handle {
    match node {
        HastNode::Element(Element {
            tag_name,
            properties,
            children,
        }) => {
            let attrs = properties
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            let handle = create_element(tag_name, attrs);
            append_all(&handle, children.iter().map(create_hast).collect());
            handle
        }
        HastNode::Text(text) => create_text(text),
        HastNode::Comment(text) => create_comment(text),
    }
}

/// Concatenated text of a node's descendants
fn plain_text(node: &Node) -> String {
    let mut output = String::new();
    collect_text(node, &mut output);
    output
}

fn collect_text(node: &Node, output: &mut String) {
    match &node.kind {
        NodeKind::Text(value) | NodeKind::InlineCode(value) => output.push_str(value),
        _ => {
            for child in &node.children {
                collect_text(child, output);
            }
        }
    }
}

fn append_all(parent: &Handle, children: Vec<Handle>) {
    parent.children.borrow_mut().extend(children);
}

fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn create_text(text: &str) -> Handle {
    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

fn create_comment(text: &str) -> Handle {
    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Comment {
            contents: text.to_string().into(),
        },
    })
}

fn serialize_handle(handle: &Handle) -> Result<String, EmbedError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(handle.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| EmbedError::Serialization(format!("HTML serialization failed: {e}")))?;

    String::from_utf8(output)
        .map_err(|e| EmbedError::Serialization(format!("UTF-8 conversion failed: {e}")))
}
