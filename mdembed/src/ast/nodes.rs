//! Core data structures for the markdown document tree.

use crate::ast::hast::{Element, HastNode};
use serde::{Deserialize, Serialize};

/// The type of a markdown node, with the fields that belong to that type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading { depth: u8 },
    Text(String),
    Link { url: String, title: Option<String> },
    Image { url: String, title: Option<String> },
    Emphasis,
    Strong,
    Delete,
    InlineCode(String),
    Code { lang: Option<String>, value: String },
    Html(String),
    Blockquote,
    List { ordered: bool, start: Option<usize>, tight: bool },
    /// `checked` is `Some` for task list items
    ListItem { checked: Option<bool> },
    ThematicBreak,
    Break,
    Table,
    TableRow { header: bool },
    TableCell,
}

/// Render override attached to a node.
///
/// When present the serializer emits an `h_name` element with `h_properties`
/// and `h_children` instead of the node's own markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderData {
    pub h_name: String,
    pub h_properties: Vec<(String, String)>,
    pub h_children: Vec<HastNode>,
}

impl From<Element> for RenderData {
    fn from(element: Element) -> Self {
        RenderData {
            h_name: element.tag_name,
            h_properties: element.properties,
            h_children: element.children,
        }
    }
}

/// A markdown node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RenderData>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self::with_children(kind, Vec::new())
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            kind,
            children,
            data: None,
        }
    }

    pub fn root(children: Vec<Node>) -> Self {
        Self::with_children(NodeKind::Root, children)
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::with_children(NodeKind::Paragraph, children)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(value.into()))
    }

    pub fn link(url: impl Into<String>, title: Option<String>, children: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::Link {
                url: url.into(),
                title,
            },
            children,
        )
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self.kind, NodeKind::Paragraph)
    }

    /// The literal value of a text node.
    pub fn text_value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        path.indices()
            .iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    pub fn node_at_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        path.indices()
            .iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }
}

/// Child indices leading from the root to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        NodePath(Vec::new())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        NodePath(indices)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        NodePath(indices)
    }
}
