//! Candidate detection.
//!
//! Walks the tree depth-first and collects every bare link paragraph: a
//! paragraph whose single child is either plain text, or a titleless link
//! whose only child is text identical to its href. Styled or descriptive link
//! text never qualifies. The walk only reads the tree.

use crate::ast::{Node, NodeKind, NodePath};
use crate::normalize::normalize_url;

/// A paragraph eligible for transformation, with its canonical URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: NodePath,
    pub url: String,
}

/// Collect candidates in document order.
pub fn scan(tree: &Node) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    visit(tree, NodePath::root(), &mut candidates);
    tracing::debug!(count = candidates.len(), "scanned document for bare links");
    candidates
}

fn visit(node: &Node, path: NodePath, candidates: &mut Vec<Candidate>) {
    if node.is_paragraph() {
        if let Some(url) = bare_link_text(node).and_then(normalize_url) {
            candidates.push(Candidate {
                path: path.clone(),
                url,
            });
        }
    }

    for (index, child) in node.children.iter().enumerate() {
        visit(child, path.child(index), candidates);
    }
}

/// Raw URL text of a bare link paragraph.
fn bare_link_text(paragraph: &Node) -> Option<&str> {
    let [child] = paragraph.children.as_slice() else {
        return None;
    };

    match &child.kind {
        NodeKind::Text(value) => Some(value.as_str()),
        NodeKind::Link { url, title: None } => match child.children.as_slice() {
            [only] if only.text_value() == Some(url.as_str()) => Some(url.as_str()),
            _ => None,
        },
        _ => None,
    }
}
