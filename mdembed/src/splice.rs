//! Splicing embed HTML into the tree.
//!
//! The candidate paragraph keeps its kind and children; only its render
//! override is replaced with the root element of the parsed HTML.

use crate::ast::{Node, NodePath, RenderData};
use crate::formats::html::html_to_element;

/// Set the render override of the node at `path` from `html`.
///
/// Returns `false` when the node is missing or the HTML holds no element; the
/// tree is left unchanged in both cases.
pub fn splice(tree: &mut Node, path: &NodePath, html: &str) -> bool {
    let Some(element) = html_to_element(html) else {
        tracing::warn!(html, "embed HTML contains no element, leaving node unchanged");
        return false;
    };
    let Some(node) = tree.node_at_mut(path) else {
        return false;
    };

    node.data = Some(RenderData::from(element));
    true
}
