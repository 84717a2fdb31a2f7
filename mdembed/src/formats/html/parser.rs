//! HTML parsing (HTML fragment → hast)
//!
//! Pipeline: HTML string → RcDom → hast nodes
//!
//! Fragments are parsed in the context of a `<template>` element, the most
//! permissive context there is: table parts, metadata elements, and leading
//! comments all stay where they were written. The parsed nodes are read back
//! from the fragment's root.

use crate::ast::{Element, HastNode};
use html5ever::tendril::TendrilSink;
use html5ever::{ns, parse_fragment, LocalName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Root element of an HTML fragment, or `None` when it contains no element.
pub fn html_to_element(html: &str) -> Option<Element> {
    html_to_nodes(html).into_iter().find_map(|node| match node {
        HastNode::Element(element) => Some(element),
        _ => None,
    })
}

/// All top-level nodes of an HTML fragment, in source order.
pub fn html_to_nodes(html: &str) -> Vec<HastNode> {
    let context = QualName::new(None, ns!(html), LocalName::from("template"));
    let dom = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        context,
        Vec::new(),
        false,
    )
    .one(html);

    match child_element(&dom.document, "html") {
        Some(root) => convert_children(&root),
        None => Vec::new(),
    }
}

fn child_element(parent: &Handle, tag: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, NodeData::Element { name, .. } if &*name.local == tag))
        .cloned()
}

fn convert_children(parent: &Handle) -> Vec<HastNode> {
    parent
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}

fn convert_node(handle: &Handle) -> Option<HastNode> {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => Some(HastNode::Element(Element {
            tag_name: name.local.to_string(),
            properties: attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect(),
            children: convert_children(handle),
        })),
        NodeData::Text { contents } => Some(HastNode::Text(contents.borrow().to_string())),
        NodeData::Comment { contents } => Some(HastNode::Comment(contents.to_string())),
        _ => None,
    }
}
