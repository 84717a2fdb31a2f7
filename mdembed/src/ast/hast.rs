//! Core data structures for HTML fragments spliced into the document.

use serde::{Deserialize, Serialize};

/// A node of an HTML fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HastNode {
    Element(Element),
    Text(String),
    Comment(String),
}

/// An HTML element with its attributes in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag_name: String,
    pub properties: Vec<(String, String)>,
    pub children: Vec<HastNode>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: HastNode) -> Self {
        self.children.push(child);
        self
    }

    /// Value of the first attribute called `name`.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
