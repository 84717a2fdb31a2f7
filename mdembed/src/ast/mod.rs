//! Document tree for mdembed.
//!
//! The markdown side is an mdast-style tree of owned [`nodes::Node`] values.
//! Every node carries an optional [`nodes::RenderData`] override: when set,
//! the HTML serializer emits that element in place of the node while the
//! node itself keeps its kind and children. The override's element content is
//! expressed with the hast-style types in [`hast`].

pub mod hast;
pub mod nodes;

pub use hast::{Element, HastNode};
pub use nodes::{Node, NodeKind, NodePath, RenderData};
