//! Item arena: slotmap-backed sidenav tree with ordered top-level items.

pub mod node;
pub mod tree;

pub use node::NodeId;
pub use tree::Dom;
