//! Raw DOM tree
//!
//! Arena-backed node storage for parsed HTML. Every node of a document,
//! attached or not, is addressed by a [`NodeId`] into one [`DomTree`].
//! Structural edits only rewrite links, so ids stay valid for the lifetime
//! of the tree.

mod iter;
mod node;
mod position;
mod tree;

pub use iter::{Ancestors, Children, Descendants, next_in_subtree};
pub use node::{Attribute, ElementData, Namespace, Node, NodeData, NodeKind};
pub use position::compare_document_position;
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node of every tree
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }

    /// Arena slot of this node
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
