//! Comments, doctypes and processing instructions

use dom_tree::{NodeData, NodeId};

use crate::tree_ref::TreeRef;

/// Handle for node kinds without a dedicated interface
#[derive(Debug, Clone)]
pub struct OtherNode {
    pub(crate) tree: TreeRef,
    pub(crate) id: NodeId,
}

impl_node_for_handle!(OtherNode);
impl_child_node_for_handle!(OtherNode);

impl OtherNode {
    pub(crate) fn new(tree: TreeRef, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Comment or processing-instruction data; doctype name
    pub fn data(&self) -> String {
        match &self.tree.borrow().node(self.id).data {
            NodeData::Comment(data) | NodeData::ProcessingInstruction { data, .. } => data.clone(),
            NodeData::Doctype { name, .. } => name.clone(),
            _ => String::new(),
        }
    }
}
