//! Text nodes

use dom_tree::NodeId;

use crate::HtmlBackend;
use crate::tree_ref::TreeRef;

/// Text node handle
#[derive(Debug, Clone)]
pub struct Text {
    pub(crate) tree: TreeRef,
    pub(crate) id: NodeId,
}

impl_node_for_handle!(Text);
impl_child_node_for_handle!(Text);

impl Text {
    pub(crate) fn new(tree: TreeRef, id: NodeId) -> Self {
        Self { tree, id }
    }
}

impl dom_spec::Text<HtmlBackend> for Text {
    fn data(&self) -> String {
        self.tree
            .borrow()
            .node(self.id)
            .as_text()
            .map(str::to_string)
            .unwrap_or_default()
    }

    fn set_data(&self, data: &str) {
        self.tree.borrow_mut().set_character_data(self.id, data);
    }
}
