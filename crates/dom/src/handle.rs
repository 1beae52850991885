//! Operations shared by every `(tree, id)` node handle
//!
//! `Document`, `Element`, `Text` and `OtherNode` are all a tree handle plus
//! a node id. The functions here implement the common `Node` and
//! `ChildNode` capabilities once; the macros wire them into each type.

use dom_spec::{DocumentPosition, NodeType};
use dom_tree::{NodeData, NodeId};

use crate::tree_ref::TreeRef;
use crate::{AnyNode, Document, Element};

pub(crate) fn node_type(tree: &TreeRef, id: NodeId) -> NodeType {
    tree.borrow().node(id).kind().node_type()
}

pub(crate) fn text_content(tree: &TreeRef, id: NodeId) -> String {
    let tree = tree.borrow();
    match &tree.node(id).data {
        NodeData::Document | NodeData::Doctype { .. } => String::new(),
        NodeData::Text(data) | NodeData::Comment(data) => data.clone(),
        NodeData::ProcessingInstruction { data, .. } => data.clone(),
        NodeData::Element(_) => tree.text_content(id),
    }
}

pub(crate) fn clone_node(tree: &TreeRef, id: NodeId, deep: bool) -> AnyNode {
    let clone = tree.borrow_mut().clone_node(id, deep);
    tree.wrap(clone)
}

pub(crate) fn is_same_node(tree: &TreeRef, id: NodeId, other: &AnyNode) -> bool {
    other
        .handle()
        .is_some_and(|(other_tree, other_id)| tree.same(other_tree) && other_id == id)
}

pub(crate) fn contains(tree: &TreeRef, id: NodeId, other: &AnyNode) -> bool {
    match other.handle() {
        Some((other_tree, other_id)) => {
            tree.same(other_tree) && tree.borrow().contains(id, other_id)
        }
        None => false,
    }
}

pub(crate) fn compare_document_position(
    tree: &TreeRef,
    id: NodeId,
    other: &AnyNode,
) -> DocumentPosition {
    crate::position::compare_from_node(tree, id, other)
}

pub(crate) fn is_connected(tree: &TreeRef, id: NodeId) -> bool {
    tree.borrow().is_connected(id)
}

pub(crate) fn owner_document(tree: &TreeRef, id: NodeId) -> Option<Document> {
    let doc = tree.borrow().owner_document(id)?;
    Some(Document::new(tree.clone(), doc))
}

pub(crate) fn parent_node(tree: &TreeRef, id: NodeId) -> Option<AnyNode> {
    let parent = tree.borrow().parent(id)?;
    Some(tree.wrap(parent))
}

pub(crate) fn parent_element(tree: &TreeRef, id: NodeId) -> Option<Element> {
    let parent = tree.borrow().parent_element(id)?;
    Some(tree.element(parent))
}

pub(crate) fn previous_sibling(tree: &TreeRef, id: NodeId) -> Option<AnyNode> {
    let sibling = tree.borrow().prev_sibling(id)?;
    Some(tree.wrap(sibling))
}

pub(crate) fn next_sibling(tree: &TreeRef, id: NodeId) -> Option<AnyNode> {
    let sibling = tree.borrow().next_sibling(id)?;
    Some(tree.wrap(sibling))
}

/// Child count for containers, UTF-16 length for character data
pub(crate) fn length(tree: &TreeRef, id: NodeId) -> usize {
    let tree = tree.borrow();
    match tree.node(id).character_data() {
        Some(data) => data.encode_utf16().count(),
        None => tree.child_count(id),
    }
}

/// `Node` capability for a `(tree, id)` handle type
macro_rules! impl_node_for_handle {
    ($ty:ident) => {
        impl dom_spec::Node<$crate::HtmlBackend> for $ty {
            fn node_type(&self) -> dom_spec::NodeType {
                $crate::handle::node_type(&self.tree, self.id)
            }

            fn text_content(&self) -> String {
                $crate::handle::text_content(&self.tree, self.id)
            }

            fn clone_node(&self, deep: bool) -> $crate::AnyNode {
                $crate::handle::clone_node(&self.tree, self.id, deep)
            }

            fn is_same_node(&self, other: &$crate::AnyNode) -> bool {
                $crate::handle::is_same_node(&self.tree, self.id, other)
            }

            fn contains(&self, other: &$crate::AnyNode) -> bool {
                $crate::handle::contains(&self.tree, self.id, other)
            }

            fn compare_document_position(&self, other: &$crate::AnyNode) -> dom_spec::DocumentPosition {
                $crate::handle::compare_document_position(&self.tree, self.id, other)
            }

            fn to_node(&self) -> $crate::AnyNode {
                $crate::AnyNode::from(self.clone())
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.tree.same(&other.tree) && self.id == other.id
            }
        }

        impl Eq for $ty {}
    };
}

/// `ChildNode` capability for a `(tree, id)` handle type
macro_rules! impl_child_node_for_handle {
    ($ty:ident) => {
        impl dom_spec::ChildNode<$crate::HtmlBackend> for $ty {
            fn is_connected(&self) -> bool {
                $crate::handle::is_connected(&self.tree, self.id)
            }

            fn owner_document(&self) -> Option<$crate::Document> {
                $crate::handle::owner_document(&self.tree, self.id)
            }

            fn parent_node(&self) -> Option<$crate::AnyNode> {
                $crate::handle::parent_node(&self.tree, self.id)
            }

            fn parent_element(&self) -> Option<$crate::Element> {
                $crate::handle::parent_element(&self.tree, self.id)
            }

            fn previous_sibling(&self) -> Option<$crate::AnyNode> {
                $crate::handle::previous_sibling(&self.tree, self.id)
            }

            fn next_sibling(&self) -> Option<$crate::AnyNode> {
                $crate::handle::next_sibling(&self.tree, self.id)
            }

            fn length(&self) -> usize {
                $crate::handle::length(&self.tree, self.id)
            }
        }
    };
}

/// `ParentNode` capability for a `(tree, id)` handle whose queries search
/// its descendants
macro_rules! impl_parent_node_for_handle {
    ($ty:ident) => {
        impl dom_spec::ParentNode<$crate::HtmlBackend> for $ty {
            fn children(&self) -> $crate::Elements {
                $crate::Elements::children(self.tree.clone(), self.id)
            }

            fn first_element_child(&self) -> Option<$crate::Element> {
                let child = self.tree.borrow().first_element_child(self.id)?;
                Some(self.tree.element(child))
            }

            fn last_element_child(&self) -> Option<$crate::Element> {
                let child = self.tree.borrow().last_element_child(self.id)?;
                Some(self.tree.element(child))
            }

            fn child_element_count(&self) -> usize {
                self.tree.borrow().child_element_count(self.id)
            }

            fn prepend(&self, nodes: &[$crate::AnyNode]) -> dom_spec::DomResult<()> {
                $crate::mutation::prepend(&self.tree, self.id, nodes)
            }

            fn append(&self, nodes: &[$crate::AnyNode]) -> dom_spec::DomResult<()> {
                $crate::mutation::append(&self.tree, self.id, nodes)
            }

            fn replace_children(&self, nodes: &[$crate::AnyNode]) -> dom_spec::DomResult<()> {
                $crate::mutation::replace_children(&self.tree, self.id, nodes)
            }

            fn get_elements_by_tag_name(&self, name: &str) -> $crate::Elements {
                let ids = $crate::query::by_tag_name(&self.tree.borrow(), &[self.id], false, name);
                $crate::Elements::snapshot(self.tree.clone(), ids)
            }

            fn get_elements_by_class_name(&self, names: &str) -> $crate::Elements {
                let ids =
                    $crate::query::by_class_name(&self.tree.borrow(), &[self.id], false, names);
                $crate::Elements::snapshot(self.tree.clone(), ids)
            }

            fn query_selector(
                &self,
                selector: &str,
            ) -> dom_spec::DomResult<Option<$crate::Element>> {
                Ok(self.query_selector_iter(selector)?.next())
            }

            fn query_selector_all(
                &self,
                selector: &str,
            ) -> dom_spec::DomResult<$crate::ElementList> {
                Ok($crate::ElementList::new(
                    self.query_selector_iter(selector)?.collect(),
                ))
            }

            fn query_selector_each<F>(&self, selector: &str, mut f: F) -> dom_spec::DomResult<()>
            where
                F: FnMut($crate::Element) -> bool,
            {
                for element in self.query_selector_iter(selector)? {
                    if !f(element) {
                        break;
                    }
                }
                Ok(())
            }
        }

        impl $ty {
            /// Lazy selector walk over the descendants
            ///
            /// The tree may be mutated between steps.
            pub fn query_selector_iter(
                &self,
                selector: &str,
            ) -> dom_spec::DomResult<$crate::QuerySelectorIter> {
                let compiled = $crate::query::compile(selector)?;
                Ok($crate::QuerySelectorIter::new(
                    self.tree.clone(),
                    compiled,
                    vec![self.id],
                    false,
                ))
            }
        }
    };
}
