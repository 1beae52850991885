//! Node collections
//!
//! `Elements` is either live (re-walks the tree on every call) or a
//! snapshot taken when the query ran. `ElementList` and `ChildNodes` back
//! the `NodeList` results.

use std::cell::RefCell;
use std::rc::Rc;

use dom_spec::{ElementCollection, NodeList};
use dom_tree::{DomTree, NodeId};

use crate::tree_ref::TreeRef;
use crate::{AnyNode, Element, HtmlBackend};

#[derive(Debug, Clone)]
enum Source {
    /// Live element children of a node
    Children(NodeId),
    /// Live element roots of a fragment
    Roots(Rc<RefCell<Vec<NodeId>>>),
    /// Fixed result of a tag or class query
    Snapshot(Vec<NodeId>),
}

/// `HTMLCollection`-like view over elements
#[derive(Debug, Clone)]
pub struct Elements {
    tree: TreeRef,
    source: Source,
}

impl Elements {
    pub(crate) fn children(tree: TreeRef, parent: NodeId) -> Self {
        Self {
            tree,
            source: Source::Children(parent),
        }
    }

    pub(crate) fn roots(tree: TreeRef, roots: Rc<RefCell<Vec<NodeId>>>) -> Self {
        Self {
            tree,
            source: Source::Roots(roots),
        }
    }

    pub(crate) fn snapshot(tree: TreeRef, ids: Vec<NodeId>) -> Self {
        Self {
            tree,
            source: Source::Snapshot(ids),
        }
    }

    /// Current element ids, in order
    fn ids(&self, tree: &DomTree) -> Vec<NodeId> {
        match &self.source {
            Source::Children(parent) => tree.element_children(*parent).collect(),
            Source::Roots(roots) => roots
                .borrow()
                .iter()
                .copied()
                .filter(|&id| tree.node(id).is_element())
                .collect(),
            Source::Snapshot(ids) => ids.clone(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
        let ids = self.ids(&self.tree.borrow());
        ids.into_iter().map(|id| self.tree.element(id))
    }
}

impl ElementCollection<HtmlBackend> for Elements {
    fn length(&self) -> usize {
        let tree = self.tree.borrow();
        match &self.source {
            Source::Children(parent) => tree.child_element_count(*parent),
            Source::Snapshot(ids) => ids.len(),
            Source::Roots(_) => self.ids(&tree).len(),
        }
    }

    fn item(&self, index: usize) -> Option<Element> {
        let id = {
            let tree = self.tree.borrow();
            match &self.source {
                Source::Children(parent) => tree.element_children(*parent).nth(index),
                Source::Snapshot(ids) => ids.get(index).copied(),
                Source::Roots(_) => self.ids(&tree).get(index).copied(),
            }
        }?;
        Some(self.tree.element(id))
    }

    fn named_item(&self, name: &str) -> Option<Element> {
        if name.is_empty() {
            return None;
        }
        let id = {
            let tree = self.tree.borrow();
            self.ids(&tree).into_iter().find(|&id| {
                tree.get_attribute(id, "id") == Some(name)
                    || tree.get_attribute(id, "name") == Some(name)
            })
        }?;
        Some(self.tree.element(id))
    }
}

/// Static list of selector matches
#[derive(Debug, Clone, Default)]
pub struct ElementList {
    items: Vec<Element>,
}

impl ElementList {
    pub(crate) fn new(items: Vec<Element>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.items.iter()
    }
}

impl NodeList for ElementList {
    type Item = Element;

    fn length(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<Element> {
        self.items.get(index).cloned()
    }

    fn to_vec(&self) -> Vec<Element> {
        self.items.clone()
    }
}

impl IntoIterator for ElementList {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ElementList {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Live list of a node's children
#[derive(Debug, Clone)]
pub struct ChildNodes {
    tree: TreeRef,
    parent: NodeId,
}

impl ChildNodes {
    pub(crate) fn new(tree: TreeRef, parent: NodeId) -> Self {
        Self { tree, parent }
    }
}

impl NodeList for ChildNodes {
    type Item = AnyNode;

    fn length(&self) -> usize {
        self.tree.borrow().child_count(self.parent)
    }

    fn item(&self, index: usize) -> Option<AnyNode> {
        let id = self.tree.borrow().children(self.parent).nth(index)?;
        Some(self.tree.wrap(id))
    }
}
