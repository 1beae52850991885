//! Tree walks
//!
//! All walks borrow the tree for their whole lifetime. Callers that need to
//! release the tree between steps use [`next_in_subtree`] directly.

use crate::{DomTree, NodeId};

/// Children of a node, first to last
pub struct Children<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a DomTree, first: Option<NodeId>) -> Self {
        Self { tree, next: first }
    }
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

/// Parent chain, nearest first
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(tree: &'a DomTree, parent: Option<NodeId>) -> Self {
        Self { tree, next: parent }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Pre-order walk of a subtree, starting with its root
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: Option<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(tree: &'a DomTree, root: NodeId) -> Self {
        Self {
            tree,
            root,
            next: Some(root),
        }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = next_in_subtree(self.tree, current, self.root);
        Some(current)
    }
}

/// Pre-order successor of `current` without leaving the subtree of `root`
pub fn next_in_subtree(tree: &DomTree, current: NodeId, root: NodeId) -> Option<NodeId> {
    if let Some(child) = tree.first_child(current) {
        return Some(child);
    }
    let mut node = current;
    loop {
        if node == root {
            return None;
        }
        if let Some(sibling) = tree.next_sibling(node) {
            return Some(sibling);
        }
        node = tree.parent(node)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendants_stay_in_subtree() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = tree.create_element("div");
        let a1 = tree.create_element("p");
        let a2 = tree.create_text("x");
        let b = tree.create_element("div");
        tree.append_child(root, a).unwrap();
        tree.append_child(a, a1).unwrap();
        tree.append_child(a1, a2).unwrap();
        tree.append_child(root, b).unwrap();

        let sub: Vec<_> = tree.descendants(a).collect();
        assert_eq!(sub, vec![a, a1, a2]);

        let all: Vec<_> = tree.descendants(root).collect();
        assert_eq!(all, vec![root, a, a1, a2, b]);
    }

    #[test]
    fn test_single_node_walk() {
        let mut tree = DomTree::new();
        let lone = tree.create_text("t");
        assert_eq!(tree.descendants(lone).collect::<Vec<_>>(), vec![lone]);
        assert_eq!(next_in_subtree(&tree, lone, lone), None);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = tree.create_element("div");
        let b = tree.create_element("span");
        tree.append_child(root, a).unwrap();
        tree.append_child(a, b).unwrap();
        assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![a, root]);
        assert_eq!(tree.ancestors(root).count(), 0);
    }
}
