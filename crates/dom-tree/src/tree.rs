//! DOM Tree (arena-based allocation)
//!
//! All nodes of a document, together with every node created for it
//! (parsed fragments, clones, `createElement` results), live in one arena.
//! Links are `NodeId` handles, so detaching and re-attaching never leaves a
//! dangling reference behind. Removed nodes stay in the arena, detached,
//! until the tree is dropped.

use crate::iter::{Ancestors, Children, Descendants};
use crate::{ElementData, Node, NodeData, NodeId};
use dom_spec::{DomError, DomResult};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only its document node at [`NodeId::ROOT`]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Get a node known to belong to this tree
    ///
    /// # Panics
    /// When `id` was not allocated by this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Whether `id` was allocated by this tree
    #[inline]
    pub fn owns(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    /// Add an unlinked node to the arena
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Add a new node as the last child of `parent`
    ///
    /// Tree builders use this while converting parser output; the node is
    /// fresh, so no hierarchy check is needed.
    pub fn append_new(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.push(node);
        self.link_last(parent, id);
        id
    }

    /// Create a detached element; the name is ASCII lower-cased
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(Node::element(&name.to_ascii_lowercase()))
    }

    /// Create a detached element from prepared element data
    pub fn create_element_with(&mut self, data: ElementData) -> NodeId {
        self.push(Node::new(NodeData::Element(data)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(Node::text(text))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(Node::comment(text))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        self.push(Node::new(NodeData::Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        }))
    }

    /// Create a detached document node
    pub fn create_document(&mut self) -> NodeId {
        self.push(Node::document())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child
    }

    #[inline]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).last_child
    }

    #[inline]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev_sibling
    }

    #[inline]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next_sibling
    }

    /// Children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children::new(self, self.first_child(id))
    }

    /// Ancestors from the parent upward (exclusive)
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors::new(self, self.parent(id))
    }

    /// Pre-order walk of the subtree rooted at `id` (inclusive)
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants::new(self, id)
    }

    /// Number of child nodes
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.node(id).first_child.is_some()
    }

    /// Element children in order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).filter(move |&c| self.node(c).is_element())
    }

    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.element_children(id).next()
    }

    pub fn last_element_child(&self, id: NodeId) -> Option<NodeId> {
        let mut child = self.last_child(id);
        while let Some(c) = child {
            if self.node(c).is_element() {
                return Some(c);
            }
            child = self.prev_sibling(c);
        }
        None
    }

    pub fn child_element_count(&self, id: NodeId) -> usize {
        self.element_children(id).count()
    }

    pub fn prev_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut sibling = self.prev_sibling(id);
        while let Some(s) = sibling {
            if self.node(s).is_element() {
                return Some(s);
            }
            sibling = self.prev_sibling(s);
        }
        None
    }

    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut sibling = self.next_sibling(id);
        while let Some(s) = sibling {
            if self.node(s).is_element() {
                return Some(s);
            }
            sibling = self.next_sibling(s);
        }
        None
    }

    /// Parent if it is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).filter(|&p| self.node(p).is_element())
    }

    /// Whether a document node is reachable through the parent chain
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.owner_document(id).is_some()
    }

    /// Nearest document ancestor (exclusive of `id`)
    pub fn owner_document(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id).find(|&a| self.node(a).is_document())
    }

    /// Nearest document among `id` and its ancestors
    pub fn root_document(&self, id: NodeId) -> Option<NodeId> {
        if self.node(id).is_document() {
            return Some(id);
        }
        self.owner_document(id)
    }

    /// Inclusive descendant test: `other` is `id` or lies below it
    pub fn contains(&self, id: NodeId, other: NodeId) -> bool {
        other == id || self.ancestors(other).any(|a| a == id)
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Pre-order concatenation of every text node in the subtree
    pub fn text_content(&self, id: NodeId) -> String {
        let mut buf = String::new();
        self.write_text_content(id, &mut buf);
        buf
    }

    /// Append the subtree's text to `buf`
    pub fn write_text_content(&self, id: NodeId, buf: &mut String) {
        for n in self.descendants(id) {
            if let Some(text) = self.node(n).as_text() {
                buf.push_str(text);
            }
        }
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.node(id).as_element()
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.node_mut(id).as_element_mut()
    }

    /// Upper-cased tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<String> {
        self.element(id).map(ElementData::tag_name)
    }

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.get_attr(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute; no-op on non-elements
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.set_attr(name, value);
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        self.element_mut(id).is_some_and(|e| e.remove_attr(name))
    }

    /// Replace the data of a text or comment node
    pub fn set_character_data(&mut self, id: NodeId, data: &str) {
        match &mut self.node_mut(id).data {
            NodeData::Text(t) | NodeData::Comment(t) => {
                t.clear();
                t.push_str(data);
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Cloning
    // ------------------------------------------------------------------

    /// Copy a node, and with `deep` its whole subtree, into new detached
    /// arena slots. Links of the source are never copied.
    pub fn clone_node(&mut self, id: NodeId, deep: bool) -> NodeId {
        let copy = self.node(id).shallow_copy();
        let clone = self.push(copy);
        if deep {
            let children: Vec<NodeId> = self.children(id).collect();
            for child in children {
                let child_clone = self.clone_node(child, true);
                self.link_last(clone, child_clone);
            }
        }
        clone
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Validate inserting `node` under `parent` without touching any link
    pub fn check_insert(&self, parent: NodeId, node: NodeId) -> DomResult<()> {
        if !self.owns(parent) || !self.owns(node) {
            return Err(DomError::NotFound);
        }
        let parent_node = self.node(parent);
        if !(parent_node.is_element() || parent_node.is_document()) {
            return Err(DomError::HierarchyRequest);
        }
        if self.node(node).is_document() {
            return Err(DomError::HierarchyRequest);
        }
        // `node` may not become its own ancestor
        if self.contains(node, parent) {
            return Err(DomError::HierarchyRequest);
        }
        Ok(())
    }

    fn check_child(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if !self.owns(child) {
            return Err(DomError::NotFound);
        }
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild);
        }
        Ok(())
    }

    /// Unlink a node from its parent and siblings. Its own subtree is kept.
    pub fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = self.node(id);
            (node.parent, node.prev_sibling, node.next_sibling)
        };

        match prev {
            Some(p) => self.node_mut(p).next_sibling = next,
            None => {
                if let Some(par) = parent {
                    self.node_mut(par).first_child = next;
                }
            }
        }
        match next {
            Some(n) => self.node_mut(n).prev_sibling = prev,
            None => {
                if let Some(par) = parent {
                    self.node_mut(par).last_child = prev;
                }
            }
        }

        let node = self.node_mut(id);
        node.parent = None;
        node.prev_sibling = None;
        node.next_sibling = None;
    }

    /// Link a detached node after the last child of `parent`
    fn link_last(&mut self, parent: NodeId, id: NodeId) {
        let last = self.node(parent).last_child;
        {
            let node = self.node_mut(id);
            node.parent = Some(parent);
            node.prev_sibling = last;
            node.next_sibling = None;
        }
        match last {
            Some(l) => self.node_mut(l).next_sibling = Some(id),
            None => self.node_mut(parent).first_child = Some(id),
        }
        self.node_mut(parent).last_child = Some(id);
    }

    /// Link a detached node before `reference`, a child of `parent`
    fn link_before(&mut self, parent: NodeId, id: NodeId, reference: NodeId) {
        let prev = self.node(reference).prev_sibling;
        {
            let node = self.node_mut(id);
            node.parent = Some(parent);
            node.prev_sibling = prev;
            node.next_sibling = Some(reference);
        }
        self.node_mut(reference).prev_sibling = Some(id);
        match prev {
            Some(p) => self.node_mut(p).next_sibling = Some(id),
            None => self.node_mut(parent).first_child = Some(id),
        }
    }

    /// Move `node` to the end of `parent`'s children
    pub fn append_child(&mut self, parent: NodeId, node: NodeId) -> DomResult<()> {
        self.check_insert(parent, node)?;
        tracing::trace!(?parent, ?node, "append_child");
        self.detach(node);
        self.link_last(parent, node);
        Ok(())
    }

    /// Move `node` to the front of `parent`'s children
    pub fn prepend_child(&mut self, parent: NodeId, node: NodeId) -> DomResult<()> {
        let first = self.first_child(parent);
        self.insert_before(parent, node, first)
    }

    /// Move `node` before `reference`, or to the end when `reference` is `None`
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        self.check_insert(parent, node)?;
        let Some(reference) = reference else {
            self.detach(node);
            self.link_last(parent, node);
            return Ok(());
        };
        self.check_child(parent, reference)?;
        if reference == node {
            return Ok(());
        }
        tracing::trace!(?parent, ?node, ?reference, "insert_before");
        self.detach(node);
        self.link_before(parent, node, reference);
        Ok(())
    }

    /// Detach `node`, which must be a child of `parent`
    pub fn remove_child(&mut self, parent: NodeId, node: NodeId) -> DomResult<()> {
        self.check_child(parent, node)?;
        tracing::trace!(?parent, ?node, "remove_child");
        self.detach(node);
        Ok(())
    }

    /// Put `new` where `old` is; `old` ends up fully detached
    pub fn replace_child(&mut self, parent: NodeId, new: NodeId, old: NodeId) -> DomResult<()> {
        self.check_child(parent, old)?;
        self.check_insert(parent, new)?;
        if new == old {
            return Ok(());
        }
        tracing::trace!(?parent, ?new, ?old, "replace_child");
        // `new` may be a sibling of `old`, so unlink it before reading old's links
        self.detach(new);
        let next = self.next_sibling(old);
        self.detach(old);
        match next {
            Some(n) => self.link_before(parent, new, n),
            None => self.link_last(parent, new),
        }
        Ok(())
    }

    /// Detach every child of `parent`
    pub fn clear_children(&mut self, parent: NodeId) {
        let children: Vec<NodeId> = self.children(parent).collect();
        for child in children {
            let node = self.node_mut(child);
            node.parent = None;
            node.prev_sibling = None;
            node.next_sibling = None;
        }
        let node = self.node_mut(parent);
        node.first_child = None;
        node.last_child = None;
    }

    /// Check the link invariants of every node in the arena
    pub fn verify_links(&self) -> Result<(), String> {
        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId::from_index(index);
            if node.first_child.is_some() != node.last_child.is_some() {
                return Err(format!("{id:?}: first/last child disagree"));
            }
            if let Some(first) = node.first_child {
                if self.node(first).prev_sibling.is_some() {
                    return Err(format!("{id:?}: first child has a previous sibling"));
                }
            }
            if let Some(last) = node.last_child {
                if self.node(last).next_sibling.is_some() {
                    return Err(format!("{id:?}: last child has a next sibling"));
                }
            }
            let mut prev = None;
            let mut child = node.first_child;
            while let Some(c) = child {
                let child_node = self.node(c);
                if child_node.parent != Some(id) {
                    return Err(format!("{c:?}: parent link does not point at {id:?}"));
                }
                if child_node.prev_sibling != prev {
                    return Err(format!("{c:?}: previous sibling mismatch"));
                }
                prev = Some(c);
                child = child_node.next_sibling;
            }
            if prev != node.last_child {
                return Err(format!("{id:?}: last child does not end the sibling chain"));
            }
            if let Some(next) = node.next_sibling {
                if self.node(next).prev_sibling != Some(id) {
                    return Err(format!("{id:?}: next sibling does not link back"));
                }
            }
        }
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `<div id=a><span id=b></span></div><div id=c></div>` under a body
    fn sample() -> (DomTree, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        tree.append_child(tree.root(), body).unwrap();
        let a = tree.create_element("div");
        let b = tree.create_element("span");
        let c = tree.create_element("div");
        tree.append_child(body, a).unwrap();
        tree.append_child(a, b).unwrap();
        tree.append_child(body, c).unwrap();
        (tree, body, a, b, c)
    }

    fn child_ids(tree: &DomTree, id: NodeId) -> Vec<NodeId> {
        tree.children(id).collect()
    }

    #[test]
    fn test_append_and_links() {
        let (tree, body, a, b, c) = sample();
        assert_eq!(child_ids(&tree, body), vec![a, c]);
        assert_eq!(tree.parent(b), Some(a));
        assert_eq!(tree.prev_sibling(c), Some(a));
        assert_eq!(tree.next_sibling(a), Some(c));
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_append_moves_node() {
        let (mut tree, body, a, b, c) = sample();
        tree.append_child(c, b).unwrap();
        assert!(!tree.has_children(a));
        assert_eq!(tree.parent(b), Some(c));
        assert_eq!(child_ids(&tree, body), vec![a, c]);
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_insert_before() {
        let (mut tree, body, a, _, c) = sample();
        let x = tree.create_element("p");
        tree.insert_before(body, x, Some(c)).unwrap();
        assert_eq!(child_ids(&tree, body), vec![a, x, c]);

        let y = tree.create_element("p");
        tree.insert_before(body, y, Some(a)).unwrap();
        assert_eq!(child_ids(&tree, body), vec![y, a, x, c]);

        let z = tree.create_element("p");
        tree.insert_before(body, z, None).unwrap();
        assert_eq!(child_ids(&tree, body), vec![y, a, x, c, z]);

        // reorder an attached child
        tree.insert_before(body, z, Some(y)).unwrap();
        assert_eq!(child_ids(&tree, body), vec![z, y, a, x, c]);

        tree.insert_before(body, a, Some(a)).unwrap();
        assert_eq!(child_ids(&tree, body), vec![z, y, a, x, c]);
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_insert_before_requires_child_reference() {
        let (mut tree, body, _, b, _) = sample();
        let x = tree.create_element("p");
        assert_eq!(tree.insert_before(body, x, Some(b)), Err(DomError::NotAChild));
        assert_eq!(tree.parent(x), None);
    }

    #[test]
    fn test_prepend_child() {
        let (mut tree, body, a, _, c) = sample();
        let x = tree.create_element("p");
        tree.prepend_child(body, x).unwrap();
        assert_eq!(child_ids(&tree, body), vec![x, a, c]);

        let empty = tree.create_element("ul");
        let li = tree.create_element("li");
        tree.prepend_child(empty, li).unwrap();
        assert_eq!(tree.first_child(empty), Some(li));
        assert_eq!(tree.last_child(empty), Some(li));
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_remove_child() {
        let (mut tree, body, a, b, c) = sample();
        assert_eq!(tree.remove_child(body, b), Err(DomError::NotAChild));
        tree.remove_child(body, a).unwrap();
        assert_eq!(child_ids(&tree, body), vec![c]);
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.next_sibling(a), None);
        // subtree survives detachment
        assert_eq!(tree.parent(b), Some(a));
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_replace_child() {
        let (mut tree, body, a, b, c) = sample();
        let x = tree.create_element("p");
        tree.replace_child(body, x, a).unwrap();
        assert_eq!(child_ids(&tree, body), vec![x, c]);
        let old = tree.node(a);
        assert!(old.parent.is_none() && old.prev_sibling.is_none() && old.next_sibling.is_none());

        assert_eq!(tree.replace_child(body, a, b), Err(DomError::NotAChild));
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_replace_child_with_sibling() {
        let (mut tree, body, a, _, c) = sample();
        tree.replace_child(body, c, a).unwrap();
        assert_eq!(child_ids(&tree, body), vec![c]);

        let (mut tree, body, a, _, c) = sample();
        tree.replace_child(body, a, c).unwrap();
        assert_eq!(child_ids(&tree, body), vec![a]);
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_hierarchy_checks() {
        let (mut tree, body, a, b, _) = sample();
        assert_eq!(tree.append_child(b, a), Err(DomError::HierarchyRequest));
        assert_eq!(tree.append_child(a, a), Err(DomError::HierarchyRequest));
        let root = tree.root();
        assert_eq!(tree.append_child(body, root), Err(DomError::HierarchyRequest));
        let text = tree.create_text("t");
        assert_eq!(tree.append_child(text, a), Err(DomError::HierarchyRequest));
        // nothing moved
        assert_eq!(tree.parent(a), Some(body));
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_clear_children() {
        let (mut tree, body, a, _, c) = sample();
        tree.clear_children(body);
        assert!(!tree.has_children(body));
        for id in [a, c] {
            let node = tree.node(id);
            assert!(node.parent.is_none() && node.prev_sibling.is_none() && node.next_sibling.is_none());
        }
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_shallow_clone_is_detached() {
        let (mut tree, _, a, _, _) = sample();
        tree.set_attribute(a, "id", "a");
        let clone = tree.clone_node(a, false);
        let node = tree.node(clone);
        assert!(node.parent.is_none());
        assert!(node.first_child.is_none());
        assert!(node.next_sibling.is_none());
        assert_eq!(tree.get_attribute(clone, "id"), Some("a"));
    }

    #[test]
    fn test_deep_clone_preserves_text() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let t1 = tree.create_text("Hello, ");
        let em = tree.create_element("em");
        let t2 = tree.create_text("world");
        let t3 = tree.create_text("!");
        tree.append_child(div, t1).unwrap();
        tree.append_child(div, em).unwrap();
        tree.append_child(em, t2).unwrap();
        tree.append_child(div, t3).unwrap();

        let clone = tree.clone_node(div, true);
        assert_eq!(tree.text_content(clone), "Hello, world!");
        assert_eq!(tree.text_content(clone), tree.text_content(div));
        assert_eq!(tree.child_count(clone), 3);
        assert!(tree.children(clone).all(|c| !tree.contains(div, c)));
        tree.verify_links().unwrap();
    }

    #[test]
    fn test_connectivity() {
        let (mut tree, body, a, b, _) = sample();
        assert!(tree.is_connected(b));
        assert_eq!(tree.owner_document(b), Some(tree.root()));
        assert_eq!(tree.owner_document(tree.root()), None);
        assert_eq!(tree.root_document(tree.root()), Some(tree.root()));
        assert!(tree.contains(body, b));
        assert!(tree.contains(b, b));
        assert!(!tree.contains(b, a));

        tree.remove_child(body, a).unwrap();
        assert!(!tree.is_connected(b));
    }

    #[test]
    fn test_element_navigation() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let t = tree.create_text(" ");
        let li1 = tree.create_element("li");
        let li2 = tree.create_element("li");
        let t2 = tree.create_text(" ");
        for n in [t, li1, li2, t2] {
            tree.append_child(ul, n).unwrap();
        }
        assert_eq!(tree.first_element_child(ul), Some(li1));
        assert_eq!(tree.last_element_child(ul), Some(li2));
        assert_eq!(tree.child_element_count(ul), 2);
        assert_eq!(tree.next_element_sibling(li1), Some(li2));
        assert_eq!(tree.prev_element_sibling(li1), None);
        assert_eq!(tree.parent_element(li1), Some(ul));
    }
}
