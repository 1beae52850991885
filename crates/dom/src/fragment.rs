//! Document fragments
//!
//! A fragment owns no arena node. It is an ordered list of detached sibling
//! roots in one arena, shared between clones of the handle so that every
//! copy sees the same list.

use std::cell::RefCell;
use std::rc::Rc;

use dom_spec::{
    DocumentPosition, DomError, DomResult, Node, NodeType, ParentNode,
};
use dom_tree::NodeId;

use crate::collections::{ElementList, Elements};
use crate::mutation::expand;
use crate::query::{self, QuerySelectorIter};
use crate::tree_ref::TreeRef;
use crate::{AnyNode, Element, HtmlBackend};

/// Lightweight container of sibling roots
#[derive(Debug, Clone)]
pub struct DocumentFragment {
    pub(crate) tree: TreeRef,
    roots: Rc<RefCell<Vec<NodeId>>>,
}

impl DocumentFragment {
    pub(crate) fn new(tree: TreeRef, roots: Vec<NodeId>) -> Self {
        Self {
            tree,
            roots: Rc::new(RefCell::new(roots)),
        }
    }

    /// Snapshot of the root ids
    pub(crate) fn root_ids(&self) -> Vec<NodeId> {
        self.roots.borrow().clone()
    }

    /// Root nodes in order
    pub fn roots(&self) -> Vec<AnyNode> {
        self.root_ids()
            .into_iter()
            .map(|id| self.tree.wrap(id))
            .collect()
    }

    /// Number of roots
    pub fn len(&self) -> usize {
        self.roots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.borrow().is_empty()
    }

    /// Lazy selector walk over every root subtree, roots included
    pub fn query_selector_iter(&self, selector: &str) -> DomResult<QuerySelectorIter> {
        let compiled = query::compile(selector)?;
        Ok(QuerySelectorIter::new(
            self.tree.clone(),
            compiled,
            self.root_ids(),
            true,
        ))
    }

    /// Serialize every root in order
    pub fn to_html(&self) -> DomResult<String> {
        let serializer = self.tree.serializer();
        let tree = self.tree.borrow();
        let mut out = String::new();
        for &root in self.roots.borrow().iter() {
            serializer
                .serialize_outer(&tree, root, &mut out)
                .map_err(|e| DomError::Serialization(e.to_string()))?;
        }
        Ok(out)
    }

    /// Detach `nodes` (fragments dissolved) and take ownership of them as
    /// roots. The returned ids are in argument order without duplicates.
    fn adopt(&self, nodes: &[AnyNode]) -> DomResult<Vec<NodeId>> {
        let ids = expand(&self.tree, nodes)?;
        let mut tree = self.tree.borrow_mut();
        if ids.iter().any(|&id| tree.node(id).is_document()) {
            return Err(DomError::HierarchyRequest);
        }
        let mut adopted: Vec<NodeId> = Vec::with_capacity(ids.len());
        for id in ids {
            tree.detach(id);
            if !adopted.contains(&id) {
                adopted.push(id);
            }
        }
        Ok(adopted)
    }
}

impl PartialEq for DocumentFragment {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.roots, &other.roots)
    }
}

impl Eq for DocumentFragment {}

impl Node<HtmlBackend> for DocumentFragment {
    fn node_type(&self) -> NodeType {
        NodeType::DocumentFragment
    }

    fn text_content(&self) -> String {
        let tree = self.tree.borrow();
        let mut buf = String::new();
        for &root in self.roots.borrow().iter() {
            tree.write_text_content(root, &mut buf);
        }
        buf
    }

    fn clone_node(&self, deep: bool) -> AnyNode {
        let roots = if deep {
            let mut tree = self.tree.borrow_mut();
            self.root_ids()
                .into_iter()
                .map(|root| tree.clone_node(root, true))
                .collect()
        } else {
            Vec::new()
        };
        AnyNode::Fragment(DocumentFragment::new(self.tree.clone(), roots))
    }

    fn is_same_node(&self, other: &AnyNode) -> bool {
        matches!(other, AnyNode::Fragment(f) if f == self)
    }

    fn contains(&self, other: &AnyNode) -> bool {
        match other {
            AnyNode::Fragment(f) => f == self,
            _ => other.handle().is_some_and(|(other_tree, other_id)| {
                self.tree.same(other_tree) && {
                    let tree = self.tree.borrow();
                    self.roots
                        .borrow()
                        .iter()
                        .any(|&root| tree.contains(root, other_id))
                }
            }),
        }
    }

    fn compare_document_position(&self, other: &AnyNode) -> DocumentPosition {
        crate::position::compare_from_fragment(self, other)
    }

    fn to_node(&self) -> AnyNode {
        AnyNode::Fragment(self.clone())
    }
}

impl ParentNode<HtmlBackend> for DocumentFragment {
    fn children(&self) -> Elements {
        Elements::roots(self.tree.clone(), Rc::clone(&self.roots))
    }

    fn first_element_child(&self) -> Option<Element> {
        let id = {
            let tree = self.tree.borrow();
            self.roots
                .borrow()
                .iter()
                .copied()
                .find(|&id| tree.node(id).is_element())
        }?;
        Some(self.tree.element(id))
    }

    fn last_element_child(&self) -> Option<Element> {
        let id = {
            let tree = self.tree.borrow();
            self.roots
                .borrow()
                .iter()
                .rev()
                .copied()
                .find(|&id| tree.node(id).is_element())
        }?;
        Some(self.tree.element(id))
    }

    fn child_element_count(&self) -> usize {
        let tree = self.tree.borrow();
        self.roots
            .borrow()
            .iter()
            .filter(|&&id| tree.node(id).is_element())
            .count()
    }

    fn prepend(&self, nodes: &[AnyNode]) -> DomResult<()> {
        let adopted = self.adopt(nodes)?;
        let mut roots = self.roots.borrow_mut();
        roots.retain(|id| !adopted.contains(id));
        roots.splice(0..0, adopted);
        Ok(())
    }

    fn append(&self, nodes: &[AnyNode]) -> DomResult<()> {
        let adopted = self.adopt(nodes)?;
        let mut roots = self.roots.borrow_mut();
        roots.retain(|id| !adopted.contains(id));
        roots.extend(adopted);
        Ok(())
    }

    fn replace_children(&self, nodes: &[AnyNode]) -> DomResult<()> {
        let adopted = self.adopt(nodes)?;
        *self.roots.borrow_mut() = adopted;
        Ok(())
    }

    fn get_elements_by_tag_name(&self, name: &str) -> Elements {
        let ids = query::by_tag_name(&self.tree.borrow(), &self.root_ids(), true, name);
        Elements::snapshot(self.tree.clone(), ids)
    }

    fn get_elements_by_class_name(&self, names: &str) -> Elements {
        let ids = query::by_class_name(&self.tree.borrow(), &self.root_ids(), true, names);
        Elements::snapshot(self.tree.clone(), ids)
    }

    fn query_selector(&self, selector: &str) -> DomResult<Option<Element>> {
        Ok(self.query_selector_iter(selector)?.next())
    }

    fn query_selector_all(&self, selector: &str) -> DomResult<ElementList> {
        Ok(ElementList::new(self.query_selector_iter(selector)?.collect()))
    }

    fn query_selector_each<F>(&self, selector: &str, mut f: F) -> DomResult<()>
    where
        F: FnMut(Element) -> bool,
    {
        for element in self.query_selector_iter(selector)? {
            if !f(element) {
                break;
            }
        }
        Ok(())
    }
}

impl dom_spec::DocumentFragment<HtmlBackend> for DocumentFragment {}
