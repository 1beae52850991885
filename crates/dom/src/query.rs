//! Query engine
//!
//! Selector queries run over one or more subtrees of an arena. Document and
//! element receivers search their descendants; fragments search each root
//! subtree including the root itself.

use std::rc::Rc;

use dom_select::SelectorList;
use dom_spec::{DomError, DomResult};
use dom_tree::{DomTree, NodeId, next_in_subtree};

use crate::Element;
use crate::tree_ref::TreeRef;

/// Selector-engine view of an arena element
#[derive(Clone, Copy)]
pub(crate) struct TreeElement<'a> {
    tree: &'a DomTree,
    id: NodeId,
}

impl<'a> TreeElement<'a> {
    pub(crate) fn new(tree: &'a DomTree, id: NodeId) -> Self {
        Self { tree, id }
    }
}

impl<'a> dom_select::Element for TreeElement<'a> {
    fn local_name(&self) -> &str {
        self.tree.element(self.id).map_or("", |e| e.name.as_str())
    }

    fn id(&self) -> Option<&str> {
        self.tree.get_attribute(self.id, "id")
    }

    fn has_class(&self, name: &str) -> bool {
        self.tree
            .element(self.id)
            .is_some_and(|e| e.classes().any(|c| c == name))
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.tree.get_attribute(self.id, name)
    }

    fn parent_element(&self) -> Option<Self> {
        self.tree
            .parent_element(self.id)
            .map(|id| TreeElement::new(self.tree, id))
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        self.tree
            .prev_element_sibling(self.id)
            .map(|id| TreeElement::new(self.tree, id))
    }

    fn next_sibling_element(&self) -> Option<Self> {
        self.tree
            .next_element_sibling(self.id)
            .map(|id| TreeElement::new(self.tree, id))
    }

    fn is_root(&self) -> bool {
        self.tree
            .parent(self.id)
            .is_some_and(|p| self.tree.node(p).is_document())
    }

    fn is_empty(&self) -> bool {
        self.tree.children(self.id).all(|c| {
            let node = self.tree.node(c);
            !node.is_element() && node.as_text().is_none_or(str::is_empty)
        })
    }
}

/// Compile through the thread-local cache
pub(crate) fn compile(selector: &str) -> DomResult<Rc<SelectorList>> {
    dom_select::compile_cached(selector).map_err(|e| DomError::InvalidSelector(e.to_string()))
}

pub(crate) fn matches(tree: &DomTree, id: NodeId, selector: &SelectorList) -> bool {
    tree.node(id).is_element() && selector.matches(&TreeElement::new(tree, id))
}

/// Lazy selector walk over one or more subtrees
///
/// The arena is only borrowed inside [`Iterator::next`], so the consumer
/// may mutate the tree between steps. Each step continues from the
/// successor computed before the match was handed out; when that node has
/// since left the subtree, the walk resumes after the last match instead.
pub struct QuerySelectorIter {
    tree: TreeRef,
    selector: Rc<SelectorList>,
    roots: Vec<NodeId>,
    include_roots: bool,
    /// Index of the subtree being walked, plus one
    root_index: usize,
    next: Option<NodeId>,
    last: Option<NodeId>,
}

impl QuerySelectorIter {
    pub(crate) fn new(
        tree: TreeRef,
        selector: Rc<SelectorList>,
        roots: Vec<NodeId>,
        include_roots: bool,
    ) -> Self {
        Self {
            tree,
            selector,
            roots,
            include_roots,
            root_index: 0,
            next: None,
            last: None,
        }
    }

    /// Start the next subtree; `false` once every root has been walked
    fn advance_root(&mut self) -> bool {
        let Some(&root) = self.roots.get(self.root_index) else {
            return false;
        };
        self.root_index += 1;
        self.last = None;
        self.next = if self.include_roots {
            Some(root)
        } else {
            self.tree.borrow().first_child(root)
        };
        true
    }
}

impl Iterator for QuerySelectorIter {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        if self.root_index == 0 && !self.advance_root() {
            return None;
        }
        loop {
            let root = self.roots[self.root_index - 1];
            let tree = self.tree.borrow();
            let current = match self.next {
                Some(next) if tree.contains(root, next) => Some(next),
                // the pending node was moved out; pick up after the last match
                Some(_) => self
                    .last
                    .filter(|&last| tree.contains(root, last))
                    .and_then(|last| next_in_subtree(&tree, last, root)),
                None => None,
            };

            let Some(current) = current else {
                drop(tree);
                if !self.advance_root() {
                    return None;
                }
                continue;
            };

            self.next = next_in_subtree(&tree, current, root);
            if matches(&tree, current, &self.selector) {
                drop(tree);
                self.last = Some(current);
                return Some(self.tree.element(current));
            }
        }
    }
}

/// Elements below (or at, with `include_roots`) the roots, in tree order
fn elements_in(tree: &DomTree, roots: &[NodeId], include_roots: bool) -> Vec<NodeId> {
    let mut out = Vec::new();
    for &root in roots {
        out.extend(
            tree.descendants(root)
                .skip(usize::from(!include_roots))
                .filter(|&id| tree.node(id).is_element()),
        );
    }
    out
}

/// Snapshot of elements whose local name matches `name` (`*` for all)
pub(crate) fn by_tag_name(
    tree: &DomTree,
    roots: &[NodeId],
    include_roots: bool,
    name: &str,
) -> Vec<NodeId> {
    let mut found = elements_in(tree, roots, include_roots);
    if name != "*" {
        found.retain(|&id| {
            tree.element(id)
                .is_some_and(|e| e.name.eq_ignore_ascii_case(name))
        });
    }
    found
}

/// Snapshot of elements carrying every class token in `names`
pub(crate) fn by_class_name(
    tree: &DomTree,
    roots: &[NodeId],
    include_roots: bool,
    names: &str,
) -> Vec<NodeId> {
    let wanted: Vec<&str> = names.split_ascii_whitespace().collect();
    if wanted.is_empty() {
        return Vec::new();
    }
    let mut found = elements_in(tree, roots, include_roots);
    found.retain(|&id| {
        tree.element(id).is_some_and(|e| {
            let classes: Vec<&str> = e.classes().collect();
            wanted.iter().all(|w| classes.contains(w))
        })
    });
    found
}

/// First element with the given `id` attribute
pub(crate) fn by_id(tree: &DomTree, root: NodeId, id: &str) -> Option<NodeId> {
    if id.is_empty() {
        return None;
    }
    tree.descendants(root)
        .find(|&n| tree.get_attribute(n, "id") == Some(id))
}

/// Nearest inclusive ancestor element matching `selector`
pub(crate) fn closest(tree: &DomTree, id: NodeId, selector: &SelectorList) -> Option<NodeId> {
    std::iter::once(id)
        .chain(tree.ancestors(id))
        .take_while(|&n| tree.node(n).is_element())
        .find(|&n| matches(tree, n, selector))
}
