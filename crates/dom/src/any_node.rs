//! Closed sum over every facade node kind

use dom_spec::{DocumentPosition, Node, NodeType};
use dom_tree::{NodeKind, NodeId};

use crate::tree_ref::TreeRef;
use crate::{Document, DocumentFragment, Element, HtmlBackend, OtherNode, Text};

/// Any node of a parsed tree
///
/// Produced once where raw arena ids become typed values; callers then
/// match on the variant instead of probing for capabilities.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyNode {
    Document(Document),
    Element(Element),
    Text(Text),
    Fragment(DocumentFragment),
    /// Comments, doctypes and processing instructions
    Other(OtherNode),
}

macro_rules! dispatch {
    ($self:ident, $node:ident => $e:expr) => {
        match $self {
            AnyNode::Document($node) => $e,
            AnyNode::Element($node) => $e,
            AnyNode::Text($node) => $e,
            AnyNode::Fragment($node) => $e,
            AnyNode::Other($node) => $e,
        }
    };
}

impl AnyNode {
    pub(crate) fn wrap(tree: &TreeRef, id: NodeId) -> Self {
        let kind = tree.borrow().node(id).kind();
        let tree = tree.clone();
        match kind {
            NodeKind::Document => AnyNode::Document(Document::new(tree, id)),
            NodeKind::Element => AnyNode::Element(Element::new(tree, id)),
            NodeKind::Text => AnyNode::Text(Text::new(tree, id)),
            NodeKind::Comment | NodeKind::Doctype | NodeKind::Unknown => {
                AnyNode::Other(OtherNode::new(tree, id))
            }
        }
    }

    /// Tree and id of an arena-backed node; `None` for fragments
    pub(crate) fn handle(&self) -> Option<(&TreeRef, NodeId)> {
        match self {
            AnyNode::Document(n) => Some((&n.tree, n.id)),
            AnyNode::Element(n) => Some((&n.tree, n.id)),
            AnyNode::Text(n) => Some((&n.tree, n.id)),
            AnyNode::Other(n) => Some((&n.tree, n.id)),
            AnyNode::Fragment(_) => None,
        }
    }

    pub(crate) fn tree(&self) -> &TreeRef {
        match self {
            AnyNode::Document(n) => &n.tree,
            AnyNode::Element(n) => &n.tree,
            AnyNode::Text(n) => &n.tree,
            AnyNode::Other(n) => &n.tree,
            AnyNode::Fragment(n) => &n.tree,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            AnyNode::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            AnyNode::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            AnyNode::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            AnyNode::Document(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&DocumentFragment> {
        match self {
            AnyNode::Fragment(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, AnyNode::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, AnyNode::Text(_))
    }

    /// Follow one link of an arena-backed node
    fn link(&self, step: impl FnOnce(&dom_tree::DomTree, NodeId) -> Option<NodeId>) -> Option<AnyNode> {
        let (tree, id) = self.handle()?;
        let target = step(&tree.borrow(), id)?;
        Some(tree.wrap(target))
    }

    /// Parent of any node kind; always `None` for fragments
    pub fn parent_node(&self) -> Option<AnyNode> {
        self.link(|t, id| t.parent(id))
    }

    pub fn previous_sibling(&self) -> Option<AnyNode> {
        self.link(|t, id| t.prev_sibling(id))
    }

    pub fn next_sibling(&self) -> Option<AnyNode> {
        self.link(|t, id| t.next_sibling(id))
    }

    /// First child; the first root for fragments
    pub fn first_child(&self) -> Option<AnyNode> {
        match self {
            AnyNode::Fragment(f) => f.roots().into_iter().next(),
            _ => self.link(|t, id| t.first_child(id)),
        }
    }

    /// Last child; the last root for fragments
    pub fn last_child(&self) -> Option<AnyNode> {
        match self {
            AnyNode::Fragment(f) => f.roots().pop(),
            _ => self.link(|t, id| t.last_child(id)),
        }
    }
}

impl Node<HtmlBackend> for AnyNode {
    fn node_type(&self) -> NodeType {
        dispatch!(self, n => n.node_type())
    }

    fn text_content(&self) -> String {
        dispatch!(self, n => n.text_content())
    }

    fn clone_node(&self, deep: bool) -> AnyNode {
        dispatch!(self, n => n.clone_node(deep))
    }

    fn is_same_node(&self, other: &AnyNode) -> bool {
        dispatch!(self, n => n.is_same_node(other))
    }

    fn contains(&self, other: &AnyNode) -> bool {
        dispatch!(self, n => n.contains(other))
    }

    fn compare_document_position(&self, other: &AnyNode) -> DocumentPosition {
        dispatch!(self, n => n.compare_document_position(other))
    }

    fn to_node(&self) -> AnyNode {
        self.clone()
    }
}

impl From<Document> for AnyNode {
    fn from(node: Document) -> Self {
        AnyNode::Document(node)
    }
}

impl From<Element> for AnyNode {
    fn from(node: Element) -> Self {
        AnyNode::Element(node)
    }
}

impl From<Text> for AnyNode {
    fn from(node: Text) -> Self {
        AnyNode::Text(node)
    }
}

impl From<DocumentFragment> for AnyNode {
    fn from(node: DocumentFragment) -> Self {
        AnyNode::Fragment(node)
    }
}

impl From<OtherNode> for AnyNode {
    fn from(node: OtherNode) -> Self {
        AnyNode::Other(node)
    }
}
