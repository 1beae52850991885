//! Node capability traits
//!
//! Mirrors the DOM interface mixins: `Node`, `ChildNode` (plus the parent
//! and sibling accessors of `Node`), `ParentNode`, and the concrete
//! `Element`, `Document`, `Text` and `DocumentFragment` interfaces.

use crate::{Backend, DocumentPosition, DomResult, NodeType};

/// Operations shared by every node.
pub trait Node<B: Backend> {
    fn node_type(&self) -> NodeType;

    /// Concatenated data of all descendant text nodes
    fn text_content(&self) -> String;

    /// Copy of this node; with `deep` the whole subtree is copied.
    /// The copy is always detached.
    fn clone_node(&self, deep: bool) -> B::Node;

    /// Identity comparison
    fn is_same_node(&self, other: &B::Node) -> bool;

    /// Inclusive descendant test
    fn contains(&self, other: &B::Node) -> bool;

    /// Position of `other` relative to this node
    fn compare_document_position(&self, other: &B::Node) -> DocumentPosition;

    /// Upcast into the backend's node sum type
    fn to_node(&self) -> B::Node;
}

/// Nodes that can live inside a parent.
pub trait ChildNode<B: Backend>: Node<B> {
    /// Whether a document is reachable through the parent chain
    fn is_connected(&self) -> bool;

    fn owner_document(&self) -> Option<B::Document>;

    fn parent_node(&self) -> Option<B::Node>;

    fn parent_element(&self) -> Option<B::Element>;

    fn previous_sibling(&self) -> Option<B::Node>;

    fn next_sibling(&self) -> Option<B::Node>;

    /// Child count for elements, data length for text
    fn length(&self) -> usize;
}

/// Nodes that hold children.
pub trait ParentNode<B: Backend>: Node<B> {
    /// Live view over element children
    fn children(&self) -> B::Elements;

    fn first_element_child(&self) -> Option<B::Element>;

    fn last_element_child(&self) -> Option<B::Element>;

    fn child_element_count(&self) -> usize;

    /// Insert `nodes` before the first child, keeping their order.
    /// Fragments are inserted root by root.
    fn prepend(&self, nodes: &[B::Node]) -> DomResult<()>;

    /// Insert `nodes` after the last child. Fragments are inserted root by root.
    fn append(&self, nodes: &[B::Node]) -> DomResult<()>;

    /// Replace every child with `nodes`.
    fn replace_children(&self, nodes: &[B::Node]) -> DomResult<()>;

    /// Snapshot of descendant elements with the given tag name
    /// (ASCII case-insensitive, `*` matches all)
    fn get_elements_by_tag_name(&self, name: &str) -> B::Elements;

    /// Snapshot of descendant elements carrying every class in `names`
    fn get_elements_by_class_name(&self, names: &str) -> B::Elements;

    /// First matching descendant in tree order
    fn query_selector(&self, selector: &str) -> DomResult<Option<B::Element>>;

    /// Every matching descendant in tree order
    fn query_selector_all(&self, selector: &str) -> DomResult<B::ElementList>;

    /// Visit matches in tree order until `f` returns `false`.
    fn query_selector_each<F>(&self, selector: &str, f: F) -> DomResult<()>
    where
        F: FnMut(B::Element) -> bool;
}

/// Element nodes.
pub trait Element<B: Backend>: ParentNode<B> + ChildNode<B> {
    /// Upper-cased tag name
    fn tag_name(&self) -> String;

    fn id(&self) -> String;

    fn class_name(&self) -> String;

    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute; names are ASCII lower-cased and stored once.
    fn set_attribute(&self, name: &str, value: &str);

    fn remove_attribute(&self, name: &str);

    /// Remove the attribute if present (returns `false`), otherwise add it
    /// with an empty value (returns `true`).
    fn toggle_attribute(&self, name: &str) -> bool;

    fn has_attribute(&self, name: &str) -> bool;

    fn inner_html(&self) -> DomResult<String>;

    fn set_inner_html(&self, html: &str) -> DomResult<()>;

    fn outer_html(&self) -> DomResult<String>;

    fn set_outer_html(&self, html: &str) -> DomResult<()>;

    /// Nearest inclusive ancestor matching `selector`
    fn closest(&self, selector: &str) -> DomResult<Option<B::Element>>;

    fn matches(&self, selector: &str) -> DomResult<bool>;

    fn has_child_nodes(&self) -> bool;

    fn child_nodes(&self) -> B::ChildNodes;

    fn first_child(&self) -> Option<B::Node>;

    fn last_child(&self) -> Option<B::Node>;

    /// Insert `node` before `child`, or at the end when `child` is `None`.
    fn insert_before(&self, node: &B::Node, child: Option<&B::Node>) -> DomResult<B::Node>;

    fn append_child(&self, node: &B::Node) -> DomResult<B::Node>;

    /// Replace `child` with `node`, returning the detached `child`.
    fn replace_child(&self, node: &B::Node, child: &B::Node) -> DomResult<B::Node>;

    fn remove_child(&self, child: &B::Node) -> DomResult<B::Node>;
}

/// Document nodes.
pub trait Document<B: Backend>: ParentNode<B> {
    /// New detached element (local name is ASCII lower-cased)
    fn create_element(&self, local_name: &str) -> B::Element;

    /// New detached customized built-in element carrying an `is` attribute
    fn create_element_is(&self, local_name: &str, is: &str) -> B::Element;

    fn create_text_node(&self, data: &str) -> B::Text;

    fn create_document_fragment(&self) -> B::Fragment;

    fn document_element(&self) -> Option<B::Element>;

    fn head(&self) -> Option<B::Element>;

    fn body(&self) -> Option<B::Element>;

    fn title(&self) -> String;

    fn get_element_by_id(&self, id: &str) -> Option<B::Element>;
}

/// Text nodes.
pub trait Text<B: Backend>: ChildNode<B> {
    fn data(&self) -> String;

    fn set_data(&self, data: &str);
}

/// Document fragments.
pub trait DocumentFragment<B: Backend>: ParentNode<B> {}
