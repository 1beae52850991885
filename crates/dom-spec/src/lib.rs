//! DOM capability interfaces
//!
//! Backend-agnostic description of the node capability set. A backend
//! (the parsed-tree facade in the `dom` crate, or a host bridge) names its
//! concrete node types through [`Backend`] and implements the traits below
//! for them.

mod collections;
mod error;
mod node;
mod node_type;
mod position;

pub use collections::{ElementCollection, NodeList};
pub use error::{DomError, DomResult};
pub use node::{ChildNode, Document, DocumentFragment, Element, Node, ParentNode, Text};
pub use node_type::NodeType;
pub use position::DocumentPosition;

/// A family of node types that together implement the capability set.
///
/// Every capability trait is generic over the backend so that arguments and
/// results name the backend's own types; a node of one backend can never be
/// handed to another.
pub trait Backend: Sized + 'static {
    /// Closed sum over every node kind of this backend
    type Node: Node<Self> + Clone;
    /// Element nodes
    type Element: Element<Self> + Clone;
    /// Text nodes
    type Text: Text<Self> + Clone;
    /// Document nodes
    type Document: Document<Self> + Clone;
    /// Document fragments
    type Fragment: DocumentFragment<Self> + Clone;
    /// `HTMLCollection`-like element views
    type Elements: ElementCollection<Self>;
    /// Static element lists produced by selector queries
    type ElementList: NodeList<Item = Self::Element>;
    /// Child node lists
    type ChildNodes: NodeList<Item = Self::Node>;
}
