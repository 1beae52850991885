//! Backend selection
//!
//! Code written against `dom_spec::Backend` runs on any backend. This crate
//! provides the parsed-tree backend and names it as the default.

use dom_spec::Backend;

use crate::collections::{ChildNodes, ElementList, Elements};
use crate::{AnyNode, Document, DocumentFragment, Element, Text};

/// Backend over an HTML document parsed into an in-memory arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HtmlBackend;

impl Backend for HtmlBackend {
    type Node = AnyNode;
    type Element = Element;
    type Text = Text;
    type Document = Document;
    type Fragment = DocumentFragment;
    type Elements = Elements;
    type ElementList = ElementList;
    type ChildNodes = ChildNodes;
}

/// Backend compiled into this build
pub type DefaultBackend = HtmlBackend;
