//! Typed DOM facade over a parsed HTML tree
//!
//! Parses HTML into an arena (`dom-tree`) and presents its nodes through
//! the `dom-spec` capability traits: identity, traversal, CSS selector
//! queries, structural mutation, attributes, inner/outer HTML and
//! document-position comparison.
//!
//! # Example
//! ```
//! use dom::prelude::*;
//!
//! let doc = dom::parse_document("<ul><li class=a>one</li><li>two</li></ul>");
//! let first = doc.query_selector("li.a").unwrap().unwrap();
//! assert_eq!(first.text_content(), "one");
//!
//! let item = doc.create_element("li");
//! item.set_text_content("three");
//! let list = doc.query_selector("ul").unwrap().unwrap();
//! list.append(&[item.to_node()]).unwrap();
//! assert_eq!(list.child_element_count(), 3);
//! ```
//!
//! Handles are cheap clones of a shared, single-threaded tree and are not
//! `Send`.

#[macro_use]
mod handle;

mod any_node;
mod backend;
mod collections;
mod config;
mod document;
mod element;
mod fragment;
mod mutation;
mod other;
mod position;
mod query;
mod text;
mod tree_ref;

use std::io::Read;

pub use any_node::AnyNode;
pub use backend::{DefaultBackend, HtmlBackend};
pub use collections::{ChildNodes, ElementList, Elements};
pub use config::{Config, Parser};
pub use document::Document;
pub use element::Element;
pub use fragment::DocumentFragment;
pub use other::OtherNode;
pub use query::QuerySelectorIter;
pub use text::Text;

pub use dom_spec::{DocumentPosition, DomError, DomResult, NodeType};

/// Capability traits, imported anonymously so they do not clash with the
/// concrete node types
pub mod prelude {
    pub use dom_spec::{
        Backend as _, ChildNode as _, Document as _, DocumentFragment as _, Element as _,
        ElementCollection as _, Node as _, NodeList as _, ParentNode as _, Text as _,
    };
    pub use dom_spec::{DocumentPosition, DomError, DomResult, NodeType};
}

use dom_html::HtmlParser;
use dom_tree::DomTree;

use crate::tree_ref::TreeRef;

/// Parse a complete document with the default settings
pub fn parse_document(html: &str) -> Document {
    let parser = HtmlParser::new();
    let tree = parser.parse_document(html);
    Document::from_tree(TreeRef::new(tree, parser))
}

/// Parse a complete document from UTF-8 bytes
pub fn parse_document_from_reader<R: Read>(reader: R) -> DomResult<Document> {
    let parser = HtmlParser::new();
    let tree = parser
        .parse_document_from_reader(reader)
        .map_err(|e| DomError::Parse(e.to_string()))?;
    Ok(Document::from_tree(TreeRef::new(tree, parser)))
}

/// Parse a fragment in the default `<body>` context
///
/// The roots live in a fresh arena whose document has no children.
pub fn parse_fragment(html: &str) -> DocumentFragment {
    let doc = Document::from_tree(TreeRef::new(DomTree::new(), HtmlParser::new()));
    doc.parse_fragment(html, "")
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::*;

    #[test]
    fn test_parse_document_from_reader() {
        let doc = parse_document_from_reader("<p>bytes</p>".as_bytes()).unwrap();
        assert_eq!(doc.query_selector("p").unwrap().unwrap().text_content(), "bytes");
    }

    #[test]
    fn test_parse_fragment_roots_are_detached() {
        let fragment = parse_fragment("<b>1</b>text<i>2</i>");
        assert_eq!(fragment.len(), 3);
        assert_eq!(fragment.child_element_count(), 2);
        assert_eq!(fragment.text_content(), "1text2");
        for root in fragment.roots() {
            assert!(root.as_element().is_none_or(|e| e.parent_node().is_none()));
        }
    }

    #[test]
    fn test_default_backend_is_html() {
        fn first_tag<B: dom_spec::Backend>(parent: &impl dom_spec::ParentNode<B>) -> Option<String> {
            parent.first_element_child().map(|e| e.tag_name())
        }

        let doc = parse_document("<p></p>");
        let html = doc.document_element().unwrap();
        assert_eq!(first_tag::<DefaultBackend>(&html).as_deref(), Some("HEAD"));
    }
}
