//! HTML parsing and serialization for the DOM arena
//!
//! Parsing is done by html5ever into an RcDom, which is then copied into a
//! [`dom_tree::DomTree`]. Serialization walks the arena directly.

mod parser;
mod serializer;

pub use parser::{HtmlParser, ParseOptions};
pub use serializer::{HtmlSerializer, inner_html, outer_html, serialize_inner, serialize_outer};

use dom_tree::{DomTree, NodeId};

/// Parse an HTML document with default options
pub fn parse_document(html: &str) -> DomTree {
    HtmlParser::new().parse_document(html)
}

/// Parse a fragment in the given context element, adding its nodes to `tree`
pub fn parse_fragment_into(tree: &mut DomTree, html: &str, context: &str) -> Vec<NodeId> {
    HtmlParser::new().parse_fragment_into(tree, html, context)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialization error
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("node {0} does not belong to this tree")]
    MissingNode(usize),
    #[error("output writer failed")]
    Fmt(#[from] std::fmt::Error),
}
