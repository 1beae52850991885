//! Parser configuration

use std::io::Read;

use dom_html::{HtmlParser, ParseOptions};
use dom_spec::{DomError, DomResult};
use dom_tree::DomTree;

use crate::tree_ref::TreeRef;
use crate::{Document, DocumentFragment};

/// DOM configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// Parse with the scripting flag set (affects `<noscript>`)
    pub scripting_enabled: bool,

    /// Context element for fragments parsed without one
    pub fragment_context: String,

    /// Compiled selectors kept per thread (0 disables the cache)
    pub selector_cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scripting_enabled: false,
            fragment_context: "body".to_string(),
            selector_cache_capacity: dom_select::DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Config {
    /// Parser part of the configuration
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            scripting_enabled: self.scripting_enabled,
            fragment_context: self.fragment_context.clone(),
        }
    }
}

/// Configured entry point for building documents
#[derive(Debug, Clone)]
pub struct Parser {
    html: HtmlParser,
}

impl Parser {
    /// Create a parser; also bounds this thread's selector cache
    pub fn new(config: Config) -> Self {
        dom_select::set_cache_capacity(config.selector_cache_capacity);
        Self {
            html: HtmlParser::with_options(config.parse_options()),
        }
    }

    /// Parse a complete document
    pub fn parse_document(&self, html: &str) -> Document {
        let tree = self.html.parse_document(html);
        Document::from_tree(TreeRef::new(tree, self.html.clone()))
    }

    /// Parse a complete document from UTF-8 bytes
    pub fn parse_document_from_reader<R: Read>(&self, reader: R) -> DomResult<Document> {
        let tree = self
            .html
            .parse_document_from_reader(reader)
            .map_err(|e| DomError::Parse(e.to_string()))?;
        Ok(Document::from_tree(TreeRef::new(tree, self.html.clone())))
    }

    /// Parse a fragment into a fresh, otherwise empty document
    pub fn parse_fragment(&self, html: &str) -> DocumentFragment {
        let doc = Document::from_tree(TreeRef::new(DomTree::new(), self.html.clone()));
        doc.parse_fragment(html, "")
    }

    /// An empty document sharing this parser's settings
    pub fn create_document(&self) -> Document {
        Document::from_tree(TreeRef::new(DomTree::new(), self.html.clone()))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
