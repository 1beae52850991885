//! HTML5 Parser implementation
//!
//! html5ever builds an RcDom, which is then copied into the arena.

use std::io::Read;

use dom_tree::{Attribute, DomTree, ElementData, Namespace, Node, NodeData, NodeId};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{LocalName, ParseOpts, QualName, parse_document, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::ParseError;

/// Parser settings
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// html5ever tree-builder scripting flag (changes how `<noscript>` parses)
    pub scripting_enabled: bool,
    /// Context element used when a fragment is parsed without one
    pub fragment_context: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            scripting_enabled: false,
            fragment_context: "body".to_string(),
        }
    }
}

/// HTML5 parser
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    options: ParseOptions,
}

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    fn html5ever_opts(&self) -> ParseOpts {
        ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: self.options.scripting_enabled,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Parse a complete document. html5ever recovers from every syntax
    /// error, so this cannot fail.
    pub fn parse_document(&self, html: &str) -> DomTree {
        let dom = parse_document(RcDom::default(), self.html5ever_opts()).one(html);
        let tree = self.build_document(&dom);
        tracing::debug!(bytes = html.len(), nodes = tree.len(), "parsed HTML document");
        tree
    }

    /// Parse a complete document from UTF-8 bytes
    pub fn parse_document_from_reader<R: Read>(&self, mut reader: R) -> Result<DomTree, ParseError> {
        let dom = parse_document(RcDom::default(), self.html5ever_opts())
            .from_utf8()
            .read_from(&mut reader)?;
        let tree = self.build_document(&dom);
        tracing::debug!(nodes = tree.len(), "parsed HTML document from reader");
        Ok(tree)
    }

    /// Parse `html` as the contents of a `context` element and add the
    /// resulting nodes to `tree`.
    ///
    /// Returns the top-level nodes in order; they are detached and not
    /// linked as siblings. An empty `context` falls back to
    /// [`ParseOptions::fragment_context`].
    pub fn parse_fragment_into(&self, tree: &mut DomTree, html: &str, context: &str) -> Vec<NodeId> {
        let context = if context.is_empty() {
            self.options.fragment_context.as_str()
        } else {
            context
        };
        let context_name = QualName::new(
            None,
            Namespace::Html.url().into(),
            LocalName::from(context.to_ascii_lowercase()),
        );
        let dom = parse_fragment(
            RcDom::default(),
            self.html5ever_opts(),
            context_name,
            Vec::new(),
            false,
        )
        .one(html);

        // html5ever wraps fragment output in a synthetic <html> element
        let document = dom.document.children.borrow();
        let roots: Vec<NodeId> = match document.first() {
            Some(wrapper) => wrapper
                .children
                .borrow()
                .iter()
                .filter_map(|child| convert_node(child, tree, None))
                .collect(),
            None => Vec::new(),
        };
        tracing::debug!(
            bytes = html.len(),
            roots = roots.len(),
            context,
            "parsed HTML fragment"
        );
        roots
    }

    fn build_document(&self, dom: &RcDom) -> DomTree {
        let mut tree = DomTree::new();
        let root = tree.root();
        for child in dom.document.children.borrow().iter() {
            convert_node(child, &mut tree, Some(root));
        }
        tree
    }
}

/// Copy an RcDom subtree into the arena
///
/// With `parent` the node is appended to it, otherwise it stays detached.
/// Document handles are not copied; `None` is returned for them.
fn convert_node(handle: &Handle, tree: &mut DomTree, parent: Option<NodeId>) -> Option<NodeId> {
    let data = match &handle.data {
        RcNodeData::Document => return None,
        RcNodeData::Doctype {
            name,
            public_id,
            system_id,
        } => NodeData::Doctype {
            name: name.to_string(),
            public_id: public_id.to_string(),
            system_id: system_id.to_string(),
        },
        RcNodeData::Text { contents } => NodeData::Text(contents.borrow().to_string()),
        RcNodeData::Comment { contents } => NodeData::Comment(contents.to_string()),
        RcNodeData::ProcessingInstruction { target, contents } => NodeData::ProcessingInstruction {
            target: target.to_string(),
            data: contents.to_string(),
        },
        RcNodeData::Element { name, attrs, .. } => {
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    let local: &str = &attr.name.local;
                    let name = match &attr.name.prefix {
                        Some(prefix) => format!("{}:{}", &**prefix, local),
                        None => local.to_string(),
                    };
                    Attribute::new(name, attr.value.to_string())
                })
                .collect();
            NodeData::Element(ElementData {
                name: name.local.to_string(),
                namespace: Namespace::from_url(&name.ns),
                attrs,
            })
        }
    };

    let node = Node::new(data);
    let id = match parent {
        Some(parent) => tree.append_new(parent, node),
        None => tree.push(node),
    };

    for child in handle.children.borrow().iter() {
        convert_node(child, tree, Some(id));
    }
    // <template> contents live in a separate document; keep them as children
    if let RcNodeData::Element {
        template_contents, ..
    } = &handle.data
    {
        if let Some(contents) = template_contents.borrow().as_ref() {
            for child in contents.children.borrow().iter() {
                convert_node(child, tree, Some(id));
            }
        }
    }
    Some(id)
}
