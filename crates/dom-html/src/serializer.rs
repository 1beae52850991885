//! HTML Serialization (innerHTML/outerHTML)
//!
//! Follows the HTML fragment serialization algorithm, so output matches
//! html5ever's own serializer: void elements have no end tag, attribute
//! values are always quoted, and raw text elements are written verbatim.

use std::fmt::Write;

use dom_tree::{DomTree, Namespace, NodeData, NodeId};

use crate::SerializeError;

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children are written unescaped
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// HTML serializer
#[derive(Debug, Clone, Default)]
pub struct HtmlSerializer {
    /// `<noscript>` content is raw text when the document was parsed with
    /// scripting enabled
    pub scripting_enabled: bool,
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize innerHTML of a node (children only)
    pub fn serialize_inner<W: Write>(
        &self,
        tree: &DomTree,
        node_id: NodeId,
        out: &mut W,
    ) -> Result<(), SerializeError> {
        if !tree.owns(node_id) {
            return Err(SerializeError::MissingNode(node_id.index()));
        }
        self.serialize_children(tree, node_id, out)
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer<W: Write>(
        &self,
        tree: &DomTree,
        node_id: NodeId,
        out: &mut W,
    ) -> Result<(), SerializeError> {
        if !tree.owns(node_id) {
            return Err(SerializeError::MissingNode(node_id.index()));
        }
        self.serialize_node(tree, node_id, out)
    }

    fn serialize_node<W: Write>(
        &self,
        tree: &DomTree,
        node_id: NodeId,
        out: &mut W,
    ) -> Result<(), SerializeError> {
        match &tree.node(node_id).data {
            NodeData::Document => self.serialize_children(tree, node_id, out)?,
            NodeData::Element(elem) => {
                let tag = elem.name.as_str();

                out.write_char('<')?;
                out.write_str(tag)?;
                for attr in &elem.attrs {
                    out.write_char(' ')?;
                    out.write_str(&attr.name)?;
                    out.write_str("=\"")?;
                    escape_attribute(&attr.value, out)?;
                    out.write_char('"')?;
                }
                out.write_char('>')?;

                if elem.namespace == Namespace::Html && VOID_ELEMENTS.contains(&tag) {
                    return Ok(());
                }

                self.serialize_children(tree, node_id, out)?;

                out.write_str("</")?;
                out.write_str(tag)?;
                out.write_char('>')?;
            }
            NodeData::Text(text) => {
                if self.is_raw_text_parent(tree, node_id) {
                    out.write_str(text)?;
                } else {
                    escape_text(text, out)?;
                }
            }
            NodeData::Comment(text) => {
                out.write_str("<!--")?;
                out.write_str(text)?;
                out.write_str("-->")?;
            }
            NodeData::Doctype { name, .. } => {
                out.write_str("<!DOCTYPE ")?;
                out.write_str(name)?;
                out.write_char('>')?;
            }
            NodeData::ProcessingInstruction { target, data } => {
                out.write_str("<?")?;
                out.write_str(target)?;
                out.write_char(' ')?;
                out.write_str(data)?;
                out.write_char('>')?;
            }
        }
        Ok(())
    }

    fn serialize_children<W: Write>(
        &self,
        tree: &DomTree,
        parent_id: NodeId,
        out: &mut W,
    ) -> Result<(), SerializeError> {
        for child in tree.children(parent_id) {
            self.serialize_node(tree, child, out)?;
        }
        Ok(())
    }

    fn is_raw_text_parent(&self, tree: &DomTree, node_id: NodeId) -> bool {
        let Some(parent) = tree.parent(node_id).and_then(|p| tree.element(p)) else {
            return false;
        };
        if parent.namespace != Namespace::Html {
            return false;
        }
        let name = parent.name.as_str();
        RAW_TEXT_ELEMENTS.contains(&name) || (self.scripting_enabled && name == "noscript")
    }
}

/// Escape text content for HTML
fn escape_text<W: Write>(text: &str, out: &mut W) -> std::fmt::Result {
    for c in text.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '\u{a0}' => out.write_str("&nbsp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

/// Escape attribute value
fn escape_attribute<W: Write>(text: &str, out: &mut W) -> std::fmt::Result {
    for c in text.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '\u{a0}' => out.write_str("&nbsp;")?,
            '"' => out.write_str("&quot;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

/// Serialize a node and its subtree into `out`
pub fn serialize_outer<W: Write>(tree: &DomTree, node_id: NodeId, out: &mut W) -> Result<(), SerializeError> {
    HtmlSerializer::new().serialize_outer(tree, node_id, out)
}

/// Serialize the children of a node into `out`
pub fn serialize_inner<W: Write>(tree: &DomTree, node_id: NodeId, out: &mut W) -> Result<(), SerializeError> {
    HtmlSerializer::new().serialize_inner(tree, node_id, out)
}

/// outerHTML of a node
pub fn outer_html(tree: &DomTree, node_id: NodeId) -> Result<String, SerializeError> {
    let mut buf = String::new();
    serialize_outer(tree, node_id, &mut buf)?;
    Ok(buf)
}

/// innerHTML of a node
pub fn inner_html(tree: &DomTree, node_id: NodeId) -> Result<String, SerializeError> {
    let mut buf = String::new();
    serialize_inner(tree, node_id, &mut buf)?;
    Ok(buf)
}
