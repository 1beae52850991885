//! Document nodes

use dom_spec::{DomError, DomResult};
use dom_tree::{Attribute, ElementData, NodeId};

use crate::collections::ChildNodes;
use crate::fragment::DocumentFragment;
use crate::mutation;
use crate::query;
use crate::text::Text;
use crate::tree_ref::TreeRef;
use crate::{AnyNode, Element, HtmlBackend};

/// Document handle
///
/// Every arena has a document at its root slot; `create_document` on a
/// `Parser` or `parse_document` hands one out.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) tree: TreeRef,
    pub(crate) id: NodeId,
}

impl_node_for_handle!(Document);
impl_parent_node_for_handle!(Document);

impl Document {
    pub(crate) fn new(tree: TreeRef, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// The document at the root slot of `tree`
    pub(crate) fn from_tree(tree: TreeRef) -> Self {
        Self::new(tree, NodeId::ROOT)
    }

    /// Parse `html` into this document's arena as a detached fragment
    ///
    /// `context` names the element the markup is parsed inside; an empty
    /// context uses the configured default.
    pub fn parse_fragment(&self, html: &str, context: &str) -> DocumentFragment {
        let roots = {
            let mut tree = self.tree.borrow_mut();
            self.tree.parser().parse_fragment_into(&mut tree, html, context)
        };
        DocumentFragment::new(self.tree.clone(), roots)
    }

    /// Serialize the whole document, doctype included
    pub fn to_html(&self) -> DomResult<String> {
        let serializer = self.tree.serializer();
        let mut out = String::new();
        serializer
            .serialize_inner(&self.tree.borrow(), self.id, &mut out)
            .map_err(|e| DomError::Serialization(e.to_string()))?;
        Ok(out)
    }

    pub fn has_child_nodes(&self) -> bool {
        self.tree.borrow().has_children(self.id)
    }

    /// Live list of every child, doctype and comments included
    pub fn child_nodes(&self) -> ChildNodes {
        ChildNodes::new(self.tree.clone(), self.id)
    }

    pub fn first_child(&self) -> Option<AnyNode> {
        let child = self.tree.borrow().first_child(self.id)?;
        Some(self.tree.wrap(child))
    }

    pub fn last_child(&self) -> Option<AnyNode> {
        let child = self.tree.borrow().last_child(self.id)?;
        Some(self.tree.wrap(child))
    }

    pub fn insert_before(&self, node: &AnyNode, child: Option<&AnyNode>) -> DomResult<AnyNode> {
        mutation::insert_before(&self.tree, self.id, node, child)
    }

    pub fn append_child(&self, node: &AnyNode) -> DomResult<AnyNode> {
        mutation::insert_before(&self.tree, self.id, node, None)
    }

    pub fn replace_child(&self, node: &AnyNode, child: &AnyNode) -> DomResult<AnyNode> {
        mutation::replace_child(&self.tree, self.id, node, child)
    }

    pub fn remove_child(&self, child: &AnyNode) -> DomResult<AnyNode> {
        mutation::remove_child(&self.tree, self.id, child)
    }

    /// First child of the root element with the given local name
    fn root_child(&self, name: &str) -> Option<Element> {
        let id = {
            let tree = self.tree.borrow();
            let html = tree.first_element_child(self.id)?;
            tree.element_children(html)
                .find(|&c| tree.element(c).is_some_and(|e| e.name == name))
        }?;
        Some(self.tree.element(id))
    }
}

impl dom_spec::Document<HtmlBackend> for Document {
    fn create_element(&self, local_name: &str) -> Element {
        let id = self.tree.borrow_mut().create_element(local_name);
        self.tree.element(id)
    }

    fn create_element_is(&self, local_name: &str, is: &str) -> Element {
        let mut data = ElementData::new(&local_name.to_ascii_lowercase());
        data.attrs.push(Attribute::new("is", is));
        let id = self.tree.borrow_mut().create_element_with(data);
        self.tree.element(id)
    }

    fn create_text_node(&self, data: &str) -> Text {
        let id = self.tree.borrow_mut().create_text(data);
        Text::new(self.tree.clone(), id)
    }

    fn create_document_fragment(&self) -> DocumentFragment {
        DocumentFragment::new(self.tree.clone(), Vec::new())
    }

    fn document_element(&self) -> Option<Element> {
        let id = self.tree.borrow().first_element_child(self.id)?;
        Some(self.tree.element(id))
    }

    fn head(&self) -> Option<Element> {
        self.root_child("head")
    }

    fn body(&self) -> Option<Element> {
        self.root_child("body")
    }

    /// Text of the first `<title>`, whitespace collapsed
    fn title(&self) -> String {
        let tree = self.tree.borrow();
        let title = tree
            .descendants(self.id)
            .find(|&id| tree.element(id).is_some_and(|e| e.name == "title"));
        let Some(title) = title else {
            return String::new();
        };
        let text = tree.text_content(title);
        text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn get_element_by_id(&self, id: &str) -> Option<Element> {
        let found = query::by_id(&self.tree.borrow(), self.id, id)?;
        Some(self.tree.element(found))
    }
}

#[cfg(test)]
mod tests {
    use dom_spec::{ChildNode, Document as _, Element as _, Node, NodeType, ParentNode};

    use crate::{AnyNode, Parser, parse_document};

    #[test]
    fn test_structure_accessors() {
        let doc = parse_document(
            "<!DOCTYPE html><html><head><title>  Hello \n  world </title></head><body><p id=x>hi</p></body></html>",
        );
        assert_eq!(doc.node_type(), NodeType::Document);
        assert_eq!(doc.document_element().unwrap().tag_name(), "HTML");
        assert_eq!(doc.head().unwrap().tag_name(), "HEAD");
        assert_eq!(doc.body().unwrap().tag_name(), "BODY");
        assert_eq!(doc.title(), "Hello world");
        assert_eq!(doc.get_element_by_id("x").unwrap().text_content(), "hi");
        assert!(doc.get_element_by_id("missing").is_none());
        assert!(doc.get_element_by_id("").is_none());
        assert_eq!(doc.text_content(), "");
    }

    #[test]
    fn test_created_nodes_are_detached() {
        let doc = parse_document("<body></body>");
        let div = doc.create_element("DIV");
        assert_eq!(div.local_name(), "div");
        assert!(!div.is_connected());
        assert!(div.parent_node().is_none());
        assert!(div.owner_document().is_none());

        let body = doc.body().unwrap();
        body.append_child(&AnyNode::from(div.clone())).unwrap();
        assert!(div.is_connected());
        assert_eq!(div.owner_document().as_ref(), Some(&doc));
    }

    #[test]
    fn test_create_element_is() {
        let doc = parse_document("");
        let button = doc.create_element_is("button", "fancy-button");
        assert_eq!(button.get_attribute("is").as_deref(), Some("fancy-button"));
        assert_eq!(
            button.outer_html().unwrap(),
            r#"<button is="fancy-button"></button>"#
        );
    }

    #[test]
    fn test_document_rejects_second_document_as_child() {
        let doc = parse_document("<p></p>");
        let err = doc.append_child(&AnyNode::from(doc.clone())).unwrap_err();
        assert_eq!(err, dom_spec::DomError::HierarchyRequest);
    }

    #[test]
    fn test_empty_document_from_parser() {
        let doc = Parser::default().create_document();
        assert!(doc.document_element().is_none());
        assert!(!doc.has_child_nodes());
        assert_eq!(doc.title(), "");

        let html = doc.create_element("html");
        doc.append(&[html.to_node()]).unwrap();
        assert_eq!(doc.child_element_count(), 1);
        assert_eq!(doc.to_html().unwrap(), "<html></html>");
    }

    #[test]
    fn test_to_html_includes_doctype() {
        let doc = parse_document("<!DOCTYPE html><p>x</p>");
        assert_eq!(
            doc.to_html().unwrap(),
            "<!DOCTYPE html><html><head></head><body><p>x</p></body></html>"
        );
    }
}
