//! Element nodes

use dom_spec::Element as _;
use dom_spec::{DomError, DomResult};
use dom_tree::NodeId;

use crate::collections::ChildNodes;
use crate::mutation;
use crate::query;
use crate::tree_ref::TreeRef;
use crate::{AnyNode, HtmlBackend};

/// Element handle
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) tree: TreeRef,
    pub(crate) id: NodeId,
}

impl_node_for_handle!(Element);
impl_child_node_for_handle!(Element);
impl_parent_node_for_handle!(Element);

impl Element {
    pub(crate) fn new(tree: TreeRef, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Local name as stored (lower case for HTML elements)
    pub fn local_name(&self) -> String {
        self.tree
            .borrow()
            .element(self.id)
            .map(|e| e.name.clone())
            .unwrap_or_default()
    }

    /// Attributes as `(name, value)` pairs in source order
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.tree
            .borrow()
            .element(self.id)
            .map(|e| {
                e.attrs
                    .iter()
                    .map(|a| (a.name.clone(), a.value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Force the attribute on (`true`) or off (`false`). Returns whether it
    /// is present afterwards.
    pub fn toggle_attribute_force(&self, name: &str, force: bool) -> bool {
        let mut tree = self.tree.borrow_mut();
        if force {
            if !tree.has_attribute(self.id, name) {
                tree.set_attribute(self.id, name, "");
            }
        } else {
            tree.remove_attribute(self.id, name);
        }
        force
    }

    /// Replace every child with one text node (none for `""`)
    pub fn set_text_content(&self, text: &str) {
        mutation::set_text_content(&self.tree, self.id, text);
    }

    fn serialize(&self, outer: bool) -> DomResult<String> {
        let serializer = self.tree.serializer();
        let tree = self.tree.borrow();
        let mut out = String::new();
        let result = if outer {
            serializer.serialize_outer(&tree, self.id, &mut out)
        } else {
            serializer.serialize_inner(&tree, self.id, &mut out)
        };
        result.map_err(|e| DomError::Serialization(e.to_string()))?;
        Ok(out)
    }
}

impl dom_spec::Element<HtmlBackend> for Element {
    fn tag_name(&self) -> String {
        self.tree.borrow().tag_name(self.id).unwrap_or_default()
    }

    fn id(&self) -> String {
        self.get_attribute("id").unwrap_or_default()
    }

    fn class_name(&self) -> String {
        self.get_attribute("class").unwrap_or_default()
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.tree
            .borrow()
            .get_attribute(self.id, name)
            .map(str::to_string)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.tree.borrow_mut().set_attribute(self.id, name, value);
    }

    fn remove_attribute(&self, name: &str) {
        self.tree.borrow_mut().remove_attribute(self.id, name);
    }

    fn toggle_attribute(&self, name: &str) -> bool {
        let mut tree = self.tree.borrow_mut();
        if tree.remove_attribute(self.id, name) {
            false
        } else {
            tree.set_attribute(self.id, name, "");
            true
        }
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.tree.borrow().has_attribute(self.id, name)
    }

    fn inner_html(&self) -> DomResult<String> {
        self.serialize(false)
    }

    fn set_inner_html(&self, html: &str) -> DomResult<()> {
        mutation::set_inner_html(&self.tree, self.id, html)
    }

    fn outer_html(&self) -> DomResult<String> {
        self.serialize(true)
    }

    fn set_outer_html(&self, html: &str) -> DomResult<()> {
        mutation::set_outer_html(&self.tree, self.id, html)
    }

    fn closest(&self, selector: &str) -> DomResult<Option<Element>> {
        let compiled = query::compile(selector)?;
        let found = query::closest(&self.tree.borrow(), self.id, &compiled);
        Ok(found.map(|id| self.tree.element(id)))
    }

    fn matches(&self, selector: &str) -> DomResult<bool> {
        let compiled = query::compile(selector)?;
        Ok(query::matches(&self.tree.borrow(), self.id, &compiled))
    }

    fn has_child_nodes(&self) -> bool {
        self.tree.borrow().has_children(self.id)
    }

    fn child_nodes(&self) -> ChildNodes {
        ChildNodes::new(self.tree.clone(), self.id)
    }

    fn first_child(&self) -> Option<AnyNode> {
        let child = self.tree.borrow().first_child(self.id)?;
        Some(self.tree.wrap(child))
    }

    fn last_child(&self) -> Option<AnyNode> {
        let child = self.tree.borrow().last_child(self.id)?;
        Some(self.tree.wrap(child))
    }

    fn insert_before(&self, node: &AnyNode, child: Option<&AnyNode>) -> DomResult<AnyNode> {
        mutation::insert_before(&self.tree, self.id, node, child)
    }

    fn append_child(&self, node: &AnyNode) -> DomResult<AnyNode> {
        mutation::insert_before(&self.tree, self.id, node, None)
    }

    fn replace_child(&self, node: &AnyNode, child: &AnyNode) -> DomResult<AnyNode> {
        mutation::replace_child(&self.tree, self.id, node, child)
    }

    fn remove_child(&self, child: &AnyNode) -> DomResult<AnyNode> {
        mutation::remove_child(&self.tree, self.id, child)
    }
}

#[cfg(test)]
mod tests {
    use dom_spec::{ChildNode, Document as _, Element as _, Node, NodeType, ParentNode};

    use crate::parse_document;

    #[test]
    fn test_attribute_names_fold_to_lower_case() {
        let doc = parse_document("<div></div>");
        let div = doc.query_selector("div").unwrap().unwrap();
        div.set_attribute("Data-X", "1");
        div.set_attribute("DATA-x", "2");
        assert_eq!(div.attributes(), vec![("data-x".to_string(), "2".to_string())]);
        assert_eq!(div.get_attribute("data-X").as_deref(), Some("2"));
    }

    #[test]
    fn test_toggle_attribute() {
        let doc = parse_document("<input>");
        let input = doc.query_selector("input").unwrap().unwrap();
        assert!(input.toggle_attribute("disabled"));
        assert_eq!(input.get_attribute("disabled").as_deref(), Some(""));
        assert!(!input.toggle_attribute("disabled"));
        assert!(!input.has_attribute("disabled"));

        assert!(input.toggle_attribute_force("hidden", true));
        assert!(input.toggle_attribute_force("hidden", true));
        assert!(input.has_attribute("hidden"));
        assert!(!input.toggle_attribute_force("hidden", false));
        assert!(!input.has_attribute("hidden"));
    }

    #[test]
    fn test_tag_and_local_name() {
        let doc = parse_document("<SECTION id=s class='a b'></SECTION>");
        let section = doc.get_element_by_id("s").unwrap();
        assert_eq!(section.tag_name(), "SECTION");
        assert_eq!(section.local_name(), "section");
        assert_eq!(section.id(), "s");
        assert_eq!(section.class_name(), "a b");
        assert_eq!(section.node_type(), NodeType::Element);
    }

    #[test]
    fn test_set_text_content_replaces_children() {
        let doc = parse_document("<p>a<b>b</b>c</p>");
        let p = doc.query_selector("p").unwrap().unwrap();
        p.set_text_content("plain");
        assert_eq!(p.inner_html().unwrap(), "plain");
        assert_eq!(p.length(), 1);

        p.set_text_content("");
        assert!(!p.has_child_nodes());
    }

    #[test]
    fn test_closest_and_matches() {
        let doc = parse_document("<ul class=menu><li><a href=#>x</a></li></ul>");
        let a = doc.query_selector("a").unwrap().unwrap();
        assert!(a.matches("ul.menu a[href]").unwrap());
        let ul = a.closest("ul").unwrap().unwrap();
        assert_eq!(ul.class_name(), "menu");
        assert_eq!(a.closest("a").unwrap().as_ref(), Some(&a));
        assert!(a.closest("table").unwrap().is_none());
        assert!(a.matches("a[").is_err());
    }

    #[test]
    fn test_inner_html_round_trip() {
        let doc = parse_document("<div id=d><span>one</span> &amp; two</div>");
        let div = doc.get_element_by_id("d").unwrap();
        assert_eq!(div.inner_html().unwrap(), "<span>one</span> &amp; two");
        assert_eq!(
            div.outer_html().unwrap(),
            r#"<div id="d"><span>one</span> &amp; two</div>"#
        );
        div.set_inner_html("<em>new</em>").unwrap();
        assert_eq!(div.first_element_child().unwrap().tag_name(), "EM");
        assert_eq!(div.text_content(), "new");
    }
}
