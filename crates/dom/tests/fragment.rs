//! Document fragments

use dom::prelude::*;
use dom::{AnyNode, Config, Parser, parse_document, parse_fragment};

#[test]
fn test_append_dissolves_fragment() {
    let doc = parse_document("<ul><li id=a></li></ul>");
    let ul = doc.query_selector("ul").unwrap().unwrap();
    let fragment = doc.parse_fragment("<li id=b></li><li id=c></li>", "ul");
    assert_eq!(fragment.len(), 2);

    ul.append(&[fragment.to_node()]).unwrap();
    let ids: Vec<String> = ul.children().to_vec().iter().map(|li| li.id()).collect();
    assert_eq!(ids, ["a", "b", "c"]);

    // the root list is left alone, but the roots now live in the document
    assert_eq!(fragment.len(), 2);
    for root in fragment.roots() {
        assert!(root.as_element().unwrap().is_connected());
    }
}

#[test]
fn test_append_child_with_fragment_inserts_each_root() {
    let doc = parse_document("<div></div>");
    let div = doc.query_selector("div").unwrap().unwrap();
    let fragment = doc.create_document_fragment();
    fragment
        .append(&[
            doc.create_element("i").to_node(),
            doc.create_text_node("t").to_node(),
            doc.create_element("b").to_node(),
        ])
        .unwrap();
    assert_eq!(fragment.len(), 3);
    assert_eq!(fragment.child_element_count(), 2);

    let returned = div.append_child(&fragment.to_node()).unwrap();
    assert!(returned.as_fragment().is_some());
    assert_eq!(div.inner_html().unwrap(), "<i></i>t<b></b>");
}

#[test]
fn test_replace_child_with_fragment() {
    let doc = parse_document("<div><i id=old></i><br></div>");
    let div = doc.query_selector("div").unwrap().unwrap();
    let old = doc.get_element_by_id("old").unwrap().to_node();
    let fragment = doc.parse_fragment("<b>1</b><b>2</b>", "div");

    let removed = div.replace_child(&fragment.to_node(), &old).unwrap();
    assert!(removed.is_same_node(&old));
    assert_eq!(div.inner_html().unwrap(), "<b>1</b><b>2</b><br>");
}

#[test]
fn test_fragment_takes_nodes_out_of_the_tree() {
    let doc = parse_document("<div><i id=a></i><i id=b></i></div>");
    let a = doc.get_element_by_id("a").unwrap();
    let fragment = doc.create_document_fragment();
    fragment.append(&[a.to_node()]).unwrap();

    assert!(a.parent_node().is_none());
    assert!(doc.get_element_by_id("a").is_none());
    assert!(fragment.contains(&a.to_node()));

    let b = doc.create_element("b");
    fragment.prepend(&[b.to_node()]).unwrap();
    let first = fragment.first_element_child().unwrap();
    assert_eq!(first.tag_name(), "B");
    assert_eq!(fragment.last_element_child().unwrap().id(), "a");

    fragment.replace_children(&[a.to_node()]).unwrap();
    assert_eq!(fragment.len(), 1);
}

#[test]
fn test_fragment_rejects_documents() {
    let doc = parse_document("");
    let fragment = doc.create_document_fragment();
    assert_eq!(
        fragment.append(&[doc.to_node()]).unwrap_err(),
        DomError::HierarchyRequest
    );
    assert!(fragment.is_empty());
}

#[test]
fn test_fragment_queries_include_roots() {
    let fragment = parse_fragment(r#"<p class="x">a</p><div><p class="x">b</p></div>"#);
    assert_eq!(fragment.query_selector_all("p.x").unwrap().length(), 2);
    assert_eq!(fragment.query_selector("div").unwrap().unwrap().tag_name(), "DIV");
    assert_eq!(fragment.get_elements_by_tag_name("P").length(), 2);
    assert_eq!(fragment.get_elements_by_class_name("x").length(), 2);
    assert_eq!(fragment.children().length(), 2);

    let mut seen = Vec::new();
    fragment
        .query_selector_each("*", |e| {
            seen.push(e.tag_name());
            true
        })
        .unwrap();
    assert_eq!(seen, ["P", "DIV", "P"]);
}

#[test]
fn test_fragment_to_html_round_trip() {
    let html = r#"<p class="x">a &amp; b</p>tail<!--note--><br>"#;
    let fragment = parse_fragment(html);
    assert_eq!(fragment.len(), 4);
    assert_eq!(fragment.to_html().unwrap(), html);
    assert_eq!(parse_fragment(&fragment.to_html().unwrap()).to_html().unwrap(), html);

    assert_eq!(parse_fragment("").to_html().unwrap(), "");
}

#[test]
fn test_fragment_to_html_follows_root_list() {
    let doc = parse_document("<div></div>");
    let fragment = doc.create_document_fragment();
    let b = doc.create_element("b");
    b.set_text_content("1");
    fragment
        .append(&[b.to_node(), doc.create_text_node("<2>").to_node()])
        .unwrap();
    assert_eq!(fragment.to_html().unwrap(), "<b>1</b>&lt;2&gt;");

    fragment.prepend(&[doc.create_element("hr").to_node()]).unwrap();
    assert_eq!(fragment.to_html().unwrap(), "<hr><b>1</b>&lt;2&gt;");
}

#[test]
fn test_fragment_clone() {
    let fragment = parse_fragment("<b>x</b>y");
    let shallow = fragment.clone_node(false);
    assert!(shallow.as_fragment().unwrap().is_empty());

    let deep = fragment.clone_node(true);
    let deep = deep.as_fragment().unwrap();
    assert_eq!(deep.len(), 2);
    assert_eq!(deep.text_content(), "xy");
    assert!(!deep.is_same_node(&fragment.to_node()));
    assert!(fragment.is_same_node(&fragment.clone().to_node()));
}

#[test]
fn test_fragment_position() {
    let doc = parse_document("<div id=a></div>");
    let a = doc.get_element_by_id("a").unwrap().to_node();
    let fragment = doc.parse_fragment("<p><em></em></p>", "");
    let disconnected = DocumentPosition::DISCONNECTED | DocumentPosition::IMPLEMENTATION_SPECIFIC;

    // roots detached: nothing shares the document
    assert_eq!(fragment.compare_document_position(&a), disconnected);

    let em = fragment.query_selector("em").unwrap().unwrap().to_node();
    assert_eq!(
        fragment.compare_document_position(&em),
        DocumentPosition::CONTAINED_BY | DocumentPosition::FOLLOWING
    );
    assert_eq!(
        em.compare_document_position(&fragment.to_node()),
        DocumentPosition::CONTAINS | DocumentPosition::PRECEDING
    );
    assert_eq!(a.compare_document_position(&fragment.to_node()), disconnected);
    assert_eq!(
        fragment.compare_document_position(&fragment.to_node()),
        DocumentPosition::EQUAL
    );
}

#[test]
fn test_fragment_position_after_roots_attach() {
    let doc = parse_document("<div id=a></div><div id=z></div>");
    let a = doc.get_element_by_id("a").unwrap();
    let z = doc.get_element_by_id("z").unwrap().to_node();
    let fragment = doc.parse_fragment("<span></span>", "");
    a.append(&[fragment.to_node()]).unwrap();

    // the span root now sits inside #a, before #z
    assert_eq!(
        fragment.compare_document_position(&a.to_node()),
        DocumentPosition::CONTAINS | DocumentPosition::PRECEDING
    );
    assert_eq!(fragment.compare_document_position(&z), DocumentPosition::FOLLOWING);
}

#[test]
fn test_fragment_position_prefers_containing_then_preceding_root() {
    let doc = parse_document("<div id=a></div><div id=m></div><div id=z></div>");
    let a = doc.get_element_by_id("a").unwrap();
    let m = doc.get_element_by_id("m").unwrap().to_node();
    let z = doc.get_element_by_id("z").unwrap();
    let fragment = doc.parse_fragment("<i></i><u></u>", "");
    let roots = fragment.roots();
    a.append(&[roots[0].clone()]).unwrap();
    z.append(&[roots[1].clone()]).unwrap();

    // <i> sees #m after it, <u> sees it before
    assert_eq!(fragment.compare_document_position(&m), DocumentPosition::PRECEDING);
    assert_eq!(
        fragment.compare_document_position(&z.to_node()),
        DocumentPosition::CONTAINS | DocumentPosition::PRECEDING
    );
}

#[test]
fn test_configured_fragment_context() {
    let parser = Parser::new(Config {
        fragment_context: "tbody".to_string(),
        ..Config::default()
    });
    let fragment = parser.parse_fragment("<tr><td>1</td></tr>");
    let roots = fragment.roots();
    let [AnyNode::Element(tr)] = roots.as_slice() else {
        panic!("expected a single row, got {roots:?}");
    };
    assert_eq!(tr.tag_name(), "TR");

    let default = parse_fragment("<tr><td>1</td></tr>");
    assert_eq!(default.text_content(), "1");
    assert_eq!(default.child_element_count(), 0);
}
