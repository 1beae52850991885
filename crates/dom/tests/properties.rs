//! Tree-wide properties of the facade
//!
//! Cloning, link consistency after mutation, lazy query short-circuiting,
//! class matching, document position and serialization round trips.

use dom::prelude::*;
use dom::{AnyNode, Document, Element, parse_document};

/// Walk every link below `node` and check that forward and backward
/// sibling chains agree and that every child points back at its parent.
fn assert_links(node: &AnyNode) {
    let mut forward = Vec::new();
    let mut child = node.first_child();
    while let Some(c) = child {
        let parent = c.parent_node().expect("child without parent");
        assert!(parent.is_same_node(node), "child points at the wrong parent");
        child = c.next_sibling();
        forward.push(c);
    }

    let mut backward = Vec::new();
    let mut child = node.last_child();
    while let Some(c) = child {
        child = c.previous_sibling();
        backward.push(c);
    }
    backward.reverse();
    assert_eq!(forward, backward, "sibling chains disagree");

    if let Some(first) = forward.first() {
        assert!(first.previous_sibling().is_none());
    }
    if let Some(last) = forward.last() {
        assert!(last.next_sibling().is_none());
    }
    for c in &forward {
        assert_links(c);
    }
}

fn element(doc: &Document, selector: &str) -> Element {
    doc.query_selector(selector).unwrap().unwrap()
}

// ============================================================================
// CLONING
// ============================================================================

#[test]
fn test_shallow_clone_is_detached_and_childless() {
    let doc = parse_document(r#"<div id="a" class="x"><p>one</p><p>two</p></div>"#);
    let div = element(&doc, "#a");

    let clone = div.clone_node(false).into_element().unwrap();
    assert!(clone.parent_node().is_none());
    assert!(!clone.is_connected());
    assert!(!clone.has_child_nodes());
    assert_eq!(clone.get_attribute("class").as_deref(), Some("x"));
    assert!(!clone.is_same_node(&div.to_node()));
}

#[test]
fn test_deep_clone_keeps_text() {
    let doc = parse_document("<ul><li>a<b>b</b></li><li>c</li></ul>");
    let ul = element(&doc, "ul");

    let clone = ul.clone_node(true);
    assert_eq!(clone.text_content(), ul.text_content());
    assert!(clone.parent_node().is_none());
    assert_links(&clone);

    let clone = clone.into_element().unwrap();
    assert_eq!(clone.outer_html().unwrap(), ul.outer_html().unwrap());
    // the copy is independent
    clone.set_text_content("changed");
    assert_eq!(ul.text_content(), "abc");
}

// ============================================================================
// LINK CONSISTENCY
// ============================================================================

#[test]
fn test_links_hold_after_mutation_sequence() {
    let doc = parse_document("<div id=a><p>1</p><p>2</p><p>3</p></div><div id=b></div>");
    let a = element(&doc, "#a");
    let b = element(&doc, "#b");
    let ps = doc.query_selector_all("p").unwrap().to_vec();

    b.append_child(&ps[1].to_node()).unwrap();
    a.prepend(&[ps[2].to_node()]).unwrap();
    b.insert_before(&ps[0].to_node(), b.first_child().as_ref()).unwrap();
    let fresh = doc.create_element("span");
    a.replace_child(&fresh.to_node(), &ps[2].to_node()).unwrap();
    a.append(&[ps[2].to_node(), ps[1].to_node()]).unwrap();
    b.remove_child(&ps[0].to_node()).unwrap();
    b.replace_children(&[ps[0].to_node(), fresh.to_node()]).unwrap();

    assert_links(&doc.to_node());
    assert_eq!(a.inner_html().unwrap(), "<p>3</p><p>2</p>");
    assert_eq!(b.inner_html().unwrap(), "<p>1</p><span></span>");
}

#[test]
fn test_links_hold_after_html_assignment() {
    let doc = parse_document("<section><h1>t</h1><div id=x>old</div></section>");
    element(&doc, "#x").set_outer_html("<em>a</em>text<em>b</em>").unwrap();
    element(&doc, "section").set_inner_html(&"<i>i</i>".repeat(4)).unwrap();
    element(&doc, "i").set_outer_html("").unwrap();
    assert_links(&doc.to_node());
    assert_eq!(element(&doc, "section").child_element_count(), 3);
}

// ============================================================================
// LAZY QUERIES
// ============================================================================

#[test]
fn test_each_stops_after_kth_match() {
    const N: usize = 6;
    let html: String = (0..N).map(|i| format!("<p class=item>{i}</p>")).collect();
    let doc = parse_document(&html);

    for k in 1..=N {
        let mut calls = 0;
        doc.query_selector_each(".item", |_| {
            calls += 1;
            calls < k
        })
        .unwrap();
        assert_eq!(calls, k);
    }

    let mut all = 0;
    doc.query_selector_each(".item", |_| {
        all += 1;
        true
    })
    .unwrap();
    assert_eq!(all, N);
}

#[test]
fn test_each_callback_may_mutate_tree() {
    let doc = parse_document("<ul><li></li><li></li><li></li></ul>");
    let ul = element(&doc, "ul");
    ul.query_selector_each("li", |li| {
        li.set_attribute("seen", "");
        ul.remove_child(&li.to_node()).is_ok()
    })
    .unwrap();
    assert_eq!(ul.child_element_count(), 0);
}

#[test]
fn test_iterator_is_lazy() {
    let doc = parse_document("<p>1</p><p>2</p><p>3</p>");
    let mut iter = doc.query_selector_iter("p").unwrap();
    let first = iter.next().unwrap();
    first.set_text_content("first");
    assert_eq!(iter.count(), 2);
    assert_eq!(element(&doc, "p").text_content(), "first");
}

// ============================================================================
// CLASS MATCHING
// ============================================================================

#[test]
fn test_class_matching_is_case_sensitive() {
    let doc = parse_document(r#"<div class="find-me">x</div>"#);
    assert!(doc.get_elements_by_class_name("FIND-ME").is_empty());
    assert!(doc.query_selector(".FIND-ME").unwrap().is_none());
    assert_eq!(doc.get_elements_by_class_name("find-me").length(), 1);
    assert!(doc.query_selector(".find-me").unwrap().is_some());
}

// ============================================================================
// DOCUMENT POSITION
// ============================================================================

#[test]
fn test_position_scenario() {
    let doc = parse_document("<div id=a><span id=b></span></div><p id=c></p>");
    let a = element(&doc, "#a").to_node();
    let b = element(&doc, "#b").to_node();
    let c = element(&doc, "#c").to_node();
    let d = doc.create_element("div").to_node();

    let disconnected = DocumentPosition::DISCONNECTED | DocumentPosition::IMPLEMENTATION_SPECIFIC;
    assert_eq!(
        b.compare_document_position(&a),
        DocumentPosition::CONTAINS | DocumentPosition::PRECEDING
    );
    assert_eq!(
        a.compare_document_position(&b),
        DocumentPosition::CONTAINED_BY | DocumentPosition::FOLLOWING
    );
    assert_eq!(a.compare_document_position(&c), DocumentPosition::FOLLOWING);
    assert_eq!(c.compare_document_position(&a), DocumentPosition::PRECEDING);
    assert_eq!(d.compare_document_position(&a), disconnected);
    assert_eq!(a.compare_document_position(&d), disconnected);
    assert_eq!(a.compare_document_position(&a), DocumentPosition::EQUAL);
}

#[test]
fn test_position_across_documents() {
    let one = parse_document("<p></p>");
    let two = parse_document("<p></p>");
    let p1 = element(&one, "p").to_node();
    let p2 = element(&two, "p").to_node();
    assert!(
        p1.compare_document_position(&p2)
            .contains(DocumentPosition::DISCONNECTED)
    );
    assert!(!p1.contains(&p2));
}

#[test]
fn test_document_contains_its_elements() {
    let doc = parse_document("<p></p>");
    let p = element(&doc, "p").to_node();
    assert_eq!(
        doc.compare_document_position(&p),
        DocumentPosition::CONTAINED_BY | DocumentPosition::FOLLOWING
    );
    assert!(doc.contains(&p));
    assert!(doc.contains(&doc.to_node()));
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn test_canonical_round_trip() {
    let html = "<!DOCTYPE html><html><head><title>T</title></head>\
                <body><div class=\"c\" id=\"x\">a<br>b<!--note--></div></body></html>";
    let doc = parse_document(html);
    assert_eq!(doc.to_html().unwrap(), html);
    let again = parse_document(&doc.to_html().unwrap());
    assert_eq!(again.to_html().unwrap(), html);
}

#[test]
fn test_attribute_set_twice_stores_one_entry() {
    let doc = parse_document("<div></div>");
    let div = element(&doc, "div");
    div.set_attribute("Title", "one");
    div.set_attribute("title", "two");
    assert_eq!(div.outer_html().unwrap(), r#"<div title="two"></div>"#);
    assert!(div.has_attribute("TITLE"));
    div.remove_attribute("tItLe");
    assert_eq!(div.outer_html().unwrap(), "<div></div>");
}

#[test]
fn test_set_attribute_on_parsed_svg_name() {
    let doc = parse_document("<svg viewBox='0 0 1 1'></svg>");
    let svg = element(&doc, "svg");
    svg.set_attribute("viewBox", "0 0 2 2");
    assert_eq!(
        svg.attributes(),
        [("viewBox".to_string(), "0 0 2 2".to_string())]
    );
    assert_eq!(svg.get_attribute("viewBox").as_deref(), Some("0 0 2 2"));
    assert_eq!(svg.get_attribute("viewbox").as_deref(), Some("0 0 2 2"));
    assert_eq!(svg.outer_html().unwrap(), r#"<svg viewBox="0 0 2 2"></svg>"#);
}
