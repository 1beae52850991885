//! Parse/serialize round trips
//!
//! Serializing a parsed document and parsing the result again must give
//! back the same markup.

use dom_html::{HtmlParser, ParseOptions, inner_html, outer_html, parse_document, parse_fragment_into};
use dom_tree::DomTree;

fn serialize_document(tree: &DomTree) -> String {
    outer_html(tree, tree.root()).unwrap()
}

// ============================================================================
// CANONICAL DOCUMENTS
// ============================================================================

#[test]
fn test_canonical_document_is_unchanged() {
    let html = "<!DOCTYPE html><html><head><title>T</title></head>\
                <body><p class=\"x\">a<br>b</p><!--c--></body></html>";
    let tree = parse_document(html);
    assert_eq!(serialize_document(&tree), html);
}

#[test]
fn test_implied_elements_are_serialized() {
    let tree = parse_document("<p>hi");
    assert_eq!(
        serialize_document(&tree),
        "<html><head></head><body><p>hi</p></body></html>"
    );
}

#[test]
fn test_serialization_is_stable() {
    let inputs = [
        "<div><p>one<p>two</div><img src=x alt='a&b'>",
        "<table><tr><td>1<td>2</table>",
        "<ul>\n  <li>a\n  <li>b\n</ul>",
        "<select><option selected>1<option>2</select>",
        "<svg viewBox=\"0 0 10 10\"><circle r=\"1\"></circle></svg>",
        "<p>caf\u{e9} &amp; cr\u{e8}me&nbsp;br\u{fb}l\u{e9}e</p>",
        "<script>if (a < b) { x = \"</p>\"; }</script><style>p > a {}</style>",
        "<template><b>t</b></template>",
    ];
    for input in inputs {
        let first = serialize_document(&parse_document(input));
        let second = serialize_document(&parse_document(&first));
        assert_eq!(first, second, "unstable serialization for {input:?}");
    }
}

#[test]
fn test_attribute_escaping_round_trip() {
    let tree = parse_document(r#"<a title='say "hi" &amp; go' href="?a=1&b=2">x</a>"#);
    let html = serialize_document(&tree);
    assert!(html.contains(r#"<a title="say &quot;hi&quot; &amp; go" href="?a=1&amp;b=2">x</a>"#));
}

// ============================================================================
// FRAGMENTS
// ============================================================================

#[test]
fn test_fragment_round_trip() {
    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    let markup = "<b>bold</b> and <i>italic</i>";
    for root in parse_fragment_into(&mut tree, markup, "div") {
        tree.append_child(div, root).unwrap();
    }
    assert_eq!(inner_html(&tree, div).unwrap(), markup);
    assert_eq!(outer_html(&tree, div).unwrap(), format!("<div>{markup}</div>"));
}

#[test]
fn test_fragment_uses_default_context() {
    let parser = HtmlParser::with_options(ParseOptions {
        fragment_context: "tbody".to_string(),
        ..Default::default()
    });
    let mut tree = DomTree::new();
    let roots = parser.parse_fragment_into(&mut tree, "<tr><td>x</td></tr>", "");
    assert_eq!(roots.len(), 1);
    assert_eq!(outer_html(&tree, roots[0]).unwrap(), "<tr><td>x</td></tr>");
}

// ============================================================================
// READERS AND OPTIONS
// ============================================================================

#[test]
fn test_reader_matches_string_parse() {
    let html = "<!DOCTYPE html><title>x</title><p>\u{263a}</p>";
    let from_str = serialize_document(&parse_document(html));
    let from_reader = HtmlParser::new()
        .parse_document_from_reader(html.as_bytes())
        .unwrap();
    assert_eq!(serialize_document(&from_reader), from_str);
}

#[test]
fn test_scripting_flag_changes_noscript() {
    let html = "<head><noscript><style>p{}</style></noscript></head>";

    let off = parse_document(html);
    assert!(serialize_document(&off).contains("<noscript><style>p{}</style></noscript>"));

    let parser = HtmlParser::with_options(ParseOptions {
        scripting_enabled: true,
        ..Default::default()
    });
    let on = parser.parse_document(html);
    let noscript = on
        .descendants(on.root())
        .find(|&id| on.element(id).is_some_and(|e| e.name == "noscript"))
        .unwrap();
    // with scripting, noscript content is a single raw text node
    assert_eq!(on.child_count(noscript), 1);
    assert!(on.node(on.first_child(noscript).unwrap()).is_text());
}

#[test]
fn test_edge_inputs_parse() {
    for input in ["", "   \t\n", "<!DOCTYPE html>", "</div>", "Hello\0World", "<div></div></div>"] {
        let tree = parse_document(input);
        tree.verify_links().unwrap();
        assert!(tree.first_element_child(tree.root()).is_some());
    }
}
