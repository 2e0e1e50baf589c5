//! Parsing tests for outline-html
//!
//! Malformed input, whitespace handling and attribute fidelity.

use outline_html::HtmlParser;

// ============================================================================
// EMPTY AND MINIMAL INPUT
// ============================================================================

#[test]
fn test_parse_empty() {
    let doc = HtmlParser::new().parse("");
    assert!(doc.tree().len() >= 1, "Even empty HTML should have root");
    assert_eq!(doc.elements_by_tag_names(&["body"]).len(), 1);
    assert_eq!(doc.title(), "");
}

#[test]
fn test_parse_only_doctype() {
    let doc = HtmlParser::new().parse("<!DOCTYPE html>");
    assert_eq!(doc.elements_by_tag_names(&["html"]).len(), 1);
}

#[test]
fn test_parse_null_bytes() {
    let doc = HtmlParser::new().parse("Hello\0World");
    assert!(doc.tree().len() > 1);
}

// ============================================================================
// MALFORMED HTML
// ============================================================================

#[test]
fn test_parse_unclosed_headings() {
    let doc = HtmlParser::new().parse("<h1>One<h2>Two");
    let headings = doc.elements_by_tag_names(&["h1", "h2"]);
    assert_eq!(headings.len(), 2);
}

#[test]
fn test_parse_uppercase_tags() {
    let doc = HtmlParser::new().parse("<H1 ID=\"top\">Loud</H1>");
    let h1 = doc.get_element_by_id("top").unwrap();
    let elem = doc.tree().get(h1).unwrap().as_element().unwrap();
    assert_eq!(elem.tag, "h1");
}

#[test]
fn test_parse_deeply_nested() {
    const DEPTH: usize = 50_000;
    let html = format!("<h1 id=\"h\">{}x{}</h1>", "<span>".repeat(DEPTH), "</span>".repeat(DEPTH));
    let doc = HtmlParser::new().parse(&html);

    let h1 = doc.get_element_by_id("h").unwrap();
    assert_eq!(doc.tree().text_content(h1), "x");
    assert_eq!(doc.elements_by_tag_names(&["span"]).len(), DEPTH);
}

// ============================================================================
// CONTENT FIDELITY
// ============================================================================

#[test]
fn test_whitespace_text_is_kept() {
    let doc = HtmlParser::new().parse("<h1 id=\"h\"><b>a</b> <i>b</i></h1>");
    let h1 = doc.get_element_by_id("h").unwrap();
    assert_eq!(doc.tree().text_content(h1), "a b");
}

#[test]
fn test_entities_decoded() {
    let doc = HtmlParser::new().parse("<p id=\"p\">Fish &amp; chips &lt;3</p>");
    let p = doc.get_element_by_id("p").unwrap();
    assert_eq!(doc.tree().text_content(p), "Fish & chips <3");
}

#[test]
fn test_empty_attribute_is_present() {
    let doc = HtmlParser::new().parse("<img id=\"i\" alt=\"\" src=\"x.png\"><img id=\"j\">");
    let tree = doc.tree();

    let with_alt = tree.get(doc.get_element_by_id("i").unwrap()).unwrap().as_element().unwrap();
    assert_eq!(with_alt.get_attr("alt"), Some(""));

    let without = tree.get(doc.get_element_by_id("j").unwrap()).unwrap().as_element().unwrap();
    assert_eq!(without.get_attr("alt"), None);
}

#[test]
fn test_comments_do_not_contribute_text() {
    let doc = HtmlParser::new().parse("<h2 id=\"h\">Visible<!-- hidden --></h2>");
    let h2 = doc.get_element_by_id("h").unwrap();
    assert_eq!(doc.tree().text_content(h2), "Visible");
}

#[test]
fn test_parse_with_url() {
    let doc = HtmlParser::new().parse_with_url("<title>T</title>", "https://example.com/");
    assert_eq!(doc.url(), "https://example.com/");
    assert_eq!(doc.title(), "T");
}
