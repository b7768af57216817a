//! Comprehensive tests for fos-html
//!
//! Tests document and fragment parsing against the fOS DOM.

use fos_dom::{NodeData, NodeRef, NodeType};
use fos_html::{HtmlParser, ParseOptions, parse};

fn find_tag(root: &NodeRef, tag: &str) -> Vec<NodeRef> {
    root.descendants()
        .filter(|n| n.tag_name() == Some(tag))
        .collect()
}

#[test]
fn test_parse_minimal_html() {
    let root = HtmlParser::new().parse_document("");
    assert!(root.tree().len() >= 1, "Even empty HTML should have root");
    assert_eq!(root.node_type(), NodeType::Document);
}

#[test]
fn test_parse_text_only_fragment() {
    let root = HtmlParser::new().parse_fragment("Hello World");
    assert_eq!(root.children().count(), 1);
    assert_eq!(root.text(), "Hello World");
}

#[test]
fn test_parse_nested_structure() {
    let html = r#"
        <html>
            <head>
                <title>Test Page</title>
                <meta charset="utf-8">
            </head>
            <body>
                <div id="container">
                    <h1>Welcome</h1>
                    <p class="intro">This is a test.</p>
                    <ul>
                        <li>Item 1</li>
                        <li>Item 2</li>
                        <li>Item 3</li>
                    </ul>
                </div>
            </body>
        </html>
    "#;

    let root = HtmlParser::new().parse_document(html);
    assert!(root.tree().len() > 10);
    assert_eq!(find_tag(&root, "li").len(), 3);
    assert_eq!(find_tag(&root, "title")[0].text(), "Test Page");
}

#[test]
fn test_parse_malformed_html() {
    // HTML5 parser should handle malformed HTML gracefully
    let html = r#"
        <div>
            <p>Unclosed paragraph
            <span>Unclosed span
        </div>
        <p>Another paragraph without closing
    "#;

    let root = HtmlParser::new().parse_document(html);
    assert_eq!(find_tag(&root, "p").len(), 2);
}

#[test]
fn test_parse_with_attributes() {
    let html = r#"
        <div id="main" class="container primary" data-value="123">
            <a href="https://example.com" target="_blank">Link</a>
        </div>
    "#;

    let root = HtmlParser::new().parse_fragment(html);
    let div = &find_tag(&root, "div")[0];
    assert_eq!(div.attr("data-value"), Some("123"));
    assert!(div.as_element().unwrap().has_class("primary"));
    assert_eq!(find_tag(&root, "a")[0].attr("target"), Some("_blank"));
}

#[test]
fn test_parse_entities() {
    let html = r#"<p>&lt;tag&gt; &amp; &quot;quotes&quot;</p>"#;
    let root = HtmlParser::new().parse_fragment(html);
    assert_eq!(root.text(), r#"<tag> & "quotes""#);
}

#[test]
fn test_parse_comments() {
    let html = r#"
        <!-- This is a comment -->
        <div>
            <!-- Another comment
                 spanning multiple lines -->
            <p>Content</p>
        </div>
    "#;

    let root = HtmlParser::new().parse_fragment(html);
    let comments = root
        .descendants()
        .filter(|n| n.node_type() == NodeType::Comment)
        .count();
    assert_eq!(comments, 2);
}

#[test]
fn test_parse_doctype() {
    let root = HtmlParser::new().parse_document("<!DOCTYPE html><p>x</p>");
    let first = root.first_child().unwrap();
    assert!(matches!(first.data(), NodeData::Doctype { name, .. } if name == "html"));
}

#[test]
fn test_parse_large_document() {
    let mut html = String::from("<html><body>");
    for i in 0..1000 {
        html.push_str(&format!(
            r#"<div id="div-{}" class="item"><p>Paragraph {}</p></div>"#,
            i, i
        ));
    }
    html.push_str("</body></html>");

    let root = HtmlParser::new().parse_document(&html);
    println!("Large document nodes: {}", root.tree().len());
    assert!(root.tree().len() > 3000);
    assert_eq!(find_tag(&root, "div").len(), 1000);
}

#[test]
fn test_parse_table_fragment() {
    let html = "<table><tr><td>Cell 1</td><td>Cell 2</td></tr></table>";
    let root = HtmlParser::new().parse_fragment(html);
    // The tree builder inserts the implied tbody
    assert_eq!(find_tag(&root, "tbody").len(), 1);
    assert_eq!(find_tag(&root, "td").len(), 2);
}

#[test]
fn test_free_function_matches_parser() {
    let options = ParseOptions::default();
    let a = parse("<b>x</b>", &options, false);
    let b = HtmlParser::with_options(options).parse_fragment("<b>x</b>");
    assert_eq!(a.tree().len(), b.tree().len());
    assert!(!a.ptr_eq(&b));
}

#[test]
fn test_xml_keeps_self_closing_and_pi() {
    let options = ParseOptions {
        xml_mode: true,
        ..Default::default()
    };
    let root = parse(r#"<?xml-stylesheet href="a.xsl"?><rss><item/><item/></rss>"#, &options, true);
    assert!(root
        .children()
        .any(|n| n.node_type() == NodeType::ProcessingInstruction));
    assert_eq!(find_tag(&root, "item").len(), 2);
}
