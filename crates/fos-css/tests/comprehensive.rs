//! Comprehensive tests for fos-css
//!
//! Tests selector matching against parsed documents.

use fos_css::{MatchOptions, SelectorError, select_all};
use fos_dom::NodeRef;
use fos_html::{HtmlParser, ParseOptions};

const PAGE: &str = r#"
    <div id="main" class="container">
        <h1>Title</h1>
        <ul class="fruits">
            <li class="apple">Apple</li>
            <li class="orange selected">Orange</li>
            <li class="pear" data-ripe="yes">Pear</li>
        </ul>
        <p class="intro">Intro <a href="https://example.com" lang="en-US">link</a></p>
        <p></p>
        <form>
            <input type="checkbox" checked>
            <input type="text" disabled>
        </form>
    </div>
"#;

fn page() -> NodeRef {
    HtmlParser::new().parse_fragment(PAGE)
}

fn select(selector: &str) -> Vec<String> {
    select_all(selector, &[page()], MatchOptions::default())
        .unwrap()
        .iter()
        .map(|n| {
            let tag = n.tag_name().unwrap_or_default();
            match n.attr("class") {
                Some(class) => format!("{}.{}", tag, class.split_whitespace().next().unwrap_or("")),
                None => tag.to_string(),
            }
        })
        .collect()
}

#[test]
fn test_type_selector_in_document_order() {
    assert_eq!(select("li"), vec!["li.apple", "li.orange", "li.pear"]);
}

#[test]
fn test_type_selector_is_case_insensitive_in_html() {
    assert_eq!(select("LI").len(), 3);
}

#[test]
fn test_class_and_id() {
    assert_eq!(select(".selected"), vec!["li.orange"]);
    assert_eq!(select("#main"), vec!["div.container"]);
    assert_eq!(select("#main.container"), vec!["div.container"]);
    assert!(select("#main.missing").is_empty());
}

#[test]
fn test_descendant_and_child() {
    assert_eq!(select("div li").len(), 3);
    assert_eq!(select("div > li").len(), 0);
    assert_eq!(select("ul > li").len(), 3);
    assert_eq!(select("#main > p > a"), vec!["a"]);
}

#[test]
fn test_sibling_combinators() {
    assert_eq!(select(".apple + li"), vec!["li.orange"]);
    assert_eq!(select(".apple ~ li"), vec!["li.orange", "li.pear"]);
    assert_eq!(select("h1 + p").len(), 0);
    assert_eq!(select("h1 ~ p").len(), 2);
}

#[test]
fn test_group_keeps_document_order() {
    assert_eq!(select("p.intro, h1"), vec!["h1", "p.intro"]);
}

#[test]
fn test_attribute_selectors() {
    assert_eq!(select("[data-ripe]"), vec!["li.pear"]);
    assert_eq!(select("[data-ripe=yes]"), vec!["li.pear"]);
    assert_eq!(select("a[href^='https']"), vec!["a"]);
    assert_eq!(select("a[href$=\".com\"]"), vec!["a"]);
    assert_eq!(select("a[lang|=en]"), vec!["a"]);
    assert_eq!(select("li[class~=selected]"), vec!["li.orange"]);
    assert_eq!(select("li[class*=ang]"), vec!["li.orange"]);
}

#[test]
fn test_structural_pseudo_classes() {
    assert_eq!(select("li:first-child"), vec!["li.apple"]);
    assert_eq!(select("li:last-child"), vec!["li.pear"]);
    assert_eq!(select("li:nth-child(2)"), vec!["li.orange"]);
    assert_eq!(select("li:nth-child(odd)"), vec!["li.apple", "li.pear"]);
    assert_eq!(select("li:nth-last-child(1)"), vec!["li.pear"]);
    assert_eq!(select("p:first-of-type"), vec!["p.intro"]);
    assert_eq!(select("p:empty"), vec!["p"]);
    assert_eq!(select("h1:only-of-type"), vec!["h1"]);
    assert_eq!(select(":root"), vec!["div.container"]);
}

#[test]
fn test_logical_pseudo_classes() {
    assert_eq!(select("li:not(.apple)"), vec!["li.orange", "li.pear"]);
    assert_eq!(select("li:is(.apple, .pear)"), vec!["li.apple", "li.pear"]);
    assert_eq!(select("p:has(a)"), vec!["p.intro"]);
}

#[test]
fn test_state_pseudo_classes() {
    assert_eq!(select("input:checked").len(), 1);
    assert_eq!(select("input:disabled").len(), 1);
    assert_eq!(select("input:enabled").len(), 1);
    assert_eq!(select("a:link"), vec!["a"]);
}

#[test]
fn test_xml_mode_is_case_sensitive() {
    let options = ParseOptions {
        xml_mode: true,
        ..Default::default()
    };
    let root = HtmlParser::with_options(options).parse_document("<Feed><Entry/><entry/></Feed>");

    let strict = MatchOptions { xml_mode: true };
    assert_eq!(select_all("Entry", &[root.clone()], strict).unwrap().len(), 1);
    assert_eq!(select_all("entry", &[root.clone()], strict).unwrap().len(), 1);

    let loose = MatchOptions::default();
    assert_eq!(select_all("entry", &[root], loose).unwrap().len(), 2);
}

#[test]
fn test_invalid_selectors() {
    let root = page();
    let err = select_all("li:hover", &[root.clone()], MatchOptions::default()).unwrap_err();
    assert_eq!(err, SelectorError::UnsupportedPseudoClass("hover".into()));
    assert_eq!(err.to_string(), "Unsupported pseudo-class :hover");

    assert!(select_all("", &[root], MatchOptions::default()).is_err());
}

#[test]
fn test_nth_offsets_at_integer_limits() {
    assert_eq!(select("li:nth-child(n-2147483648)").len(), 3);
    assert_eq!(select("li:nth-child(-n+2147483647)").len(), 3);
    assert!(select("li:nth-last-child(2147483647)").is_empty());
}
