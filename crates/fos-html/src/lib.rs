//! fOS HTML Parser
//!
//! HTML5 parsing built on html5ever, XML parsing built on xml5ever. Both
//! go through RcDom and are converted into a frozen `fos-dom` tree.

mod detect;
mod parser;

pub use detect::is_html;
pub use parser::{HtmlParser, ParseOptions};

pub use fos_dom::NodeRef;

/// Parse markup into a tree and return its document node
///
/// With `is_document` false the input is treated as a fragment: no
/// html/head/body scaffolding is synthesized, and the top-level nodes of
/// the input become the children of the returned root.
pub fn parse(markup: &str, options: &ParseOptions, is_document: bool) -> NodeRef {
    HtmlParser::with_options(*options).parse(markup, is_document)
}
