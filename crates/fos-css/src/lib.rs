//! fOS CSS Selector Engine
//!
//! Selector parsing and matching over `fos-dom` trees.

mod matcher;
mod parser;
pub mod selectors;

pub use matcher::select_all;
pub use parser::SelectorParser;
pub use selectors::{SelectorComponent, SelectorList};

/// Parse a selector list
pub fn parse_selector(selector: &str) -> Result<SelectorList, SelectorError> {
    SelectorParser::new(selector).parse()
}

/// Settings that change how selectors compare against nodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Tag and attribute names compare case-sensitively
    pub xml_mode: bool,
}

/// Selector parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unexpected {found:?} at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    #[error("Unexpected end of selector")]
    UnexpectedEnd,

    #[error("Unsupported pseudo-class :{0}")]
    UnsupportedPseudoClass(String),

    #[error("Pseudo-elements never match nodes: ::{0}")]
    PseudoElement(String),

    #[error("Invalid An+B expression: {0:?}")]
    InvalidNth(String),
}
