//! fOS Query
//!
//! Builds selections (ordered node collections) from selectors, markup,
//! nodes or other selections, optionally scoped by a context and anchored
//! to a root document.
//!
//! ```rust,ignore
//! use fos_query::{Input, Traversing, load};
//!
//! let query = load("<ul><li>a</li><li>b</li></ul>", None, false);
//! let items = query.select("li", "ul")?;
//! assert_eq!(items.len(), 2);
//!
//! let first = query.select(items.get(0), Input::Empty)?;
//! assert!(first.find("span")?.is_empty());
//! ```

pub mod api;
mod input;
mod load;
mod options;
mod resolve;
pub mod root;
mod selection;

pub use api::{Api, CssMatcher, Matcher, Traversing, compose};
pub use input::Input;
pub use load::{Query, load};
pub use options::{LoadOptions, OptionOverrides, Options, XmlSetting};
pub use selection::{SIGNATURE, Selection};

pub use fos_css::SelectorError;
pub use fos_dom::NodeRef;

/// Query errors
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The selector could not be parsed
    #[error("Invalid selector: {0}")]
    Selector(#[from] SelectorError),

    /// A custom matcher failed
    #[error("Matcher error: {0}")]
    Matcher(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;
