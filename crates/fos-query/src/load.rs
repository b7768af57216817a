//! Document loading
//!
//! [`load`] parses a document once and returns a [`Query`] whose
//! selections are all anchored to that document.

use fos_dom::NodeRef;

use crate::resolve::Builder;
use crate::{Input, LoadOptions, Options, Result, Selection};

/// Parse `content` and bind it as the root of every selection made through
/// the returned handle
///
/// With `is_document` set, missing `<html>`, `<head>` and `<body>`
/// elements are synthesized (HTML mode only).
pub fn load(content: &str, options: Option<&LoadOptions>, is_document: bool) -> Query {
    let options = Options::resolve(None, options);
    let document = fos_html::parse(content, &options.parse_options(), is_document);
    tracing::debug!(xml_mode = options.xml_mode, is_document, "loaded document");

    Query {
        root: Selection::materialize(vec![document.clone()], options, None),
        document,
        options,
    }
}

/// A loaded document
#[derive(Debug, Clone)]
pub struct Query {
    document: NodeRef,
    root: Selection,
    options: Options,
}

impl Query {
    /// Select within the loaded document
    pub fn select(&self, selector: impl Into<Input>, context: impl Into<Input>) -> Result<Selection> {
        self.select_with(selector, context, Input::Empty, None)
    }

    /// Select with an explicit root and per-call options
    ///
    /// Per-call options are layered over the options given to [`load`].
    /// A non-empty `root` replaces the loaded document as the anchor.
    pub fn select_with(
        &self,
        selector: impl Into<Input>,
        context: impl Into<Input>,
        root: impl Into<Input>,
        options: Option<&LoadOptions>,
    ) -> Result<Selection> {
        Builder::new(Some(&self.options), Some(self.root.clone()), options).build(
            selector.into(),
            context.into(),
            root.into(),
        )
    }

    /// Selection holding the document node
    pub fn root(&self) -> Selection {
        self.root.clone()
    }

    /// The parsed document node
    pub fn document(&self) -> NodeRef {
        self.document.clone()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
