//! Selection resolution
//!
//! Decides what a `(selector, context, root)` triple means and produces the
//! matching selection. Cases are tried in order and the first one that
//! applies wins:
//!
//! 1. empty selector: empty selection
//! 2. markup string: parsed, its top-level nodes become the selector
//! 3. existing selection: returned unchanged
//! 4. single node: treated as a one-node list
//! 5. node list: wrapped in order, context ignored
//! 6. selector string: matched inside the context, or inside the root

use fos_dom::{NodeRef, NodeType};

use crate::api::Traversing;
use crate::{Input, LoadOptions, Options, Result, Selection, root};

/// Shape of a selector argument once markup has been expanded
enum Shape {
    Empty,
    Wrapped(Selection),
    Nodes(Vec<NodeRef>),
    Selector(String),
    Unrecognized,
}

/// Nodes accepted as a selection member on their own
fn is_node_like(node: &NodeRef) -> bool {
    matches!(
        node.node_type(),
        NodeType::Element | NodeType::Document | NodeType::Text | NodeType::Comment
    )
}

/// Builds one selection with a fixed set of effective options
pub(crate) struct Builder {
    options: Options,
    root: Option<Selection>,
}

impl Builder {
    /// `instance` and `root` describe what the object under construction
    /// already carries; `call` is layered on top.
    pub(crate) fn new(
        instance: Option<&Options>,
        root: Option<Selection>,
        call: Option<&LoadOptions>,
    ) -> Self {
        Self {
            options: Options::resolve(instance, call),
            root,
        }
    }

    pub(crate) fn build(self, selector: Input, context: Input, root: Input) -> Result<Selection> {
        if selector.is_empty() {
            tracing::trace!("empty selector");
            return Ok(self.empty());
        }

        let root = root::bind(root, &self.options).or(self.root);
        let builder = Builder {
            options: self.options,
            root,
        };

        match builder.classify(selector) {
            Shape::Empty | Shape::Unrecognized => {
                tracing::trace!("unrecognized selector");
                Ok(builder.empty())
            }
            Shape::Wrapped(selection) => {
                tracing::trace!("reusing selection");
                Ok(selection)
            }
            Shape::Nodes(nodes) => {
                tracing::trace!(len = nodes.len(), "wrapping nodes");
                Ok(builder.wrap(nodes))
            }
            Shape::Selector(selector) => builder.within(selector, context),
        }
    }

    fn classify(&self, selector: Input) -> Shape {
        match selector {
            Input::Empty => Shape::Empty,
            Input::Str(text) if fos_html::is_html(&text) => {
                tracing::debug!(len = text.len(), "parsing markup selector");
                let fragment = fos_html::parse(&text, &self.options.parse_options(), false);
                Shape::Nodes(fragment.children().collect())
            }
            Input::Str(text) => Shape::Selector(text),
            Input::Selection(selection) => Shape::Wrapped(selection),
            Input::Node(node) if is_node_like(&node) => Shape::Nodes(vec![node]),
            Input::Node(_) => Shape::Unrecognized,
            Input::Nodes(nodes) => Shape::Nodes(nodes),
        }
    }

    /// Match `selector` inside `context`
    ///
    /// A plain string context is folded into the selector and the root
    /// becomes the search scope. The root is searched through a fresh
    /// selection of its nodes, so results stay anchored to it.
    fn within(&self, selector: String, context: Input) -> Result<Selection> {
        let mut selector = selector;
        let scope = match context {
            Input::Empty => self
                .root
                .as_ref()
                .filter(|root| !root.is_empty())
                .map(|root| self.wrap(root.to_vec())),
            Input::Str(markup) if fos_html::is_html(&markup) => {
                let parsed = fos_html::parse(&markup, &self.options.parse_options(), false);
                Some(self.wrap(vec![parsed]))
            }
            Input::Str(prefix) => {
                selector = format!("{} {}", prefix, selector);
                self.root.as_ref().map(|root| self.wrap(root.to_vec()))
            }
            Input::Selection(selection) => Some(selection),
            Input::Node(node) => Some(self.wrap(vec![node])),
            Input::Nodes(nodes) => Some(self.wrap(nodes)),
        };

        match scope {
            Some(scope) => {
                tracing::trace!(selector = selector.as_str(), scope = scope.len(), "find");
                scope.find(&selector)
            }
            None => {
                tracing::trace!(selector = selector.as_str(), "no scope");
                Ok(self.empty())
            }
        }
    }

    fn wrap(&self, nodes: Vec<NodeRef>) -> Selection {
        Selection::materialize(nodes, self.options, self.root.clone())
    }

    fn empty(&self) -> Selection {
        self.wrap(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_dom::DomTree;

    fn build(selector: impl Into<Input>, context: impl Into<Input>, root: impl Into<Input>) -> Selection {
        Builder::new(None, None, None)
            .build(selector.into(), context.into(), root.into())
            .unwrap()
    }

    #[test]
    fn test_empty_selector_skips_root() {
        let sel = build("", Input::Empty, "<p>never parsed</p>");
        assert!(sel.is_empty());
        assert!(sel.root().is_none());
    }

    #[test]
    fn test_doctype_is_unrecognized() {
        let parsed = fos_html::parse("<!DOCTYPE html><p></p>", &Default::default(), true);
        let doctype = parsed.first_child().unwrap();
        assert_eq!(doctype.node_type(), NodeType::Doctype);
        assert!(build(doctype, Input::Empty, Input::Empty).is_empty());
    }

    #[test]
    fn test_text_and_document_nodes_are_wrapped() {
        let mut tree = DomTree::new();
        let text = tree.create_text("hi");
        tree.append_child(tree.root(), text);
        let doc = tree.into_root();

        assert_eq!(build(&doc, Input::Empty, Input::Empty).len(), 1);
        assert_eq!(build(doc.first_child(), Input::Empty, Input::Empty).len(), 1);
    }

    #[test]
    fn test_string_context_without_root_is_empty() {
        assert!(build("li", "ul", Input::Empty).is_empty());
    }

    #[test]
    fn test_selector_searches_root() {
        let sel = build("li", Input::Empty, "<ul><li>a</li><li>b</li></ul>");
        assert_eq!(sel.len(), 2);
        assert!(sel.root().is_some());
    }
}
