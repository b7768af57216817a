//! Root binding
//!
//! The root anchors a selection to the document it came from. Selectors
//! given with a string context are matched against it.

use crate::{Input, Options, Selection};

/// Turn a `root` argument into the anchor selection
///
/// Strings are always parsed, in fragment mode, with the effective
/// options. Nodes are wrapped and an existing selection is reused.
pub fn bind(root: Input, options: &Options) -> Option<Selection> {
    let nodes = match root {
        Input::Empty => return None,
        Input::Selection(selection) => return Some(selection),
        Input::Str(markup) => {
            tracing::debug!(len = markup.len(), "parsing root markup");
            vec![fos_html::parse(&markup, &options.parse_options(), false)]
        }
        Input::Node(node) => vec![node],
        Input::Nodes(nodes) => nodes,
    };
    Some(Selection::materialize(nodes, *options, None))
}
