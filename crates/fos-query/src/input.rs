//! Constructor arguments
//!
//! Selector, context and root all accept the same loosely-shaped input.

use fos_dom::NodeRef;

use crate::Selection;

/// Anything the selection constructor accepts
#[derive(Debug, Clone, Default)]
pub enum Input {
    /// Nothing given
    #[default]
    Empty,
    /// A selector or a markup string
    Str(String),
    /// An existing selection
    Selection(Selection),
    /// A single node
    Node(NodeRef),
    /// An ordered list of nodes
    Nodes(Vec<NodeRef>),
}

impl Input {
    /// Absent or the empty string
    pub fn is_empty(&self) -> bool {
        match self {
            Input::Empty => true,
            Input::Str(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::from(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        if s.is_empty() { Input::Empty } else { Input::Str(s) }
    }
}

impl From<&String> for Input {
    fn from(s: &String) -> Self {
        Input::from(s.as_str())
    }
}

impl From<Selection> for Input {
    fn from(selection: Selection) -> Self {
        Input::Selection(selection)
    }
}

impl From<&Selection> for Input {
    fn from(selection: &Selection) -> Self {
        Input::Selection(selection.clone())
    }
}

impl From<NodeRef> for Input {
    fn from(node: NodeRef) -> Self {
        Input::Node(node)
    }
}

impl From<&NodeRef> for Input {
    fn from(node: &NodeRef) -> Self {
        Input::Node(node.clone())
    }
}

impl From<Vec<NodeRef>> for Input {
    fn from(nodes: Vec<NodeRef>) -> Self {
        Input::Nodes(nodes)
    }
}

impl From<&[NodeRef]> for Input {
    fn from(nodes: &[NodeRef]) -> Self {
        Input::Nodes(nodes.to_vec())
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Empty, Into::into)
    }
}
