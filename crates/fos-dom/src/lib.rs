//! fOS DOM - Document Object Model
//!
//! Arena-based node tree. A parsed tree is frozen behind an `Rc` and handed
//! out as [`NodeRef`] handles, which compare by identity rather than by
//! content.

mod node;
mod tree;
mod handle;

pub use node::{Attribute, ElementData, Node, NodeData, NodeType};
pub use tree::DomTree;
pub use handle::{Children, Descendants, NodeRef};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
