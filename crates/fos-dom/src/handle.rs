//! Shared node handles
//!
//! A [`NodeRef`] pairs a frozen tree with an index into it. Cloning a handle
//! is cheap and never copies the node; equality is identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::{DomTree, ElementData, Node, NodeData, NodeId, NodeType};

/// Handle to one node of a frozen [`DomTree`]
#[derive(Clone)]
pub struct NodeRef {
    tree: Rc<DomTree>,
    id: NodeId,
}

impl NodeRef {
    /// Handle for `id`, if the tree has such a node
    pub fn new(tree: Rc<DomTree>, id: NodeId) -> Option<Self> {
        tree.get(id)?;
        Some(Self { tree, id })
    }

    pub(crate) fn root_of(tree: Rc<DomTree>) -> Self {
        Self {
            tree,
            id: NodeId::ROOT,
        }
    }

    fn at(&self, id: NodeId) -> Option<NodeRef> {
        id.is_valid().then(|| NodeRef {
            tree: Rc::clone(&self.tree),
            id,
        })
    }

    #[inline]
    fn node(&self) -> &Node {
        self.tree.node(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to
    pub fn tree(&self) -> &Rc<DomTree> {
        &self.tree
    }

    pub fn data(&self) -> &NodeData {
        &self.node().data
    }

    pub fn node_type(&self) -> NodeType {
        self.node().node_type()
    }

    pub fn is_element(&self) -> bool {
        self.node().is_element()
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        self.node().as_element()
    }

    /// Tag name, for elements only
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.name.as_str())
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()?.get_attr(name)
    }

    pub fn parent(&self) -> Option<NodeRef> {
        self.at(self.node().parent)
    }

    pub fn first_child(&self) -> Option<NodeRef> {
        self.at(self.node().first_child)
    }

    pub fn last_child(&self) -> Option<NodeRef> {
        self.at(self.node().last_child)
    }

    pub fn next_sibling(&self) -> Option<NodeRef> {
        self.at(self.node().next_sibling)
    }

    pub fn prev_sibling(&self) -> Option<NodeRef> {
        self.at(self.node().prev_sibling)
    }

    /// Direct children in document order
    pub fn children(&self) -> Children {
        Children {
            tree: Rc::clone(&self.tree),
            next: self.node().first_child,
        }
    }

    /// Direct element children in document order
    pub fn element_children(&self) -> impl Iterator<Item = NodeRef> {
        self.children().filter(NodeRef::is_element)
    }

    /// All nodes below this one, pre-order, excluding `self`
    pub fn descendants(&self) -> Descendants {
        Descendants {
            root: self.clone(),
            next: self.node().first_child,
        }
    }

    /// Concatenated text of this node and everything below it
    pub fn text(&self) -> String {
        if let NodeData::Text(t) = self.data() {
            return t.clone();
        }
        let mut out = String::new();
        for node in self.descendants() {
            if let NodeData::Text(t) = node.data() {
                out.push_str(t);
            }
        }
        out
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for NodeRef {}

impl Hash for NodeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.tree), state);
        self.id.hash(state);
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("NodeRef");
        s.field("id", &self.id.0).field("type", &self.node_type());
        if let Some(name) = self.tag_name() {
            s.field("name", &name);
        }
        s.finish()
    }
}

/// Iterator over direct children
pub struct Children {
    tree: Rc<DomTree>,
    next: NodeId,
}

impl Iterator for Children {
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        self.next = self.tree.node(id).next_sibling;
        Some(NodeRef {
            tree: Rc::clone(&self.tree),
            id,
        })
    }
}

/// Pre-order iterator over a subtree, excluding its root
pub struct Descendants {
    root: NodeRef,
    next: NodeId,
}

impl Iterator for Descendants {
    type Item = NodeRef;

    fn next(&mut self) -> Option<NodeRef> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        let tree = &self.root.tree;
        let node = tree.node(current);

        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            // Climb until a following sibling exists, without leaving the subtree
            let mut cursor = current;
            loop {
                let n = tree.node(cursor);
                if n.next_sibling.is_valid() {
                    break n.next_sibling;
                }
                cursor = n.parent;
                if !cursor.is_valid() || cursor == self.root.id {
                    break NodeId::NONE;
                }
            }
        };

        Some(NodeRef {
            tree: Rc::clone(tree),
            id: current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NodeRef {
        // <ul><li>a</li><li>b</li></ul><p/>
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let li1 = tree.create_element("li");
        let a = tree.create_text("a");
        let li2 = tree.create_element("li");
        let b = tree.create_text("b");
        let p = tree.create_element("p");
        tree.append_child(tree.root(), ul);
        tree.append_child(ul, li1);
        tree.append_child(li1, a);
        tree.append_child(ul, li2);
        tree.append_child(li2, b);
        tree.append_child(tree.root(), p);
        tree.into_root()
    }

    #[test]
    fn test_descendants_preorder() {
        let root = sample();
        let kinds: Vec<_> = root
            .descendants()
            .map(|n| n.tag_name().map(str::to_string).unwrap_or_else(|| n.text()))
            .collect();
        assert_eq!(kinds, vec!["ul", "li", "a", "li", "b", "p"]);
    }

    #[test]
    fn test_descendants_stay_in_subtree() {
        let root = sample();
        let ul = root.first_child().unwrap();
        assert_eq!(ul.descendants().count(), 4);
        assert_eq!(ul.text(), "ab");
    }

    #[test]
    fn test_identity_equality() {
        let root = sample();
        let ul1 = root.first_child().unwrap();
        let ul2 = root.children().next().unwrap();
        assert_eq!(ul1, ul2);
        assert_ne!(ul1, sample().first_child().unwrap());
    }

    #[test]
    fn test_parent_and_siblings() {
        let root = sample();
        let ul = root.first_child().unwrap();
        let li = ul.first_child().unwrap();
        assert_eq!(li.parent(), Some(ul.clone()));
        assert_eq!(li.next_sibling(), ul.last_child());
        assert!(root.parent().is_none());
        assert_eq!(ul.element_children().count(), 2);
    }
}
