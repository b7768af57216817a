//! Selection - the collection every query produces
//!
//! A `Selection` is a shared handle: clones point at the same slots, so a
//! selection handed back unchanged by the constructor is the caller's own
//! object, not a copy.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use fos_dom::NodeRef;

use crate::resolve::Builder;
use crate::{Input, LoadOptions, Options, Result};

/// Marker carried by every selection
pub const SIGNATURE: &str = "[fos-query selection]";

/// Ordered, indexable set of nodes
#[derive(Clone)]
pub struct Selection {
    inner: Rc<Inner>,
}

struct Inner {
    nodes: RefCell<Vec<NodeRef>>,
    options: Options,
    root: Option<Selection>,
    prev: RefCell<Option<Selection>>,
}

impl Selection {
    /// Build a selection from a selector, context and root
    ///
    /// Resolution order: empty selector, markup string, existing
    /// selection, single node, node list, and finally a selector matched
    /// inside the context (or the root when no context is given).
    pub fn new(
        selector: impl Into<Input>,
        context: impl Into<Input>,
        root: impl Into<Input>,
        options: Option<&LoadOptions>,
    ) -> Result<Selection> {
        Builder::new(None, None, options).build(selector.into(), context.into(), root.into())
    }

    /// Shorthand for `Selection::new(input, Input::Empty, Input::Empty, None)`
    pub fn wrap(input: impl Into<Input>) -> Result<Selection> {
        Self::new(input, Input::Empty, Input::Empty, None)
    }

    pub(crate) fn materialize(nodes: Vec<NodeRef>, options: Options, root: Option<Selection>) -> Self {
        Self {
            inner: Rc::new(Inner {
                nodes: RefCell::new(nodes),
                options,
                root,
                prev: RefCell::new(None),
            }),
        }
    }

    /// Derive a selection from this one
    ///
    /// The result shares this selection's root and options and records
    /// this selection as its `prev_object`. An existing selection passed as
    /// `nodes` comes back as-is and keeps its own lineage; its
    /// `prev_object` is deliberately not overwritten.
    pub fn make(&self, nodes: impl Into<Input>, context: impl Into<Input>) -> Result<Selection> {
        let nodes = nodes.into();
        let reused = matches!(nodes, Input::Selection(_));

        let made = Builder::new(Some(self.options()), self.root().cloned(), None).build(
            nodes,
            context.into(),
            Input::Empty,
        )?;

        if !reused && !made.ptr_eq(self) {
            *made.inner.prev.borrow_mut() = Some(self.clone());
        }
        Ok(made)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.inner.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node at `index`
    pub fn get(&self, index: usize) -> Option<NodeRef> {
        self.inner.nodes.borrow().get(index).cloned()
    }

    /// Replace the node at `index`, returning the old one
    ///
    /// Out-of-range indices leave the selection untouched.
    pub fn set(&self, index: usize, node: NodeRef) -> Option<NodeRef> {
        let mut nodes = self.inner.nodes.borrow_mut();
        let slot = nodes.get_mut(index)?;
        Some(std::mem::replace(slot, node))
    }

    /// Remove `delete_count` nodes at `start` and insert `items` there
    ///
    /// `start` is clamped to the length and `delete_count` to what is left,
    /// like `Array.prototype.splice`. Returns the removed nodes.
    pub fn splice(
        &self,
        start: usize,
        delete_count: usize,
        items: impl IntoIterator<Item = NodeRef>,
    ) -> Vec<NodeRef> {
        let mut nodes = self.inner.nodes.borrow_mut();
        let start = start.min(nodes.len());
        let end = start + delete_count.min(nodes.len() - start);
        nodes.splice(start..end, items).collect()
    }

    /// Iterate over a snapshot of the nodes
    ///
    /// Every call starts again at index 0; changes made while iterating are
    /// not observed by the running iterator.
    pub fn iter(&self) -> std::vec::IntoIter<NodeRef> {
        self.to_vec().into_iter()
    }

    /// Copy of the contained nodes
    pub fn to_vec(&self) -> Vec<NodeRef> {
        self.inner.nodes.borrow().clone()
    }

    pub fn options(&self) -> &Options {
        &self.inner.options
    }

    /// The document this selection was loaded from
    pub fn root(&self) -> Option<&Selection> {
        self.inner.root.as_ref()
    }

    /// The selection this one was derived from
    pub fn prev_object(&self) -> Option<Selection> {
        self.inner.prev.borrow().clone()
    }

    pub fn signature(&self) -> &'static str {
        SIGNATURE
    }

    /// Same underlying selection
    pub fn ptr_eq(&self, other: &Selection) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = NodeRef;
    type IntoIter = std::vec::IntoIter<NodeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("nodes", &*self.inner.nodes.borrow())
            .field("options", &self.inner.options)
            .field("has_root", &self.inner.root.is_some())
            .field("has_prev", &self.inner.prev.borrow().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_dom::DomTree;

    fn nodes(n: usize) -> Vec<NodeRef> {
        let mut tree = DomTree::new();
        for _ in 0..n {
            let li = tree.create_element("li");
            tree.append_child(tree.root(), li);
        }
        tree.into_root().children().collect()
    }

    fn selection(items: Vec<NodeRef>) -> Selection {
        Selection::materialize(items, Options::default(), None)
    }

    #[test]
    fn test_indexed_access() {
        let items = nodes(3);
        let sel = selection(items.clone());
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.get(1), Some(items[1].clone()));
        assert_eq!(sel.get(3), None);
        assert_eq!(sel.signature(), SIGNATURE);
    }

    #[test]
    fn test_set_replaces_slot() {
        let items = nodes(2);
        let sel = selection(items.clone());
        let old = sel.set(0, items[1].clone());
        assert_eq!(old, Some(items[0].clone()));
        assert_eq!(sel.get(0), Some(items[1].clone()));
        assert_eq!(sel.set(5, items[0].clone()), None);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_splice_remove_and_insert() {
        let items = nodes(4);
        let extra = nodes(1);
        let sel = selection(items.clone());

        let removed = sel.splice(1, 2, extra.clone());
        assert_eq!(removed, vec![items[1].clone(), items[2].clone()]);
        assert_eq!(sel.to_vec(), vec![items[0].clone(), extra[0].clone(), items[3].clone()]);
    }

    #[test]
    fn test_splice_clamps() {
        let items = nodes(3);
        let sel = selection(items.clone());

        assert!(sel.splice(10, 1, Vec::new()).is_empty());
        assert_eq!(sel.splice(2, 100, Vec::new()), vec![items[2].clone()]);
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_iteration_restarts() {
        let items = nodes(3);
        let sel = selection(items.clone());

        let mut first = sel.iter();
        assert_eq!(first.next(), Some(items[0].clone()));
        // A fresh call does not resume where the last one stopped
        assert_eq!(sel.iter().next(), Some(items[0].clone()));
        assert_eq!((&sel).into_iter().count(), 3);
    }

    #[test]
    fn test_clones_share_slots() {
        let items = nodes(2);
        let a = selection(items);
        let b = a.clone();
        b.splice(0, 1, Vec::new());
        assert!(a.ptr_eq(&b));
        assert_eq!(a.len(), 1);
    }
}
