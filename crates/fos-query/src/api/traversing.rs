//! Traversal operations

use crate::{Input, Result, Selection};

/// Chainable traversal over a selection
pub trait Traversing {
    /// Descendants of the current nodes that match `selector`
    ///
    /// The result is derived with [`Selection::make`], so its
    /// `prev_object` is the selection `find` was called on.
    fn find(&self, selector: &str) -> Result<Selection>;
}

impl Traversing for Selection {
    fn find(&self, selector: &str) -> Result<Selection> {
        let roots = self.to_vec();
        let found = super::composed()
            .matcher()
            .select_all(selector, &roots, self.options())?;
        self.make(found, Input::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_links_back() {
        let list = Selection::wrap("<ul><li>a</li><li>b</li></ul>").unwrap();
        let items = list.find("li").unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.prev_object().unwrap().ptr_eq(&list));
        assert_eq!(items.options(), list.options());
    }

    #[test]
    fn test_find_bad_selector() {
        let list = Selection::wrap("<ul></ul>").unwrap();
        assert!(list.find("li >").is_err());
    }
}
