//! Selector matching over node trees
//!
//! Complex selectors are matched right to left: the rightmost compound is
//! tested against the candidate, then combinators walk to ancestors or
//! preceding siblings.

use fos_dom::NodeRef;

use crate::selectors::{Combinator, ComplexSelector, SelectorList, match_component};
use crate::{MatchOptions, SelectorError, parse_selector};

impl SelectorList {
    /// Check if an element matches any selector of the group
    pub fn matches(&self, element: &NodeRef, options: MatchOptions) -> bool {
        self.0.iter().any(|complex| complex.matches(element, options))
    }
}

impl ComplexSelector {
    pub fn matches(&self, element: &NodeRef, options: MatchOptions) -> bool {
        match self.compounds.len() {
            0 => false,
            n => self.matches_from(n - 1, element, options),
        }
    }

    fn matches_from(&self, index: usize, element: &NodeRef, options: MatchOptions) -> bool {
        if !self.compounds[index]
            .iter()
            .all(|component| match_component(component, element, options))
        {
            return false;
        }
        if index == 0 {
            return true;
        }

        let next = index - 1;
        match self.combinators[next] {
            Combinator::Descendant => {
                element_ancestors(element).any(|a| self.matches_from(next, &a, options))
            }
            Combinator::Child => element
                .parent()
                .filter(NodeRef::is_element)
                .is_some_and(|p| self.matches_from(next, &p, options)),
            Combinator::NextSibling => previous_elements(element)
                .next()
                .is_some_and(|s| self.matches_from(next, &s, options)),
            Combinator::SubsequentSibling => {
                previous_elements(element).any(|s| self.matches_from(next, &s, options))
            }
        }
    }
}

/// Element ancestors, nearest first; stops at the first non-element parent
fn element_ancestors(element: &NodeRef) -> impl Iterator<Item = NodeRef> {
    std::iter::successors(element.parent(), NodeRef::parent).take_while(NodeRef::is_element)
}

/// Preceding element siblings, nearest first
fn previous_elements(element: &NodeRef) -> impl Iterator<Item = NodeRef> {
    std::iter::successors(element.prev_sibling(), NodeRef::prev_sibling)
        .filter(NodeRef::is_element)
}

/// Drop duplicates and any root that lies inside another root
fn remove_subsets(roots: &[NodeRef]) -> Vec<NodeRef> {
    roots
        .iter()
        .enumerate()
        .filter(|&(i, node)| {
            !roots[..i].contains(node)
                && !std::iter::successors(node.parent(), NodeRef::parent)
                    .any(|ancestor| roots.contains(&ancestor))
        })
        .map(|(_, node)| node.clone())
        .collect()
}

/// Find every element below `roots` that matches `selector`
///
/// The roots themselves are never part of the result. Results are unique
/// and in document order within each root; combinators may look at
/// ancestors outside the roots.
pub fn select_all(
    selector: &str,
    roots: &[NodeRef],
    options: MatchOptions,
) -> Result<Vec<NodeRef>, SelectorError> {
    let list = parse_selector(selector)?;
    tracing::trace!(selector, roots = roots.len(), "select_all");

    let mut found = Vec::new();
    for root in remove_subsets(roots) {
        found.extend(
            root.descendants()
                .filter(|node| node.is_element() && list.matches(node, options)),
        );
    }
    Ok(found)
}
