//! CSS Selectors Module
//!
//! Selector data types and per-element matching of compound parts.
//! Combinators are handled in [`crate::matcher`].

use fos_dom::{NodeData, NodeRef};

use crate::MatchOptions;

/// Comma-separated group of selectors
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorList(pub Vec<ComplexSelector>);

/// Compound selectors joined by combinators, left to right
///
/// `combinators[i]` sits between `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSelector {
    pub compounds: Vec<CompoundSelector>,
    pub combinators: Vec<Combinator>,
}

/// Components that must all match the same element
pub type CompoundSelector = Vec<SelectorComponent>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
    /// `a + b`
    NextSibling,
    /// `a ~ b`
    SubsequentSibling,
}

/// A component of a selector
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorComponent {
    /// Universal selector *
    Universal,
    /// Type selector (tag name)
    Type(String),
    /// ID selector #id
    Id(String),
    /// Class selector .class
    Class(String),
    /// Attribute selector [attr], [attr=value], etc.
    Attribute(AttributeSelector),
    /// Pseudo-class :first-child, :not(), etc.
    PseudoClass(PseudoClass),
}

/// Pseudo-classes that can be decided from the tree alone
#[derive(Debug, Clone, PartialEq)]
pub enum PseudoClass {
    // Link / input state, read from attributes
    Link,
    Enabled,
    Disabled,
    Checked,

    // Tree-structural pseudo-classes
    Root,
    Empty,
    FirstChild,
    LastChild,
    OnlyChild,
    FirstOfType,
    LastOfType,
    OnlyOfType,
    NthChild(NthExpression),
    NthLastChild(NthExpression),
    NthOfType(NthExpression),
    NthLastOfType(NthExpression),

    // Logical pseudo-classes
    Not(SelectorList),
    Is(SelectorList),
    Has(SelectorList),
}

/// An+B expression for :nth-* selectors
#[derive(Debug, Clone, PartialEq)]
pub struct NthExpression {
    /// Coefficient (A in An+B)
    pub a: i32,
    /// Offset (B in An+B)
    pub b: i32,
}

impl NthExpression {
    /// Create "odd" expression (2n+1)
    pub fn odd() -> Self {
        Self { a: 2, b: 1 }
    }

    /// Create "even" expression (2n)
    pub fn even() -> Self {
        Self { a: 2, b: 0 }
    }

    /// Create a simple index (0n+b)
    pub fn index(n: i32) -> Self {
        Self { a: 0, b: n }
    }

    /// Create An+B expression
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Parse from string like "2n+1", "odd", "even", "3"
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "odd" => return Some(Self::odd()),
            "even" => return Some(Self::even()),
            _ => {}
        }

        // Try to parse as simple number
        if let Ok(n) = s.parse::<i32>() {
            return Some(Self::index(n));
        }

        // Parse An+B format
        let s = s.replace(' ', "");
        let n_pos = s.find('n')?;

        let a_str = &s[..n_pos];
        let a = match a_str {
            "" | "+" => 1,
            "-" => -1,
            _ => a_str.parse().ok()?,
        };

        let rest = s[n_pos + 1..].strip_prefix('+').unwrap_or(&s[n_pos + 1..]);
        let b = if rest.is_empty() { 0 } else { rest.parse().ok()? };

        Some(Self::new(a, b))
    }

    /// Check if index n (1-based) matches this expression
    pub fn matches(&self, n: i32) -> bool {
        if self.a == 0 {
            return n == self.b;
        }

        // Widened so extreme offsets cannot overflow
        let diff = i64::from(n) - i64::from(self.b);
        let a = i64::from(self.a);
        if a > 0 {
            diff >= 0 && diff % a == 0
        } else {
            diff <= 0 && diff % a == 0
        }
    }
}

/// Attribute selector
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSelector {
    pub name: String,
    pub matcher: Option<AttributeMatcher>,
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeMatcher {
    /// [attr=value] - exact match
    Exact(String),
    /// [attr~=value] - whitespace-separated list contains
    Contains(String),
    /// [attr|=value] - exact or prefix with hyphen
    DashMatch(String),
    /// [attr^=value] - starts with
    Prefix(String),
    /// [attr$=value] - ends with
    Suffix(String),
    /// [attr*=value] - contains substring
    Substring(String),
}

impl AttributeSelector {
    /// Check if an attribute value matches
    pub fn matches(&self, value: Option<&str>) -> bool {
        let (matcher, val) = match (&self.matcher, value) {
            (None, found) => return found.is_some(), // [attr] - just check existence
            (Some(_), None) => return false,
            (Some(matcher), Some(val)) => (matcher, val),
        };

        let fold = |s: &str| {
            if self.case_insensitive {
                s.to_lowercase()
            } else {
                s.to_string()
            }
        };
        let val = fold(val);

        match matcher {
            AttributeMatcher::Exact(expected) => val == fold(expected),
            AttributeMatcher::Contains(expected) => {
                let expected = fold(expected);
                !expected.is_empty() && val.split_whitespace().any(|w| w == expected)
            }
            AttributeMatcher::DashMatch(expected) => {
                let expected = fold(expected);
                val == expected || val.starts_with(&format!("{}-", expected))
            }
            // Empty operands never match for the substring family
            AttributeMatcher::Prefix(expected) => {
                !expected.is_empty() && val.starts_with(&fold(expected))
            }
            AttributeMatcher::Suffix(expected) => {
                !expected.is_empty() && val.ends_with(&fold(expected))
            }
            AttributeMatcher::Substring(expected) => {
                !expected.is_empty() && val.contains(&fold(expected))
            }
        }
    }
}

/// Match a selector component against an element
pub fn match_component(component: &SelectorComponent, element: &NodeRef, options: MatchOptions) -> bool {
    let Some(data) = element.as_element() else {
        return false;
    };

    match component {
        SelectorComponent::Universal => true,
        SelectorComponent::Type(tag) => {
            if options.xml_mode {
                data.name == *tag
            } else {
                data.name.eq_ignore_ascii_case(tag)
            }
        }
        SelectorComponent::Id(id) => data.id.as_deref() == Some(id.as_str()),
        SelectorComponent::Class(class) => data.has_class(class),
        SelectorComponent::Attribute(attr) => {
            let value = data
                .attrs
                .iter()
                .find(|a| {
                    if options.xml_mode {
                        a.name == attr.name
                    } else {
                        a.name.eq_ignore_ascii_case(&attr.name)
                    }
                })
                .map(|a| a.value.as_str());
            attr.matches(value)
        }
        SelectorComponent::PseudoClass(pseudo) => match_pseudo_class(pseudo, element, options),
    }
}

/// Match a pseudo-class against an element
pub fn match_pseudo_class(pseudo: &PseudoClass, element: &NodeRef, options: MatchOptions) -> bool {
    match pseudo {
        PseudoClass::Link => {
            matches!(element.tag_name(), Some("a" | "area" | "link")) && element.attr("href").is_some()
        }
        PseudoClass::Enabled => is_form_control(element) && element.attr("disabled").is_none(),
        PseudoClass::Disabled => is_form_control(element) && element.attr("disabled").is_some(),
        PseudoClass::Checked => match element.tag_name() {
            Some("input") => element.attr("checked").is_some(),
            Some("option") => element.attr("selected").is_some(),
            _ => false,
        },

        // Tree-structural pseudo-classes
        PseudoClass::Root => !element.parent().is_some_and(|p| p.is_element()),
        PseudoClass::Empty => !element.children().any(|c| match c.data() {
            NodeData::Element(_) => true,
            NodeData::Text(t) => !t.is_empty(),
            _ => false,
        }),
        PseudoClass::FirstChild => position(element, |_| true).0 == 1,
        PseudoClass::LastChild => {
            let (index, count) = position(element, |_| true);
            index == count
        }
        PseudoClass::OnlyChild => position(element, |_| true).1 == 1,
        PseudoClass::FirstOfType => position(element, same_type(element)).0 == 1,
        PseudoClass::LastOfType => {
            let (index, count) = position(element, same_type(element));
            index == count
        }
        PseudoClass::OnlyOfType => position(element, same_type(element)).1 == 1,
        PseudoClass::NthChild(expr) => expr.matches(position(element, |_| true).0 as i32),
        PseudoClass::NthLastChild(expr) => {
            let (index, count) = position(element, |_| true);
            expr.matches((count - index + 1) as i32)
        }
        PseudoClass::NthOfType(expr) => expr.matches(position(element, same_type(element)).0 as i32),
        PseudoClass::NthLastOfType(expr) => {
            let (index, count) = position(element, same_type(element));
            expr.matches((count - index + 1) as i32)
        }

        // Logical pseudo-classes
        PseudoClass::Not(list) => !list.matches(element, options),
        PseudoClass::Is(list) => list.matches(element, options),
        PseudoClass::Has(list) => element
            .descendants()
            .any(|d| d.is_element() && list.matches(&d, options)),
    }
}

fn is_form_control(element: &NodeRef) -> bool {
    matches!(
        element.tag_name(),
        Some("button" | "input" | "select" | "textarea" | "optgroup" | "option" | "fieldset")
    )
}

fn same_type(element: &NodeRef) -> impl Fn(&NodeRef) -> bool + '_ {
    move |sibling: &NodeRef| sibling.tag_name() == element.tag_name()
}

/// 1-based index of `element` among its element siblings that pass
/// `filter`, and how many such siblings there are
fn position(element: &NodeRef, filter: impl Fn(&NodeRef) -> bool) -> (usize, usize) {
    let Some(parent) = element.parent() else {
        return (1, 1);
    };

    let mut index = 0;
    let mut count = 0;
    for sibling in parent.element_children().filter(|s| filter(s)) {
        count += 1;
        if sibling.ptr_eq(element) {
            index = count;
        }
    }
    (index, count)
}
