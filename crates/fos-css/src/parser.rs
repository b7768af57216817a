//! Selector Parser
//!
//! Hand-written recursive descent over selector text.

use crate::SelectorError;
use crate::selectors::{
    AttributeMatcher, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    NthExpression, PseudoClass, SelectorComponent, SelectorList,
};

/// Selector parser
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse a comma-separated selector list
    pub fn parse(mut self) -> Result<SelectorList, SelectorError> {
        if self.input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let list = self.parse_list(false)?;
        match self.peek() {
            None => Ok(list),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn parse_list(&mut self, nested: bool) -> Result<SelectorList, SelectorError> {
        let mut selectors = Vec::new();
        loop {
            self.skip_whitespace();
            selectors.push(self.parse_complex()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.bump(),
                Some(')') if nested => break,
                None => break,
                Some(c) => return Err(self.unexpected(c)),
            }
        }
        Ok(SelectorList(selectors))
    }

    fn parse_complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        let mut compounds = vec![self.parse_compound()?];
        let mut combinators = Vec::new();

        loop {
            let had_space = self.skip_whitespace();
            let combinator = match self.peek() {
                Some('>') => Combinator::Child,
                Some('+') => Combinator::NextSibling,
                Some('~') => Combinator::SubsequentSibling,
                None | Some(',') | Some(')') => break,
                Some(_) if had_space => Combinator::Descendant,
                Some(c) => return Err(self.unexpected(c)),
            };
            if combinator != Combinator::Descendant {
                self.bump();
                self.skip_whitespace();
            }
            combinators.push(combinator);
            compounds.push(self.parse_compound()?);
        }

        Ok(ComplexSelector {
            compounds,
            combinators,
        })
    }

    fn parse_compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut components = Vec::new();

        while let Some(c) = self.peek() {
            let component = match c {
                '*' => {
                    self.bump();
                    SelectorComponent::Universal
                }
                '#' => {
                    self.bump();
                    SelectorComponent::Id(self.ident()?)
                }
                '.' => {
                    self.bump();
                    SelectorComponent::Class(self.ident()?)
                }
                '[' => {
                    self.bump();
                    SelectorComponent::Attribute(self.attribute()?)
                }
                ':' => {
                    self.bump();
                    SelectorComponent::PseudoClass(self.pseudo_class()?)
                }
                c if is_ident_char(c) || c == '\\' => SelectorComponent::Type(self.ident()?),
                _ => break,
            };
            components.push(component);
        }

        if components.is_empty() {
            return Err(match self.peek() {
                Some(c) => self.unexpected(c),
                None => SelectorError::UnexpectedEnd,
            });
        }
        Ok(components)
    }

    /// After `[`
    fn attribute(&mut self) -> Result<AttributeSelector, SelectorError> {
        self.skip_whitespace();
        let name = self.ident()?;
        self.skip_whitespace();

        let op = match self.peek() {
            Some(']') => {
                self.bump();
                return Ok(AttributeSelector {
                    name,
                    matcher: None,
                    case_insensitive: false,
                });
            }
            Some('=') => {
                self.bump();
                '='
            }
            Some(c @ ('~' | '|' | '^' | '$' | '*')) => {
                self.bump();
                self.expect('=')?;
                c
            }
            Some(c) => return Err(self.unexpected(c)),
            None => return Err(SelectorError::UnexpectedEnd),
        };

        self.skip_whitespace();
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                self.quoted(quote)?
            }
            _ => self.ident()?,
        };
        self.skip_whitespace();

        let mut case_insensitive = false;
        if let Some(flag @ ('i' | 'I' | 's' | 'S')) = self.peek() {
            self.bump();
            case_insensitive = flag.eq_ignore_ascii_case(&'i');
            self.skip_whitespace();
        }
        self.expect(']')?;

        let matcher = match op {
            '=' => AttributeMatcher::Exact(value),
            '~' => AttributeMatcher::Contains(value),
            '|' => AttributeMatcher::DashMatch(value),
            '^' => AttributeMatcher::Prefix(value),
            '$' => AttributeMatcher::Suffix(value),
            _ => AttributeMatcher::Substring(value),
        };

        Ok(AttributeSelector {
            name,
            matcher: Some(matcher),
            case_insensitive,
        })
    }

    /// After `:`
    fn pseudo_class(&mut self) -> Result<PseudoClass, SelectorError> {
        if self.peek() == Some(':') {
            self.bump();
            let name = self.ident()?;
            return Err(SelectorError::PseudoElement(name));
        }

        let name = self.ident()?.to_ascii_lowercase();
        let pseudo = match name.as_str() {
            "link" | "any-link" => PseudoClass::Link,
            "enabled" => PseudoClass::Enabled,
            "disabled" => PseudoClass::Disabled,
            "checked" => PseudoClass::Checked,
            "root" => PseudoClass::Root,
            "empty" => PseudoClass::Empty,
            "first-child" => PseudoClass::FirstChild,
            "last-child" => PseudoClass::LastChild,
            "only-child" => PseudoClass::OnlyChild,
            "first-of-type" => PseudoClass::FirstOfType,
            "last-of-type" => PseudoClass::LastOfType,
            "only-of-type" => PseudoClass::OnlyOfType,
            "nth-child" => PseudoClass::NthChild(self.nth_argument()?),
            "nth-last-child" => PseudoClass::NthLastChild(self.nth_argument()?),
            "nth-of-type" => PseudoClass::NthOfType(self.nth_argument()?),
            "nth-last-of-type" => PseudoClass::NthLastOfType(self.nth_argument()?),
            "not" => PseudoClass::Not(self.list_argument()?),
            "is" | "matches" | "where" => PseudoClass::Is(self.list_argument()?),
            "has" => PseudoClass::Has(self.list_argument()?),
            _ => return Err(SelectorError::UnsupportedPseudoClass(name)),
        };
        Ok(pseudo)
    }

    fn nth_argument(&mut self) -> Result<NthExpression, SelectorError> {
        self.expect('(')?;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == ')' {
                break;
            }
            self.bump();
        }
        let text = &self.input[start..self.pos];
        self.expect(')')?;
        NthExpression::parse(text).ok_or_else(|| SelectorError::InvalidNth(text.trim().to_string()))
    }

    fn list_argument(&mut self) -> Result<SelectorList, SelectorError> {
        self.expect('(')?;
        let list = self.parse_list(true)?;
        self.expect(')')?;
        Ok(list)
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.bump();
                match self.peek() {
                    Some(escaped) => {
                        out.push(escaped);
                        self.bump();
                    }
                    None => return Err(SelectorError::UnexpectedEnd),
                }
            } else if is_ident_char(c) {
                out.push(c);
                self.bump();
            } else {
                break;
            }
        }

        if out.is_empty() {
            return Err(match self.peek() {
                Some(c) => self.unexpected(c),
                None => SelectorError::UnexpectedEnd,
            });
        }
        Ok(out)
    }

    /// After the opening quote
    fn quoted(&mut self, quote: char) -> Result<String, SelectorError> {
        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(SelectorError::UnexpectedEnd),
                Some(c) if c == quote => {
                    self.bump();
                    return Ok(out);
                }
                Some('\\') => {
                    self.bump();
                    if let Some(escaped) = self.peek() {
                        out.push(escaped);
                        self.bump();
                    }
                }
                Some(c) => {
                    out.push(c);
                    self.bump();
                }
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), SelectorError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.unexpected(c)),
            None => Err(SelectorError::UnexpectedEnd),
        }
    }

    /// Returns whether anything was skipped
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        self.pos != start
    }

    fn unexpected(&self, found: char) -> SelectorError {
        SelectorError::UnexpectedChar {
            offset: self.pos,
            found,
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}
