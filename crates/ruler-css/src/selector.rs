//! Selectors for click-target filtering
//!
//! This module implements the subset of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) that
//! `Element.matches()` needs for click-target filtering: type, class, ID,
//! universal and attribute selectors, compound selectors, the descendant and
//! child combinators, and comma-separated selector lists.

use ruler_common::warning::warn_once;
use ruler_dom::{DomTree, ElementData, NodeId};

/// One condition on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `section`
    Type(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.box`, `.container`
    Class(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#preview`
    Id(String),

    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    ///
    /// `*`, matching every element.
    Universal,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[data-square]`, `[data-kind=card]`
    Attribute(AttributeSelector),
}

/// Attribute selectors per [§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeSelector {
    /// `[attr]` — "Represents an element with the att attribute"
    Exists(String),
    /// `[attr=value]` — value is exactly `value`
    Equals(String, String),
    /// `[attr~=value]` — whitespace-separated word list containing `value`
    Includes(String, String),
    /// `[attr|=value]` — exactly `value` or `value-` prefix
    DashMatch(String, String),
    /// `[attr^=value]` — value starts with `value`
    PrefixMatch(String, String),
    /// `[attr$=value]` — value ends with `value`
    SuffixMatch(String, String),
    /// `[attr*=value]` — value contains `value`
    SubstringMatch(String, String),
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// Simple selectors written back to back (`div.card[data-square]`); all of
/// them must hold for the same element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    /// Conditions, in source order.
    pub simple_selectors: Vec<SimpleSelector>,
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// `A B`: B is an arbitrary descendant of A.
    Descendant,
    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B`: B is a direct child of A.
    Child,
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// `div.card > .box span` is stored as:
/// ```text
/// subject: [span]
/// combinators: [(Descendant, [.box]), (Child, [div.card])]
/// ```
/// The chain runs right-to-left because matching walks up from the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    /// Rightmost compound: the element being tested.
    pub subject: CompoundSelector,
    /// Chain of (combinator, compound) pairs going left from the subject.
    pub combinators: Vec<(Combinator, CompoundSelector)>,
}

/// [§ 4.1 Selector lists](https://www.w3.org/TR/selectors-4/#grouping)
///
/// "A selector list is a comma-separated list of selectors." An element
/// matches the list when it matches any member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    /// The member selectors, in source order.
    pub selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    /// True when the list is exactly the universal selector `*`.
    #[must_use]
    pub fn is_universal(&self) -> bool {
        matches!(
            self.selectors.as_slice(),
            [ComplexSelector { subject, combinators }]
                if combinators.is_empty()
                    && subject.simple_selectors == [SimpleSelector::Universal]
        )
    }

    /// `element.matches(selectors)`
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node_id: NodeId) -> bool {
        self.selectors
            .iter()
            .any(|selector| selector.matches_in_tree(tree, node_id))
    }
}

impl ComplexSelector {
    /// [§ 4.1 Selector Matching](https://www.w3.org/TR/selectors-4/#match-a-selector-against-an-element)
    ///
    /// Test the subject against `node_id`, then satisfy each combinator by
    /// walking up the tree.
    #[must_use]
    pub fn matches_in_tree(&self, tree: &DomTree, node_id: NodeId) -> bool {
        if !compound_matches(&self.subject, tree, node_id) {
            return false;
        }

        let mut current_id = node_id;
        for (combinator, compound) in &self.combinators {
            let next = match combinator {
                // Any ancestor that matches. Taking the nearest one is enough
                // because the chain only ever relates ancestors.
                Combinator::Descendant => tree
                    .ancestors(current_id)
                    .find(|&ancestor| compound_matches(compound, tree, ancestor)),
                Combinator::Child => tree
                    .parent(current_id)
                    .filter(|&parent| compound_matches(compound, tree, parent)),
            };
            match next {
                Some(id) => current_id = id,
                None => return false,
            }
        }
        true
    }
}

fn compound_matches(compound: &CompoundSelector, tree: &DomTree, node_id: NodeId) -> bool {
    tree.as_element(node_id).is_some_and(|element| {
        compound
            .simple_selectors
            .iter()
            .all(|simple| simple.matches(element))
    })
}

impl SimpleSelector {
    /// Test one element, without looking at its ancestors.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Type(name) => element.tag_name.eq_ignore_ascii_case(name),
            Self::Class(class_name) => element.has_class(class_name),
            Self::Id(id) => element.id() == Some(id.as_str()),
            Self::Universal => true,
            Self::Attribute(attr) => attr.matches(element),
        }
    }
}

impl AttributeSelector {
    fn matches(&self, element: &ElementData) -> bool {
        let value = |name: &str| element.attrs.get(name).map(String::as_str);
        match self {
            Self::Exists(name) => element.has_attribute(name),
            Self::Equals(name, val) => value(name) == Some(val.as_str()),
            Self::Includes(name, val) => {
                value(name).is_some_and(|v| v.split_ascii_whitespace().any(|w| w == val))
            }
            Self::DashMatch(name, val) => value(name).is_some_and(|v| {
                v == val || v.strip_prefix(val.as_str()).is_some_and(|rest| rest.starts_with('-'))
            }),
            Self::PrefixMatch(name, val) => value(name).is_some_and(|v| v.starts_with(val.as_str())),
            Self::SuffixMatch(name, val) => value(name).is_some_and(|v| v.ends_with(val.as_str())),
            Self::SubstringMatch(name, val) => value(name).is_some_and(|v| v.contains(val.as_str())),
        }
    }
}

/// [§ 4.3.10 ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
const fn is_ident_start_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.3.9 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
const fn is_ident_char(c: char) -> bool {
    is_ident_start_char(c) || c.is_ascii_digit() || c == '-'
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

fn skip_whitespace(chars: &mut Chars<'_>) {
    while chars.next_if(char::is_ascii_whitespace).is_some() {}
}

fn take_ident(chars: &mut Chars<'_>) -> String {
    let mut ident = String::new();
    while let Some(c) = chars.next_if(|&c| is_ident_char(c)) {
        ident.push(c);
    }
    ident
}

/// Parse an attribute value inside `[attr=value]`: quoted or a bare ident.
fn parse_attr_value(chars: &mut Chars<'_>) -> Option<String> {
    skip_whitespace(chars);
    match chars.peek().copied()? {
        q @ ('"' | '\'') => {
            let _ = chars.next();
            let mut val = String::new();
            for ch in chars.by_ref() {
                if ch == q {
                    return Some(val);
                }
                val.push(ch);
            }
            None // unterminated string
        }
        _ => {
            let mut val = String::new();
            while let Some(c) = chars.next_if(|&c| is_ident_char(c) || c == '.') {
                val.push(c);
            }
            (!val.is_empty()).then_some(val)
        }
    }
}

/// Parse the body of `[...]` after the opening bracket.
fn parse_attribute(chars: &mut Chars<'_>) -> Option<AttributeSelector> {
    skip_whitespace(chars);
    let name = take_ident(chars);
    if name.is_empty() {
        return None;
    }
    skip_whitespace(chars);

    let op = match chars.next()? {
        ']' => return Some(AttributeSelector::Exists(name)),
        '=' => '=',
        op @ ('~' | '|' | '^' | '$' | '*') => {
            if chars.next() != Some('=') {
                return None;
            }
            op
        }
        _ => return None,
    };
    let val = parse_attr_value(chars)?;
    skip_whitespace(chars);
    if chars.next() != Some(']') {
        return None;
    }

    Some(match op {
        '~' => AttributeSelector::Includes(name, val),
        '|' => AttributeSelector::DashMatch(name, val),
        '^' => AttributeSelector::PrefixMatch(name, val),
        '$' => AttributeSelector::SuffixMatch(name, val),
        '*' => AttributeSelector::SubstringMatch(name, val),
        _ => AttributeSelector::Equals(name, val),
    })
}

/// Parse one complex selector (no commas).
///
/// [§ 4 Selector syntax](https://www.w3.org/TR/selectors-4/#syntax)
///
/// Returns `None` for syntax outside the supported subset, including
/// pseudo-classes and sibling combinators.
#[must_use]
pub fn parse_selector(raw: &str) -> Option<ComplexSelector> {
    let mut compounds: Vec<CompoundSelector> = Vec::new();
    let mut combinators_between: Vec<Combinator> = Vec::new();
    let mut current: Vec<SimpleSelector> = Vec::new();
    let mut pending: Option<Combinator> = None;

    let mut chars = raw.trim().chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_whitespace() || c == '>' {
            skip_whitespace(&mut chars);
            if chars.next_if_eq(&'>').is_some() {
                pending = Some(Combinator::Child);
                skip_whitespace(&mut chars);
            } else if pending.is_none() {
                pending = Some(Combinator::Descendant);
            }
            if !current.is_empty() {
                compounds.push(CompoundSelector {
                    simple_selectors: std::mem::take(&mut current),
                });
            } else if compounds.is_empty() {
                return None; // combinator without a left-hand side
            }
            continue;
        }

        if let Some(combinator) = pending.take() {
            combinators_between.push(combinator);
        }

        let _ = chars.next();
        let simple = match c {
            '.' => SimpleSelector::Class(non_empty(take_ident(&mut chars))?),
            '#' => SimpleSelector::Id(non_empty(take_ident(&mut chars))?),
            '*' => SimpleSelector::Universal,
            '[' => SimpleSelector::Attribute(parse_attribute(&mut chars)?),
            _ if is_ident_start_char(c) || c == '-' => {
                let mut name = c.to_string();
                name.push_str(&take_ident(&mut chars));
                SimpleSelector::Type(name)
            }
            _ => return None,
        };
        current.push(simple);
    }

    if current.is_empty() {
        return None; // empty input or trailing combinator
    }
    compounds.push(CompoundSelector {
        simple_selectors: current,
    });
    if compounds.len() != combinators_between.len() + 1 {
        return None;
    }

    let subject = compounds.pop()?;
    let combinators = compounds
        .into_iter()
        .zip(combinators_between)
        .rev()
        .map(|(compound, combinator)| (combinator, compound))
        .collect();

    Some(ComplexSelector {
        subject,
        combinators,
    })
}

fn non_empty(ident: String) -> Option<String> {
    (!ident.is_empty()).then_some(ident)
}

/// Parse a comma-separated selector list.
///
/// Like `Element.matches()`, a single invalid member invalidates the whole
/// list; that case is reported once through the warning channel.
#[must_use]
pub fn parse_selector_list(raw: &str) -> Option<SelectorList> {
    let selectors: Option<Vec<ComplexSelector>> = raw.split(',').map(parse_selector).collect();
    match selectors {
        Some(selectors) if !selectors.is_empty() => Some(SelectorList { selectors }),
        _ => {
            warn_once("Selector", &format!("unsupported selector '{raw}'"));
            None
        }
    }
}
