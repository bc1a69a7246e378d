//! CSS selector matching and length values for the ruler tools.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Selectors** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, class, ID, universal, and attribute selectors
//!   - Compound selectors
//!   - Descendant and child combinators
//!   - Selector lists
//!
//! - **Length Values** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - px, em, rem, vw, vh, percentages, unitless numbers
//!   - Same-unit subtraction
//!   - `parseInt`-style leading integers
//!
//! # Not Yet Implemented
//!
//! - Pseudo-classes and pseudo-elements
//! - Sibling combinators
//! - `calc()` and unit conversion between relative lengths

/// CSS length parsing per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod length;
/// CSS selector parsing and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use length::{Length, LengthUnit, parse_leading_integer, parse_length};
pub use selector::{ComplexSelector, SelectorList, parse_selector, parse_selector_list};
