//! CSS Length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Box measurements are typed by hand ("10px", "1.5rem", "25%"), so parsing
//! works on a single free-form string rather than on tokenizer output.

use std::fmt;

use serde::Serialize;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Units accepted in measurements. `Number` covers a bare `<number>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum LengthUnit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    #[strum(serialize = "px")]
    Px,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    #[strum(serialize = "em")]
    Em,
    /// "Equal to the computed value of the font-size property of the root element."
    #[strum(serialize = "rem")]
    Rem,
    /// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    #[strum(serialize = "vw")]
    Vw,
    /// "1vh = 1% of viewport height"
    #[strum(serialize = "vh")]
    Vh,
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    #[strum(serialize = "%")]
    Percent,
    /// A unitless number.
    #[strum(serialize = "")]
    Number,
}

/// A parsed measurement: a finite number with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    /// Numeric part.
    pub value: f64,
    /// Unit suffix.
    pub unit: LengthUnit,
}

impl Length {
    /// Construct a length.
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// `self - other`, defined only when both share a unit.
    ///
    /// A bare `0` is compatible with every unit, as in CSS where `0` needs
    /// no unit.
    #[must_use]
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        let unit = match (self.unit, other.unit) {
            (a, b) if a == b => a,
            (LengthUnit::Number, b) if self.value == 0.0 => b,
            (a, LengthUnit::Number) if other.value == 0.0 => a,
            _ => return None,
        };
        Some(Self::new(self.value - other.value, unit))
    }
}

impl fmt::Display for Length {
    /// Shortest form that round-trips: `12px`, `1.5rem`, `-3%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Four decimals hides float noise such as 0.30000000000000004.
        let value = (self.value * 10_000.0).round() / 10_000.0;
        // Normalise -0 so "10px - 10px" prints as "0px".
        let value = if value == 0.0 { 0.0 } else { value };
        write!(f, "{value}{}", self.unit.as_ref())
    }
}

/// Parse a measurement such as `"10px"`, `" -2.5 em "`, or `"50%"`.
///
/// Whitespace around the value and between number and unit is ignored;
/// units are case-insensitive. Returns `None` for empty input, non-finite
/// numbers, and unknown units.
#[must_use]
pub fn parse_length(raw: &str) -> Option<Length> {
    let trimmed = raw.trim();
    let split = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0)))
        .map_or(trimmed.len(), |(i, _)| i);
    let (number, unit) = trimmed.split_at(split);

    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let unit: LengthUnit = unit.trim().parse().ok()?;
    Some(Length::new(value, unit))
}

/// `parseInt(raw, 10)`: the leading (optionally signed) decimal integer of
/// `raw`, ignoring whatever follows. `None` when there are no digits.
/// Values past the range of `i64` saturate to `i64::MAX` or `i64::MIN`.
#[must_use]
pub fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    Some(signed.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}
