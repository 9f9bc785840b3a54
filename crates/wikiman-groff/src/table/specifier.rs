//! Column specifiers: the alignment half of a tbl column key.
//!
//! A specifier holds at most one primary [`Alignment`] plus any subset of
//! [`SpanModifiers`]. The type cannot express two alignments at once, so the
//! "one primary flag" rule never needs a runtime filter.
//!
//! Combination is left-biased: the left operand supplies the alignment, the
//! right operand only contributes span modifiers.
//!
//! ```rust
//! use wikiman_groff::table::ColumnSpecifier;
//!
//! let spanned = ColumnSpecifier::LEFT_ALIGNED
//!     .combine(ColumnSpecifier::HORIZONTAL_SPAN)
//!     .unwrap();
//! assert_eq!(spanned.code(), Some('s'));
//!
//! let centered = ColumnSpecifier::CENTER.combine(ColumnSpecifier::LEFT_ALIGNED).unwrap();
//! assert_eq!(centered, ColumnSpecifier::CENTER);
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{GroffError, Result};

/// Primary alignment of a column. Exactly one applies to a resolved column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Alphabetic subcolumn centred on its longest entry (`a`).
    RelativeCenter,
    /// Centred (`c`).
    Center,
    /// Left-aligned (`l`).
    Left,
    /// Right-aligned (`r`).
    Right,
    /// Aligned on the decimal point (`n`).
    Numeric,
}

impl Alignment {
    /// Every alignment, in declaration order.
    pub const ALL: [Alignment; 5] = [
        Alignment::RelativeCenter,
        Alignment::Center,
        Alignment::Left,
        Alignment::Right,
        Alignment::Numeric,
    ];

    /// The tbl key letter.
    pub const fn code(self) -> char {
        match self {
            Alignment::RelativeCenter => 'a',
            Alignment::Center => 'c',
            Alignment::Left => 'l',
            Alignment::Right => 'r',
            Alignment::Numeric => 'n',
        }
    }

    /// Looks up an alignment by key letter. tbl accepts either case.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'a' => Some(Alignment::RelativeCenter),
            'c' => Some(Alignment::Center),
            'l' => Some(Alignment::Left),
            'r' => Some(Alignment::Right),
            'n' => Some(Alignment::Numeric),
            _ => None,
        }
    }
}

bitflags! {
    /// Spanning modifiers that may accompany a primary alignment.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SpanModifiers: u8 {
        /// Continue the entry from the row above (`^`).
        const VERTICAL_SPAN   = 0b01;
        /// Continue the entry from the column to the left (`s`).
        const HORIZONTAL_SPAN = 0b10;
    }
}

/// Alignment intent for one column, or a modifier-only override.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnSpecifier {
    primary: Option<Alignment>,
    modifiers: SpanModifiers,
}

impl ColumnSpecifier {
    pub const RELATIVE_CENTER: Self = Self::aligned(Alignment::RelativeCenter);
    pub const CENTER: Self = Self::aligned(Alignment::Center);
    pub const LEFT_ALIGNED: Self = Self::aligned(Alignment::Left);
    pub const RIGHT_ALIGNED: Self = Self::aligned(Alignment::Right);
    pub const NUMBER_ALIGNED: Self = Self::aligned(Alignment::Numeric);
    pub const VERTICAL_SPAN: Self = Self::modifier(SpanModifiers::VERTICAL_SPAN);
    pub const HORIZONTAL_SPAN: Self = Self::modifier(SpanModifiers::HORIZONTAL_SPAN);

    /// A specifier with the given alignment and no modifiers.
    pub const fn aligned(alignment: Alignment) -> Self {
        ColumnSpecifier {
            primary: Some(alignment),
            modifiers: SpanModifiers::empty(),
        }
    }

    /// A bare modifier specifier, usable only as the right operand of
    /// [`combine`](Self::combine).
    pub const fn modifier(modifiers: SpanModifiers) -> Self {
        ColumnSpecifier {
            primary: None,
            modifiers,
        }
    }

    /// The primary alignment, if any.
    pub fn primary(&self) -> Option<Alignment> {
        self.primary
    }

    /// The span modifiers.
    pub fn modifiers(&self) -> SpanModifiers {
        self.modifiers
    }

    /// Whether no alignment and no modifier is set.
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.modifiers.is_empty()
    }

    /// Adds span modifiers, keeping the alignment.
    pub fn with(mut self, modifiers: SpanModifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Combines two specifiers with left precedence.
    ///
    /// The result keeps `self`'s alignment and the union of both operands'
    /// modifiers; any alignment on `other` is discarded. Fails with
    /// [`GroffError::InvalidSpecifier`] when `self` has no alignment.
    ///
    /// Not commutative: `CENTER.combine(LEFT_ALIGNED)` is `CENTER` while
    /// `LEFT_ALIGNED.combine(CENTER)` is `LEFT_ALIGNED`.
    pub fn combine(self, other: ColumnSpecifier) -> Result<ColumnSpecifier> {
        let primary = self.primary.ok_or_else(|| GroffError::InvalidSpecifier {
            reason: format!(
                "left operand '{}' has no primary alignment",
                String::from(self)
            ),
        })?;
        Ok(ColumnSpecifier {
            primary: Some(primary),
            modifiers: self.modifiers | other.modifiers,
        })
    }

    /// The single tbl key letter for this specifier.
    ///
    /// Span modifiers replace the alignment letter, horizontal first.
    /// Returns `None` for an empty specifier.
    pub fn code(&self) -> Option<char> {
        if self.modifiers.contains(SpanModifiers::HORIZONTAL_SPAN) {
            Some('s')
        } else if self.modifiers.contains(SpanModifiers::VERTICAL_SPAN) {
            Some('^')
        } else {
            self.primary.map(Alignment::code)
        }
    }
}

/// Same text as the `String` form, e.g. `"cs"`. Format lines use
/// [`code`](ColumnSpecifier::code) instead.
impl fmt::Display for ColumnSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from(*self))
    }
}

/// Parses a string of key letters, e.g. `"l"`, `"cs"` or `"^"`.
impl FromStr for ColumnSpecifier {
    type Err = GroffError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GroffError::InvalidSpecifier {
                reason: "empty specifier".to_string(),
            });
        }

        let mut spec = ColumnSpecifier::default();
        for code in trimmed.chars() {
            match code {
                's' | 'S' => spec.modifiers |= SpanModifiers::HORIZONTAL_SPAN,
                '^' => spec.modifiers |= SpanModifiers::VERTICAL_SPAN,
                other => {
                    let alignment =
                        Alignment::from_code(other).ok_or_else(|| GroffError::InvalidSpecifier {
                            reason: format!("unknown key letter '{}' in '{}'", other, trimmed),
                        })?;
                    if spec.primary.replace(alignment).is_some() {
                        return Err(GroffError::InvalidSpecifier {
                            reason: format!("more than one alignment in '{}'", trimmed),
                        });
                    }
                }
            }
        }
        Ok(spec)
    }
}

impl TryFrom<String> for ColumnSpecifier {
    type Error = GroffError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Writes the alignment letter followed by any modifier letters, so the
/// string parses back to the same specifier.
impl From<ColumnSpecifier> for String {
    fn from(spec: ColumnSpecifier) -> String {
        let mut out = String::new();
        if let Some(primary) = spec.primary {
            out.push(primary.code());
        }
        if spec.modifiers.contains(SpanModifiers::HORIZONTAL_SPAN) {
            out.push('s');
        }
        if spec.modifiers.contains(SpanModifiers::VERTICAL_SPAN) {
            out.push('^');
        }
        out
    }
}

impl From<Alignment> for ColumnSpecifier {
    fn from(alignment: Alignment) -> Self {
        ColumnSpecifier::aligned(alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_operand_alignment_wins() {
        let combined = ColumnSpecifier::CENTER
            .combine(ColumnSpecifier::LEFT_ALIGNED)
            .unwrap();
        assert_eq!(combined.primary(), Some(Alignment::Center));
    }

    #[test]
    fn combine_is_not_commutative() {
        let a = ColumnSpecifier::CENTER;
        let b = ColumnSpecifier::LEFT_ALIGNED;
        assert_ne!(a.combine(b).unwrap(), b.combine(a).unwrap());
    }

    #[test]
    fn combine_unions_modifiers() {
        let left = ColumnSpecifier::RIGHT_ALIGNED.with(SpanModifiers::VERTICAL_SPAN);
        let right = ColumnSpecifier::NUMBER_ALIGNED.with(SpanModifiers::HORIZONTAL_SPAN);
        let combined = left.combine(right).unwrap();
        assert_eq!(combined.primary(), Some(Alignment::Right));
        assert_eq!(combined.modifiers(), SpanModifiers::all());
    }

    #[test]
    fn bare_modifier_allowed_on_right() {
        let combined = ColumnSpecifier::LEFT_ALIGNED
            .combine(ColumnSpecifier::VERTICAL_SPAN)
            .unwrap();
        assert_eq!(combined.primary(), Some(Alignment::Left));
        assert_eq!(combined.code(), Some('^'));
    }

    #[test]
    fn bare_modifier_rejected_on_left() {
        let err = ColumnSpecifier::HORIZONTAL_SPAN
            .combine(ColumnSpecifier::CENTER)
            .unwrap_err();
        assert!(matches!(err, GroffError::InvalidSpecifier { .. }));

        let err = ColumnSpecifier::default()
            .combine(ColumnSpecifier::CENTER)
            .unwrap_err();
        assert!(matches!(err, GroffError::InvalidSpecifier { .. }));
    }

    #[test]
    fn codes() {
        assert_eq!(ColumnSpecifier::RELATIVE_CENTER.code(), Some('a'));
        assert_eq!(ColumnSpecifier::CENTER.code(), Some('c'));
        assert_eq!(ColumnSpecifier::LEFT_ALIGNED.code(), Some('l'));
        assert_eq!(ColumnSpecifier::RIGHT_ALIGNED.code(), Some('r'));
        assert_eq!(ColumnSpecifier::NUMBER_ALIGNED.code(), Some('n'));
        assert_eq!(ColumnSpecifier::default().code(), None);

        let both = ColumnSpecifier::CENTER.with(SpanModifiers::all());
        assert_eq!(both.code(), Some('s'));
    }

    #[test]
    fn parse_codes() {
        assert_eq!(
            "l".parse::<ColumnSpecifier>().unwrap(),
            ColumnSpecifier::LEFT_ALIGNED
        );
        assert_eq!(
            " C ".parse::<ColumnSpecifier>().unwrap(),
            ColumnSpecifier::CENTER
        );
        assert_eq!(
            "s".parse::<ColumnSpecifier>().unwrap(),
            ColumnSpecifier::HORIZONTAL_SPAN
        );
        assert_eq!(
            "r^".parse::<ColumnSpecifier>().unwrap(),
            ColumnSpecifier::RIGHT_ALIGNED.with(SpanModifiers::VERTICAL_SPAN)
        );
    }

    #[test]
    fn parse_rejects_conflicts_and_unknowns() {
        assert!("lr".parse::<ColumnSpecifier>().is_err());
        assert!("q".parse::<ColumnSpecifier>().is_err());
        assert!("".parse::<ColumnSpecifier>().is_err());
    }

    #[test]
    fn string_form_parses_back() {
        let spec = ColumnSpecifier::NUMBER_ALIGNED.with(SpanModifiers::all());
        let text = String::from(spec);
        assert_eq!(text, "ns^");
        assert_eq!(text.parse::<ColumnSpecifier>().unwrap(), spec);
    }

    #[test]
    fn display_matches_string_form() {
        let spec = ColumnSpecifier::CENTER.with(SpanModifiers::HORIZONTAL_SPAN);
        assert_eq!(spec.to_string(), "cs");
        assert_eq!(spec.code(), Some('s'));
        assert_eq!(spec.to_string().parse::<ColumnSpecifier>().unwrap(), spec);
    }

    #[test]
    fn serde_uses_codes() {
        let spec: ColumnSpecifier = serde_yaml::from_str("\"cs\"").unwrap();
        assert_eq!(
            spec,
            ColumnSpecifier::CENTER.with(SpanModifiers::HORIZONTAL_SPAN)
        );
        assert!(serde_yaml::from_str::<ColumnSpecifier>("\"x\"").is_err());
    }
}
