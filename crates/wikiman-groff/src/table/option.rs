//! Column options: the presentation half of a tbl column key.
//!
//! Options never conflict, so combining them is a plain union.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GroffError, Result};

bitflags! {
    /// Presentation flags appended to a column's key letter.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColumnOption: u8 {
        /// Bold font (`b`).
        const BOLD                       = 0b0000_0001;
        /// Italic font (`i`).
        const ITALIC                     = 0b0000_0010;
        /// Vertically spanned entry starts at the bottom row (`d`).
        const VERTICAL_SPAN_START_BOTTOM = 0b0000_0100;
        /// Vertically spanned entry starts at the top row (`t`).
        const VERTICAL_SPAN_START_TOP    = 0b0000_1000;
        /// Move the entry up half a line (`u`).
        const UP_HALF_LINE               = 0b0001_0000;
        /// Expand the column to fill the line (`x`).
        const EXPAND_COLUMN              = 0b0010_0000;
        /// Ignore the column's entries when computing widths (`z`).
        const IGNORE_COLUMN              = 0b0100_0000;
    }
}

/// Emission order of option letters.
const CODES: [(ColumnOption, char); 7] = [
    (ColumnOption::BOLD, 'b'),
    (ColumnOption::ITALIC, 'i'),
    (ColumnOption::VERTICAL_SPAN_START_TOP, 't'),
    (ColumnOption::VERTICAL_SPAN_START_BOTTOM, 'd'),
    (ColumnOption::UP_HALF_LINE, 'u'),
    (ColumnOption::EXPAND_COLUMN, 'x'),
    (ColumnOption::IGNORE_COLUMN, 'z'),
];

impl ColumnOption {
    /// Union of both option sets.
    pub fn combine(self, other: ColumnOption) -> ColumnOption {
        self | other
    }

    /// The tbl letters for every set flag, in a fixed order.
    pub fn codes(&self) -> String {
        CODES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, code)| *code)
            .collect()
    }

    /// Looks up a single flag by its tbl letter.
    pub fn from_code(code: char) -> Option<ColumnOption> {
        let lower = code.to_ascii_lowercase();
        CODES
            .iter()
            .find(|(_, c)| *c == lower)
            .map(|(flag, _)| *flag)
    }
}

impl fmt::Display for ColumnOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.codes())
    }
}

/// Parses option letters such as `"bi"` or `"x"`. The empty string is the
/// empty set.
impl FromStr for ColumnOption {
    type Err = GroffError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim().chars().try_fold(ColumnOption::empty(), |acc, code| {
            ColumnOption::from_code(code)
                .map(|flag| acc | flag)
                .ok_or(GroffError::InvalidOption { code })
        })
    }
}

impl Serialize for ColumnOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.codes())
    }
}

impl<'de> Deserialize<'de> for ColumnOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let codes = String::deserialize(deserializer)?;
        codes.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn options() -> impl Strategy<Value = ColumnOption> {
        any::<u8>().prop_map(ColumnOption::from_bits_truncate)
    }

    proptest! {
        #[test]
        fn combine_is_commutative(x in options(), y in options()) {
            prop_assert_eq!(x.combine(y), y.combine(x));
        }

        #[test]
        fn combine_is_idempotent(x in options()) {
            prop_assert_eq!(x.combine(x), x);
        }

        #[test]
        fn combine_is_associative(x in options(), y in options(), z in options()) {
            prop_assert_eq!(x.combine(y).combine(z), x.combine(y.combine(z)));
        }

        #[test]
        fn letters_round_trip(x in options()) {
            prop_assert_eq!(x.codes().parse::<ColumnOption>().unwrap(), x);
        }
    }
}
