//! Error types for building and rendering groff structures.
//!
//! Every fallible operation in this crate returns [`GroffError`]. Mutation calls
//! on tables are permissive; most structural problems surface only when a
//! table is rendered.

use thiserror::Error;

/// Errors raised while building or rendering groff structures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroffError {
    /// A column specifier could not be combined or parsed.
    #[error("invalid column specifier: {reason}")]
    InvalidSpecifier { reason: String },

    /// A column option code could not be parsed.
    #[error("invalid column option code '{code}'")]
    InvalidOption { code: char },

    /// Positional access outside the current bounds.
    #[error("{kind} index {index} out of range (len {len})")]
    IndexError {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// A row's cell count disagrees with the section's column count.
    #[error("row {row} has {found} cells but the section declares {expected} columns")]
    StructuralMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A section without any column layout was rendered.
    #[error("section has no columns to lay out")]
    EmptyLayout,

    /// A cell contains the section's tab character, which tbl cannot escape.
    #[error("cell text {text:?} contains the tab separator {separator:?}")]
    SeparatorInCell { text: String, separator: char },

    /// The eqn `delim` option is not an opening and a closing character.
    #[error("delim {delim:?} must be exactly two characters")]
    InvalidDelimiter { delim: String },

    /// Content that has no renderable string form.
    #[error("unsupported content: {found}")]
    UnsupportedContent { found: String },

    /// A YAML definition failed to parse.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GroffError {
    pub(crate) fn index(kind: &'static str, index: usize, len: usize) -> Self {
        GroffError::IndexError { kind, index, len }
    }
}

impl From<serde_yaml::Error> for GroffError {
    fn from(err: serde_yaml::Error) -> Self {
        GroffError::Config(err.to_string())
    }
}

/// Result type for groff operations.
pub type Result<T> = std::result::Result<T, GroffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GroffError::index("row", 3, 2);
        assert_eq!(err.to_string(), "row index 3 out of range (len 2)");

        let err = GroffError::StructuralMismatch {
            row: 1,
            expected: 2,
            found: 3,
        };
        assert!(err.to_string().contains("row 1 has 3 cells"));
    }

    #[test]
    fn from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err: GroffError = yaml_err.into();
        assert!(matches!(err, GroffError::Config(_)));
    }
}
