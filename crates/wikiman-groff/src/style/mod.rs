//! Inline text with optional colour.
//!
//! Colour is expressed with groff's `\m[name]` escape, which switches the
//! drawing colour until `\m[]` restores the previous one.

mod text;

pub use text::StyledText;
