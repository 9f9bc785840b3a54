//! Block-level ms-macro entities that surround tables in a document.
//!
//! Each renders to a self-contained markup fragment ending in a newline, ready
//! to be concatenated with other fragments.

mod header;
mod paragraph;

pub use header::{GroffHeader, HeaderLevel, HeaderOptions, FORMATTER_DEFAULT};
pub use paragraph::{GroffLinebreak, GroffParagraph};
