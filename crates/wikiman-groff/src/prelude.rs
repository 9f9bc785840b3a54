//! Convenient imports for building documents.
//!
//! ```rust
//! use wikiman_groff::prelude::*;
//!
//! let mut table = Table::new();
//! table.add_row(["a"]);
//! let out = concat([
//!     Box::new(GroffHeader::new("Data", HeaderLevel::Medium)) as Box<dyn Markup>,
//!     Box::new(table),
//! ])
//! .unwrap();
//! assert!(out.starts_with(".SH 2\nData\n.TS\n"));
//! ```

pub use crate::document::{GroffHeader, GroffLinebreak, GroffParagraph, HeaderLevel, HeaderOptions};
pub use crate::error::GroffError;
pub use crate::markup::{concat, Markup};
pub use crate::style::StyledText;
pub use crate::table::{
    Alignment, Column, ColumnOption, ColumnSection, ColumnSpecifier, RuleStyle, SpanModifiers,
    Table, TableCell, TableOptions, TableRow,
};
