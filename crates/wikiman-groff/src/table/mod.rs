//! tbl tables: column algebra, data model and serialization.
//!
//! A [`Table`] owns [`ColumnSection`]s, which own [`TableRow`]s, which own
//! [`TableCell`]s. Nothing is shared and nothing points back up the tree.
//!
//! Each column is described by a [`ColumnSpecifier`] (alignment and spanning)
//! and a [`ColumnOption`] set (font and sizing flags). Together they render to
//! the column's key in the section's format line:
//!
//! | Specifier | Key | | Option | Key |
//! |-----------|-----|-|--------|-----|
//! | `RELATIVE_CENTER` | `a` | | `BOLD` | `b` |
//! | `CENTER` | `c` | | `ITALIC` | `i` |
//! | `LEFT_ALIGNED` | `l` | | `VERTICAL_SPAN_START_TOP` | `t` |
//! | `RIGHT_ALIGNED` | `r` | | `VERTICAL_SPAN_START_BOTTOM` | `d` |
//! | `NUMBER_ALIGNED` | `n` | | `UP_HALF_LINE` | `u` |
//! | `HORIZONTAL_SPAN` | `s` | | `EXPAND_COLUMN` | `x` |
//! | `VERTICAL_SPAN` | `^` | | `IGNORE_COLUMN` | `z` |

mod option;
mod row;
mod section;
mod specifier;
#[allow(clippy::module_inception)]
mod table;
mod types;

pub use option::ColumnOption;
pub use row::{TableCell, TableRow};
pub use section::ColumnSection;
pub use specifier::{Alignment, ColumnSpecifier, SpanModifiers};
pub use table::{Table, TABLE_CONTINUE, TABLE_END, TABLE_START};
pub use types::{BoxStyle, Column, RuleStyle, TableOptions};
