//! # wikiman-groff - typed groff/tbl document structures
//!
//! `wikiman-groff` models the pieces of a groff document that wikiman
//! generates (headers, paragraphs, coloured inline text and, above all, `tbl`
//! tables) and renders each of them to a troff markup fragment. Assembling the
//! fragments into a file is left to the caller.
//!
//! ## Core Concepts
//!
//! - [`StyledText`]: inline text, optionally coloured with `\m[name]...\m[]`
//! - [`Table`]: a `.TS`/`.TE` table made of [`ColumnSection`]s
//! - [`ColumnSpecifier`] / [`ColumnOption`]: the per-column key algebra
//! - [`GroffHeader`], [`GroffParagraph`], [`GroffLinebreak`]: ms-macro blocks
//! - [`Markup`]: the `to_markup` contract every entity implements
//!
//! ## Quick Start
//!
//! ```rust
//! use wikiman_groff::table::{ColumnOption, ColumnSection, ColumnSpecifier, TableOptions};
//! use wikiman_groff::{Markup, StyledText, Table, TableCell};
//!
//! let mut section = ColumnSection::with_options(TableOptions::new().center().tab('^'));
//! section
//!     .add_column(ColumnSpecifier::LEFT_ALIGNED, ColumnOption::BOLD)
//!     .add_column(ColumnSpecifier::RIGHT_ALIGNED, ColumnOption::empty())
//!     .add_row(["Name", "Age"])
//!     .add_row([
//!         TableCell::from(StyledText::coloured("red", "Ada")),
//!         TableCell::from("36"),
//!     ]);
//!
//! let mut table = Table::new();
//! table.add_section(section);
//!
//! assert_eq!(
//!     table.to_markup().unwrap(),
//!     ".TS\ncenter tab(^);\nlb r.\nName^Age\n\\m[red]Ada\\m[]^36\n.TE\n"
//! );
//! ```
//!
//! ## Deferred validation
//!
//! Adding or removing rows and columns always succeeds. Rendering checks that
//! every row has exactly as many cells as the section has columns and fails
//! with [`GroffError::StructuralMismatch`] otherwise. A render either produces
//! the complete table or nothing.
//!
//! ## YAML definitions
//!
//! Tables and table options can also be loaded from YAML, see [`config`].
//!
//! ## Logging
//!
//! Rendering emits `tracing` spans and events (`render_table`,
//! `render_section`, per-row traces). The crate never installs a subscriber.

pub mod config;
pub mod document;
mod error;
mod markup;
pub mod prelude;
pub mod style;
pub mod table;
mod util;

pub use error::{GroffError, Result};
pub use markup::{concat, Markup};

pub use document::{
    GroffHeader, GroffLinebreak, GroffParagraph, HeaderLevel, HeaderOptions, FORMATTER_DEFAULT,
};
pub use style::StyledText;
pub use table::{
    ColumnOption, ColumnSection, ColumnSpecifier, Table, TableCell, TableOptions, TableRow,
};
