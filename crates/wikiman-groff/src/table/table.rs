//! The top-level tbl table.

use tracing::{debug_span, warn};

use super::row::TableCell;
use super::section::ColumnSection;
use super::types::Column;
use crate::error::{GroffError, Result};
use crate::markup::Markup;

/// Opens a table.
pub const TABLE_START: &str = ".TS";
/// Closes a table.
pub const TABLE_END: &str = ".TE";
/// Starts a new format section inside an open table.
pub const TABLE_CONTINUE: &str = ".T&";

/// An ordered, append-only list of [`ColumnSection`]s rendered as one tbl
/// table.
///
/// The first section contributes the preamble line. Each later section starts
/// with `.T&` and only supplies new format lines; tbl reads the options line
/// once per table, so options set on later sections have no effect. Their
/// cells are joined with the first section's `tab`.
///
/// # Example
///
/// ```rust
/// use wikiman_groff::table::Table;
/// use wikiman_groff::Markup;
///
/// let mut table = Table::new();
/// assert_eq!(table.to_markup().unwrap(), "");
///
/// table.add_row(["a", "b"]);
/// assert_eq!(table.to_markup().unwrap(), ".TS\ntab(\t);\nl l.\na\tb\n.TE\n");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    sections: Vec<ColumnSection>,
}

impl Table {
    /// An empty table. It renders to the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section.
    pub fn add_section(&mut self, section: ColumnSection) -> &mut Self {
        self.sections.push(section);
        self
    }

    /// The sections in order.
    pub fn sections(&self) -> &[ColumnSection] {
        &self.sections
    }

    /// The section at `index`.
    pub fn section(&self, index: usize) -> Result<&ColumnSection> {
        self.sections
            .get(index)
            .ok_or_else(|| GroffError::index("section", index, self.sections.len()))
    }

    /// Mutable access to the section at `index`.
    pub fn section_mut(&mut self, index: usize) -> Result<&mut ColumnSection> {
        let len = self.sections.len();
        self.sections
            .get_mut(index)
            .ok_or_else(|| GroffError::index("section", index, len))
    }

    /// Whether the table has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Appends a row to the last section, creating one if needed.
    pub fn add_row<I, C>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TableCell>,
    {
        self.last_section().add_row(cells);
        self
    }

    /// Appends a left-aligned column to the last section, creating one if
    /// needed.
    pub fn add_column(&mut self, title: Option<&str>, width: Option<&str>) -> &mut Self {
        let mut column = Column::default();
        column.title = title.map(str::to_string);
        column.width = width.map(str::to_string);
        self.last_section().push_column(column);
        self
    }

    fn last_section(&mut self) -> &mut ColumnSection {
        if self.sections.is_empty() {
            self.sections.push(ColumnSection::new());
        }
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }
}

impl Markup for Table {
    fn to_markup(&self) -> Result<String> {
        let Some((first, rest)) = self.sections.split_first() else {
            return Ok(String::new());
        };

        let _span = debug_span!("render_table", sections = self.sections.len()).entered();

        let tab = first.options().tab;
        let mut out = format!("{}\n", TABLE_START);
        out.push_str(&first.to_markup()?);
        for (index, section) in rest.iter().enumerate() {
            if section.options() != first.options() {
                warn!(
                    section = index + 1,
                    "continuation section options are ignored by tbl"
                );
            }
            out.push_str(TABLE_CONTINUE);
            out.push('\n');
            out.push_str(&section.render_body_with(tab)?);
        }
        out.push_str(TABLE_END);
        out.push('\n');
        Ok(out)
    }
}
