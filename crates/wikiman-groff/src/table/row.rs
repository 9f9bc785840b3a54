//! Table cells and rows.
//!
//! Rows do not know their section's column count. Any arity problem is
//! reported when the owning section is rendered.

use serde_json::Value;

use super::option::ColumnOption;
use super::specifier::ColumnSpecifier;
use crate::error::{GroffError, Result};
use crate::markup::Markup;
use crate::style::StyledText;

/// One table entry: inline text fragments plus optional layout overrides.
///
/// The overrides are combined with the column's own layout when the format
/// line for this cell's row is built: the specifier as the right operand of
/// [`ColumnSpecifier::combine`], the options by union.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableCell {
    content: Vec<StyledText>,
    specifier: ColumnSpecifier,
    options: ColumnOption,
}

impl TableCell {
    /// An empty cell with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell holding the given fragments.
    pub fn from_fragments<I, T>(fragments: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StyledText>,
    {
        TableCell {
            content: fragments.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Builds a cell from a JSON value, see
    /// [`StyledText::fragments_from_value`].
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(TableCell {
            content: StyledText::fragments_from_value(value)?,
            ..Self::default()
        })
    }

    /// Append a fragment.
    pub fn push(mut self, fragment: impl Into<StyledText>) -> Self {
        self.content.push(fragment.into());
        self
    }

    /// Set the specifier override, e.g. [`ColumnSpecifier::HORIZONTAL_SPAN`].
    pub fn specifier(mut self, specifier: ColumnSpecifier) -> Self {
        self.specifier = specifier;
        self
    }

    /// Set the option override.
    pub fn options(mut self, options: ColumnOption) -> Self {
        self.options = options;
        self
    }

    /// The text fragments.
    pub fn content(&self) -> &[StyledText] {
        &self.content
    }

    /// The specifier override.
    pub fn specifier_override(&self) -> ColumnSpecifier {
        self.specifier
    }

    /// The option override.
    pub fn options_override(&self) -> ColumnOption {
        self.options
    }

    /// Whether this cell changes its column's layout.
    pub fn has_override(&self) -> bool {
        !self.specifier.is_empty() || !self.options.is_empty()
    }

    /// The concatenated rendering of every fragment.
    pub fn text(&self) -> String {
        self.content.iter().map(StyledText::text).collect()
    }
}

impl Markup for TableCell {
    fn to_markup(&self) -> Result<String> {
        Ok(self.text())
    }
}

impl From<&str> for TableCell {
    fn from(text: &str) -> Self {
        TableCell::from_fragments([text])
    }
}

impl From<String> for TableCell {
    fn from(text: String) -> Self {
        TableCell::from_fragments([text])
    }
}

impl From<StyledText> for TableCell {
    fn from(text: StyledText) -> Self {
        TableCell::from_fragments([text])
    }
}

/// An ordered, position-addressable list of cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<TableCell>,
}

impl TableRow {
    /// An empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in order.
    pub fn cells(&self) -> &[TableCell] {
        &self.cells
    }

    /// Iterate over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, TableCell> {
        self.cells.iter()
    }

    /// The cell at `index`.
    pub fn get(&self, index: usize) -> Result<&TableCell> {
        let len = self.cells.len();
        self.cells
            .get(index)
            .ok_or_else(|| GroffError::index("cell", index, len))
    }

    /// Mutable access to the cell at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut TableCell> {
        let len = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or_else(|| GroffError::index("cell", index, len))
    }

    /// Replaces the cell at `index`, returning the old one.
    ///
    /// Never extends the row; use [`push`](Self::push) or
    /// [`insert`](Self::insert) for that.
    pub fn set(&mut self, index: usize, cell: impl Into<TableCell>) -> Result<TableCell> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, cell.into()))
    }

    /// Removes the cell at `index`, shifting later cells left.
    pub fn delete(&mut self, index: usize) -> Result<TableCell> {
        if index >= self.cells.len() {
            return Err(GroffError::index("cell", index, self.cells.len()));
        }
        Ok(self.cells.remove(index))
    }

    /// Inserts a cell before `index`. `index == len()` appends.
    pub fn insert(&mut self, index: usize, cell: impl Into<TableCell>) -> Result<()> {
        if index > self.cells.len() {
            return Err(GroffError::index("cell", index, self.cells.len()));
        }
        self.cells.insert(index, cell.into());
        Ok(())
    }

    /// Appends a cell.
    pub fn push(&mut self, cell: impl Into<TableCell>) {
        self.cells.push(cell.into());
    }

    /// Whether any cell overrides its column's layout.
    pub fn has_override(&self) -> bool {
        self.cells.iter().any(TableCell::has_override)
    }
}

impl<C: Into<TableCell>> FromIterator<C> for TableRow {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        TableRow {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TableRow {
    type Item = &'a TableCell;
    type IntoIter = std::slice::Iter<'a, TableCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
