//! A block of rows sharing one tbl preamble and column layout.
//!
//! Mutation is permissive: rows and columns can disagree while the section is
//! being built. [`ColumnSection::to_markup`] is the single place where the
//! layout is checked, and it either renders the whole section or fails.
//!
//! ```rust
//! use wikiman_groff::table::{ColumnOption, ColumnSection, ColumnSpecifier, TableOptions};
//! use wikiman_groff::Markup;
//!
//! let mut section = ColumnSection::with_options(TableOptions::new().center().tab('^'));
//! section
//!     .add_column(ColumnSpecifier::LEFT_ALIGNED, ColumnOption::BOLD)
//!     .add_column(ColumnSpecifier::RIGHT_ALIGNED, ColumnOption::empty())
//!     .add_row(["Name", "Age"]);
//!
//! assert_eq!(section.to_markup().unwrap(), "center tab(^);\nlb r.\nName^Age\n");
//! ```

use tracing::{debug, debug_span, trace};

use super::option::ColumnOption;
use super::row::{TableCell, TableRow};
use super::specifier::ColumnSpecifier;
use super::types::{Column, RuleStyle, TableOptions};
use crate::error::{GroffError, Result};
use crate::markup::Markup;
use crate::util::tbl_entry;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Entry {
    Row(TableRow),
    Rule(RuleStyle),
}

/// Rows sharing one set of [`TableOptions`] and one column layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSection {
    options: TableOptions,
    columns: Vec<Column>,
    entries: Vec<Entry>,
}

impl ColumnSection {
    /// An empty section with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty section with the given options.
    pub fn with_options(options: TableOptions) -> Self {
        ColumnSection {
            options,
            ..Self::default()
        }
    }

    /// The global options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Mutable access to the global options.
    pub fn options_mut(&mut self) -> &mut TableOptions {
        &mut self.options
    }

    /// The column layout.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column at `index`.
    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or_else(|| GroffError::index("column", index, self.columns.len()))
    }

    /// Appends a column layout entry.
    ///
    /// Existing rows are not padded; rows left short of the new column count
    /// are reported when the section is rendered.
    pub fn add_column(&mut self, specifier: ColumnSpecifier, options: ColumnOption) -> &mut Self {
        self.push_column(Column::new(specifier, options))
    }

    /// Appends a fully configured column.
    pub fn push_column(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Removes the layout entry at `index`.
    ///
    /// Row cells are left untouched: after removing a column from a section
    /// that already has rows, every row carries one cell too many until the
    /// caller deletes the matching cells (see [`TableRow::delete`]).
    pub fn remove_column(&mut self, index: usize) -> Result<Column> {
        if index >= self.columns.len() {
            return Err(GroffError::index("column", index, self.columns.len()));
        }
        Ok(self.columns.remove(index))
    }

    /// Number of rows, not counting rules.
    pub fn row_count(&self) -> usize {
        self.rows().count()
    }

    /// Whether the section has neither rows nor rules.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the rows in order, skipping rules.
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Row(row) => Some(row),
            Entry::Rule(_) => None,
        })
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> Result<&TableRow> {
        let len = self.row_count();
        self.rows()
            .nth(index)
            .ok_or_else(|| GroffError::index("row", index, len))
    }

    /// Mutable access to the row at `index`.
    pub fn row_mut(&mut self, index: usize) -> Result<&mut TableRow> {
        let len = self.row_count();
        self.entries
            .iter_mut()
            .filter_map(|entry| match entry {
                Entry::Row(row) => Some(row),
                Entry::Rule(_) => None,
            })
            .nth(index)
            .ok_or_else(|| GroffError::index("row", index, len))
    }

    /// Appends a row built from the given cells.
    ///
    /// The first row added to a section without columns seeds the layout with
    /// one left-aligned column per cell. Later rows are not checked here.
    pub fn add_row<I, C>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TableCell>,
    {
        let row: TableRow = cells.into_iter().collect();
        self.seed_columns(&row);
        self.entries.push(Entry::Row(row));
        self
    }

    /// Inserts a row before the row at `index`; `index == row_count()`
    /// appends.
    pub fn insert_row<I, C>(&mut self, index: usize, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<TableCell>,
    {
        let len = self.row_count();
        let position = if index == len {
            self.entries.len()
        } else if index < len {
            self.row_position(index)?
        } else {
            return Err(GroffError::index("row", index, len));
        };
        let row: TableRow = cells.into_iter().collect();
        self.seed_columns(&row);
        self.entries.insert(position, Entry::Row(row));
        Ok(())
    }

    /// Removes the row at `index`, shifting later rows up.
    pub fn remove_row(&mut self, index: usize) -> Result<TableRow> {
        let position = self.row_position(index)?;
        match self.entries.remove(position) {
            Entry::Row(row) => Ok(row),
            Entry::Rule(_) => Err(GroffError::index("row", index, self.row_count())),
        }
    }

    /// Appends a full-width horizontal rule after the current rows.
    pub fn add_rule(&mut self, style: RuleStyle) -> &mut Self {
        self.entries.push(Entry::Rule(style));
        self
    }

    /// Whether any column has a title.
    pub fn has_titles(&self) -> bool {
        self.columns.iter().any(|column| column.title.is_some())
    }

    /// Renders the format lines and data lines, without the preamble, using
    /// this section's own `tab`.
    pub fn render_body(&self) -> Result<String> {
        self.render_body_with(self.options.tab)
    }

    /// Renders the format lines and data lines, joining cells with `tab`.
    ///
    /// tbl reads the options line once per table, so a section following a
    /// `.T&` marker must be split on the first section's tab, not its own.
    pub fn render_body_with(&self, tab: char) -> Result<String> {
        let _span = debug_span!(
            "render_section",
            columns = self.columns.len(),
            rows = self.row_count()
        )
        .entered();

        self.validate(tab)?;

        let mut out = String::new();
        for line in self.format_lines()? {
            out.push_str(&line);
            out.push('\n');
        }
        for line in self.data_lines(tab) {
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    fn row_position(&self, index: usize) -> Result<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| matches!(entry, Entry::Row(_)))
            .map(|(position, _)| position)
            .nth(index)
            .ok_or_else(|| GroffError::index("row", index, self.row_count()))
    }

    fn seed_columns(&mut self, row: &TableRow) {
        if self.columns.is_empty() && !row.is_empty() {
            debug!(columns = row.len(), "seeding section layout from first row");
            self.columns = vec![Column::default(); row.len()];
        }
    }

    fn validate(&self, separator: char) -> Result<()> {
        if self.columns.is_empty() {
            return Err(GroffError::EmptyLayout);
        }
        let expected = self.columns.len();
        for (index, row) in self.rows().enumerate() {
            if row.len() != expected {
                return Err(GroffError::StructuralMismatch {
                    row: index,
                    expected,
                    found: row.len(),
                });
            }
        }

        let titles = self.columns.iter().filter_map(|c| c.title.clone());
        let cells = self.rows().flat_map(|row| row.iter().map(TableCell::text));
        for text in titles.chain(cells) {
            if text.contains(separator) {
                return Err(GroffError::SeparatorInCell { text, separator });
            }
        }
        Ok(())
    }

    /// One key per column, joined by spaces. Cells supply the overrides.
    fn format_line<I>(&self, overrides: I) -> Result<String>
    where
        I: IntoIterator<Item = (ColumnSpecifier, ColumnOption)>,
    {
        let keys = self
            .columns
            .iter()
            .zip(overrides)
            .map(|(column, (specifier, options))| column.key(specifier, options))
            .collect::<Result<Vec<_>>>()?;
        Ok(keys.join(" "))
    }

    /// A single format line when no cell overrides its column, otherwise one
    /// line per title/data row with identical trailing lines collapsed.
    fn format_lines(&self) -> Result<Vec<String>> {
        let plain = || std::iter::repeat((ColumnSpecifier::default(), ColumnOption::empty()));

        let mut lines = Vec::new();
        if self.rows().any(TableRow::has_override) {
            if self.has_titles() {
                lines.push(self.format_line(plain())?);
            }
            for row in self.rows() {
                let overrides = row
                    .iter()
                    .map(|cell| (cell.specifier_override(), cell.options_override()));
                lines.push(self.format_line(overrides)?);
            }
            while lines.len() > 1 && lines[lines.len() - 1] == lines[lines.len() - 2] {
                lines.pop();
            }
        } else {
            lines.push(self.format_line(plain())?);
        }

        if let Some(last) = lines.last_mut() {
            last.push('.');
        }
        Ok(lines)
    }

    fn data_lines(&self, tab: char) -> Vec<String> {
        let separator = tab.to_string();
        let mut lines = Vec::new();

        if self.has_titles() {
            let titles: Vec<String> = self
                .columns
                .iter()
                .map(|column| tbl_entry(column.title.as_deref().unwrap_or_default()))
                .collect();
            lines.push(titles.join(&separator));
        }

        for (index, entry) in self.entries.iter().enumerate() {
            match entry {
                Entry::Row(row) => {
                    trace!(entry = index, cells = row.len(), "emitting row");
                    let cells: Vec<String> =
                        row.iter().map(|cell| tbl_entry(&cell.text())).collect();
                    lines.push(cells.join(&separator));
                }
                Entry::Rule(style) => lines.push(style.line().to_string()),
            }
        }

        lines
    }
}

impl Markup for ColumnSection {
    /// Renders the preamble line, the format line(s) and every data line.
    fn to_markup(&self) -> Result<String> {
        self.options.validate()?;
        let body = self.render_body()?;
        Ok(format!("{}\n{}", self.options.preamble_line(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyledText;

    fn name_age() -> ColumnSection {
        let mut section = ColumnSection::with_options(TableOptions::new().center().tab('^'));
        section
            .add_column(ColumnSpecifier::LEFT_ALIGNED, ColumnOption::BOLD)
            .add_column(ColumnSpecifier::RIGHT_ALIGNED, ColumnOption::empty())
            .add_row(["Name", "Age"]);
        section
    }

    #[test]
    fn renders_preamble_format_and_rows() {
        let out = name_age().to_markup().unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["center tab(^);", "lb r.", "Name^Age"]);
    }

    #[test]
    fn bold_right_column_renders_rb() {
        let mut section = ColumnSection::with_options(TableOptions::new().tab('^'));
        section
            .add_column(ColumnSpecifier::LEFT_ALIGNED, ColumnOption::BOLD)
            .add_column(ColumnSpecifier::RIGHT_ALIGNED, ColumnOption::BOLD)
            .add_row(["Name", "Age"]);
        let out = section.render_body().unwrap();
        assert_eq!(out, "lb rb.\nName^Age\n");
    }

    #[test]
    fn first_row_seeds_columns() {
        let mut section = ColumnSection::new();
        section.add_row(["a", "b", "c"]);
        assert_eq!(section.columns().len(), 3);
        assert_eq!(section.render_body().unwrap(), "l l l.\na\tb\tc\n");
    }

    #[test]
    fn mismatched_row_fails_at_render() {
        let mut section = name_age();
        section.add_row(["only one"]);
        assert_eq!(
            section.to_markup().unwrap_err(),
            GroffError::StructuralMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn add_column_does_not_pad_rows() {
        let mut section = name_age();
        section.add_column(ColumnSpecifier::CENTER, ColumnOption::empty());
        assert_eq!(section.row(0).unwrap().len(), 2);
        assert!(matches!(
            section.to_markup(),
            Err(GroffError::StructuralMismatch { expected: 3, .. })
        ));
    }

    #[test]
    fn remove_column_leaves_cells() {
        let mut section = name_age();
        let removed = section.remove_column(1).unwrap();
        assert_eq!(removed.specifier, ColumnSpecifier::RIGHT_ALIGNED);
        assert_eq!(section.row(0).unwrap().len(), 2);
        assert!(section.to_markup().is_err());

        section.row_mut(0).unwrap().delete(1).unwrap();
        assert_eq!(section.render_body().unwrap(), "lb.\nName\n");
        assert!(section.remove_column(5).is_err());
    }

    #[test]
    fn empty_layout_is_an_error() {
        assert_eq!(
            ColumnSection::new().to_markup().unwrap_err(),
            GroffError::EmptyLayout
        );
    }

    #[test]
    fn remove_row_shifts_later_rows() {
        let mut section = ColumnSection::new();
        section.add_row(["r0"]).add_row(["r1"]).add_row(["r2"]);
        let removed = section.remove_row(1).unwrap();
        assert_eq!(removed.get(0).unwrap().text(), "r1");
        assert_eq!(section.row(1).unwrap().get(0).unwrap().text(), "r2");
        assert!(matches!(
            section.row(2),
            Err(GroffError::IndexError { kind: "row", index: 2, len: 2 })
        ));
        assert!(section.remove_row(2).is_err());
    }

    #[test]
    fn insert_row_positions() {
        let mut section = ColumnSection::new();
        section.add_row(["b"]);
        section.insert_row(0, ["a"]).unwrap();
        section.insert_row(2, ["c"]).unwrap();
        assert!(section.insert_row(4, ["x"]).is_err());
        let firsts: Vec<String> = section
            .rows()
            .map(|row| row.get(0).unwrap().text())
            .collect();
        assert_eq!(firsts, vec!["a", "b", "c"]);
    }

    #[test]
    fn rules_are_not_rows() {
        let mut section = ColumnSection::new();
        section
            .add_row(["h1", "h2"])
            .add_rule(RuleStyle::Double)
            .add_row(["x", "y"]);
        assert_eq!(section.row_count(), 2);
        assert_eq!(section.row(1).unwrap().get(0).unwrap().text(), "x");
        assert_eq!(
            section.render_body().unwrap(),
            "l l.\nh1\th2\n=\nx\ty\n"
        );
        section.remove_row(1).unwrap();
        assert_eq!(section.render_body().unwrap(), "l l.\nh1\th2\n=\n");
    }

    #[test]
    fn titles_render_first() {
        let mut section = ColumnSection::new();
        section
            .push_column(Column::default().title("Name"))
            .push_column(Column::new(ColumnSpecifier::NUMBER_ALIGNED, ColumnOption::empty()))
            .add_row(["pi", "3.14"]);
        assert!(section.has_titles());
        assert_eq!(section.render_body().unwrap(), "l n.\nName\t\npi\t3.14\n");
    }

    #[test]
    fn cell_overrides_emit_per_row_format_lines() {
        let mut section = ColumnSection::new();
        section
            .add_column(ColumnSpecifier::CENTER, ColumnOption::empty())
            .add_column(ColumnSpecifier::LEFT_ALIGNED, ColumnOption::empty())
            .add_row([
                TableCell::from("Spanning title"),
                TableCell::new().specifier(ColumnSpecifier::HORIZONTAL_SPAN),
            ])
            .add_row(["a", "b"])
            .add_row(["c", "d"]);
        assert_eq!(
            section.render_body().unwrap(),
            "c s\nc l.\nSpanning title\t\na\tb\nc\td\n"
        );
    }

    #[test]
    fn cell_option_override_unions() {
        let mut section = ColumnSection::new();
        section
            .add_column(ColumnSpecifier::LEFT_ALIGNED, ColumnOption::BOLD)
            .add_row([TableCell::from("x").options(ColumnOption::ITALIC)]);
        assert_eq!(section.render_body().unwrap(), "lbi.\nx\n");
    }

    #[test]
    fn bare_modifier_column_is_invalid() {
        let mut section = ColumnSection::new();
        section
            .add_column(ColumnSpecifier::VERTICAL_SPAN, ColumnOption::empty())
            .add_row(["x"]);
        assert!(matches!(
            section.render_body(),
            Err(GroffError::InvalidSpecifier { .. })
        ));
    }

    #[test]
    fn separator_inside_cell_is_rejected() {
        let mut section = ColumnSection::with_options(TableOptions::new().tab('|'));
        section.add_row(["a|b"]);
        assert_eq!(
            section.to_markup().unwrap_err(),
            GroffError::SeparatorInCell {
                text: "a|b".to_string(),
                separator: '|'
            }
        );
    }

    #[test]
    fn body_uses_the_given_tab() {
        let mut section = ColumnSection::with_options(TableOptions::new().tab('|'));
        section.add_row(["a^b", "c"]);
        assert_eq!(section.render_body().unwrap(), "l l.\na^b|c\n");
        assert_eq!(
            section.render_body_with('^').unwrap_err(),
            GroffError::SeparatorInCell {
                text: "a^b".to_string(),
                separator: '^'
            }
        );

        section.row_mut(0).unwrap().set(0, "ab").unwrap();
        assert_eq!(section.render_body_with('^').unwrap(), "l l.\nab^c\n");
    }

    #[test]
    fn preamble_rejects_bad_delim() {
        let mut section = ColumnSection::with_options(TableOptions::new().delim("$"));
        section.add_row(["x"]);
        assert_eq!(
            section.to_markup().unwrap_err(),
            GroffError::InvalidDelimiter {
                delim: "$".to_string()
            }
        );
        assert!(section.render_body().is_ok());
    }

    #[test]
    fn styled_cells_are_escaped_inline() {
        let mut section = ColumnSection::new();
        section.add_row([
            TableCell::from(StyledText::coloured("red", "X")),
            TableCell::from("."),
        ]);
        assert_eq!(
            section.render_body().unwrap(),
            "l l.\n\\m[red]X\\m[]\t\\&.\n"
        );
    }
}
