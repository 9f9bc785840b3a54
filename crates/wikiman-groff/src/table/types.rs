//! Configuration types for tbl tables: global options and column layout.

use serde::{Deserialize, Serialize};

use super::option::ColumnOption;
use super::specifier::ColumnSpecifier;
use crate::error::{GroffError, Result};

/// Border drawn around a table, resolved from the option flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxStyle {
    /// No border.
    #[default]
    None,
    /// Single box around the table (`box`).
    Box,
    /// Box around the table and every cell (`allbox`).
    AllBox,
    /// Double box around the table (`doublebox`).
    DoubleBox,
}

impl BoxStyle {
    /// The preamble keyword, if any.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            BoxStyle::None => None,
            BoxStyle::Box => Some("box"),
            BoxStyle::AllBox => Some("allbox"),
            BoxStyle::DoubleBox => Some("doublebox"),
        }
    }
}

/// Global options written to a table's preamble line.
///
/// The box flags are independent booleans so they can be loaded from
/// configuration as written; [`box_style`](Self::box_style) resolves them,
/// with `allbox` beating `doublebox` beating `box`.
///
/// # Example
///
/// ```rust
/// use wikiman_groff::table::TableOptions;
///
/// let options = TableOptions::new().center().tab('^');
/// assert_eq!(options.preamble_line(), "center tab(^);");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Centre the table on the page.
    pub center: bool,
    /// Expand the table to the full line length.
    pub expand: bool,
    /// Draw a box around the table.
    #[serde(rename = "box")]
    pub boxed: bool,
    /// Draw a box around every cell.
    pub allbox: bool,
    /// Draw a double box around the table.
    pub doublebox: bool,
    /// Cell separator used in data lines.
    pub tab: char,
    /// Rule thickness in points.
    pub linesize: Option<u32>,
    /// Equation delimiters passed to eqn, e.g. `"$$"`.
    pub delim: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            center: false,
            expand: false,
            boxed: false,
            allbox: false,
            doublebox: false,
            tab: '\t',
            linesize: None,
            delim: None,
        }
    }
}

impl TableOptions {
    /// Default options: no keywords besides `tab`, which is the TAB character.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from YAML. Missing keys keep their defaults.
    ///
    /// ```rust
    /// use wikiman_groff::table::{BoxStyle, TableOptions};
    ///
    /// let options = TableOptions::from_yaml("center: true\nallbox: true\ntab: '|'").unwrap();
    /// assert!(options.center);
    /// assert_eq!(options.box_style(), BoxStyle::AllBox);
    /// assert_eq!(options.tab, '|');
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Enable `center`.
    pub fn center(mut self) -> Self {
        self.center = true;
        self
    }

    /// Enable `expand`.
    pub fn expand(mut self) -> Self {
        self.expand = true;
        self
    }

    /// Enable `box`.
    pub fn boxed(mut self) -> Self {
        self.boxed = true;
        self
    }

    /// Enable `allbox`.
    pub fn allbox(mut self) -> Self {
        self.allbox = true;
        self
    }

    /// Enable `doublebox`.
    pub fn doublebox(mut self) -> Self {
        self.doublebox = true;
        self
    }

    /// Set the cell separator.
    pub fn tab(mut self, tab: char) -> Self {
        self.tab = tab;
        self
    }

    /// Set the rule thickness.
    pub fn linesize(mut self, points: u32) -> Self {
        self.linesize = Some(points);
        self
    }

    /// Set the eqn delimiters: exactly two characters, opening then closing
    /// (e.g. `"$$"`). Anything else fails with
    /// [`GroffError::InvalidDelimiter`](crate::GroffError::InvalidDelimiter)
    /// when the preamble is rendered.
    pub fn delim(mut self, delim: impl Into<String>) -> Self {
        self.delim = Some(delim.into());
        self
    }

    /// Resolves the box flags to a single style.
    pub fn box_style(&self) -> BoxStyle {
        if self.allbox {
            BoxStyle::AllBox
        } else if self.doublebox {
            BoxStyle::DoubleBox
        } else if self.boxed {
            BoxStyle::Box
        } else {
            BoxStyle::None
        }
    }

    /// Checks the options tbl would reject in the preamble.
    pub fn validate(&self) -> Result<()> {
        match &self.delim {
            Some(delim) if delim.chars().count() != 2 => Err(GroffError::InvalidDelimiter {
                delim: delim.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// The preamble line, terminated with `;`.
    pub fn preamble_line(&self) -> String {
        let mut keywords: Vec<String> = Vec::new();
        if self.center {
            keywords.push("center".to_string());
        }
        if self.expand {
            keywords.push("expand".to_string());
        }
        if let Some(keyword) = self.box_style().keyword() {
            keywords.push(keyword.to_string());
        }
        keywords.push(format!("tab({})", self.tab));
        if let Some(points) = self.linesize {
            keywords.push(format!("linesize({})", points));
        }
        if let Some(delim) = &self.delim {
            keywords.push(format!("delim({})", delim));
        }
        format!("{};", keywords.join(" "))
    }
}

/// Layout of one column: its key letter, presentation flags and extras.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Alignment and spanning.
    #[serde(rename = "spec")]
    pub specifier: ColumnSpecifier,
    /// Presentation flags.
    #[serde(default)]
    pub options: ColumnOption,
    /// Minimum width, in troff units (e.g. `"1.5i"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Title shown in the section's title line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for Column {
    fn default() -> Self {
        Column::new(ColumnSpecifier::LEFT_ALIGNED, ColumnOption::empty())
    }
}

impl Column {
    /// Create a column with the given specifier and options.
    pub fn new(specifier: ColumnSpecifier, options: ColumnOption) -> Self {
        Column {
            specifier,
            options,
            width: None,
            title: None,
        }
    }

    /// Set the minimum width.
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The column key for a line whose cell carries the given overrides.
    ///
    /// The column's specifier is the left operand, so the cell can add span
    /// modifiers but never change the alignment.
    pub fn key(&self, specifier: ColumnSpecifier, options: ColumnOption) -> Result<String> {
        let resolved = self.specifier.combine(specifier)?;
        let mut key: String = resolved.code().into_iter().collect();
        key.push_str(&self.options.combine(options).codes());
        if let Some(width) = &self.width {
            key.push_str(&format!("w({})", width));
        }
        Ok(key)
    }
}

/// A full-width horizontal rule between rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStyle {
    /// Single rule (`_`).
    Single,
    /// Double rule (`=`).
    Double,
}

impl RuleStyle {
    /// The data line that draws this rule.
    pub fn line(&self) -> &'static str {
        match self {
            RuleStyle::Single => "_",
            RuleStyle::Double => "=",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preamble_only_has_tab() {
        assert_eq!(TableOptions::default().preamble_line(), "tab(\t);");
    }

    #[test]
    fn preamble_keyword_order() {
        let options = TableOptions::new()
            .center()
            .expand()
            .boxed()
            .tab('^')
            .linesize(2)
            .delim("$$");
        assert_eq!(
            options.preamble_line(),
            "center expand box tab(^) linesize(2) delim($$);"
        );
    }

    #[test]
    fn delim_needs_two_characters() {
        assert!(TableOptions::new().validate().is_ok());
        assert!(TableOptions::new().delim("$$").validate().is_ok());
        for delim in ["$", "", "$$$"] {
            assert_eq!(
                TableOptions::new().delim(delim).validate(),
                Err(GroffError::InvalidDelimiter {
                    delim: delim.to_string()
                })
            );
        }
    }

    #[test]
    fn box_precedence() {
        assert_eq!(TableOptions::new().box_style(), BoxStyle::None);
        assert_eq!(TableOptions::new().boxed().box_style(), BoxStyle::Box);
        assert_eq!(
            TableOptions::new().boxed().doublebox().box_style(),
            BoxStyle::DoubleBox
        );
        assert_eq!(
            TableOptions::new().boxed().doublebox().allbox().box_style(),
            BoxStyle::AllBox
        );
        let line = TableOptions::new().boxed().allbox().preamble_line();
        assert_eq!(line, "allbox tab(\t);");
    }

    #[test]
    fn options_from_yaml() {
        let options = TableOptions::from_yaml(
            r#"
            box: true
            tab: "^"
            linesize: 3
            "#,
        )
        .unwrap();
        assert!(options.boxed);
        assert_eq!(options.tab, '^');
        assert_eq!(options.linesize, Some(3));
        assert_eq!(options.delim, None);
    }

    #[test]
    fn options_from_empty_yaml() {
        assert_eq!(TableOptions::from_yaml("  ").unwrap(), TableOptions::default());
    }

    #[test]
    fn options_reject_unknown_keys() {
        assert!(TableOptions::from_yaml("centre: true").is_err());
    }

    #[test]
    fn column_key() {
        let column = Column::new(ColumnSpecifier::LEFT_ALIGNED, ColumnOption::BOLD);
        assert_eq!(
            column
                .key(ColumnSpecifier::default(), ColumnOption::empty())
                .unwrap(),
            "lb"
        );
        assert_eq!(
            column
                .key(ColumnSpecifier::HORIZONTAL_SPAN, ColumnOption::ITALIC)
                .unwrap(),
            "sbi"
        );

        let sized = Column::new(ColumnSpecifier::NUMBER_ALIGNED, ColumnOption::empty()).width("1i");
        assert_eq!(
            sized
                .key(ColumnSpecifier::default(), ColumnOption::empty())
                .unwrap(),
            "nw(1i)"
        );
    }

    #[test]
    fn column_key_requires_alignment() {
        let column = Column::new(ColumnSpecifier::VERTICAL_SPAN, ColumnOption::empty());
        assert!(column
            .key(ColumnSpecifier::default(), ColumnOption::empty())
            .is_err());
    }
}
