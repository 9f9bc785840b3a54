//! Declarative table definitions loaded from YAML.
//!
//! ```yaml
//! sections:
//!   - options: { center: true, allbox: true, tab: "^" }
//!     columns:
//!       - { spec: c, options: b, title: Package }
//!       - { spec: n, width: 1i, title: Version }
//!     rows:
//!       - [serde, "1.0"]
//!       - rule: single
//!       - [{ text: tbl, colour: red }, "2"]
//!       - [{ text: wide, spec: c }, { spec: s }]
//! ```
//!
//! A cell is a string, number or boolean, a `{text, colour}` mapping, or a
//! list of those. A mapping may also carry `spec` and `options` overrides for
//! its row's format line; a mapping with only overrides is an empty cell.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{GroffError, Result};
use crate::table::{
    Column, ColumnOption, ColumnSection, ColumnSpecifier, RuleStyle, Table, TableCell,
    TableOptions,
};

/// Root of a YAML table definition.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    #[serde(default)]
    pub sections: Vec<SectionDef>,
}

/// One section of a [`TableDef`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionDef {
    #[serde(default)]
    pub options: TableOptions,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<RowDef>,
}

/// A data row or a horizontal rule.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RowDef {
    /// A list of cells.
    Cells(Vec<Value>),
    /// `{ rule: single }` or `{ rule: double }`
    Rule { rule: RuleStyle },
}

impl TryFrom<TableDef> for Table {
    type Error = GroffError;

    fn try_from(def: TableDef) -> Result<Table> {
        let mut table = Table::new();
        for section in def.sections {
            table.add_section(ColumnSection::try_from(section)?);
        }
        Ok(table)
    }
}

impl TryFrom<SectionDef> for ColumnSection {
    type Error = GroffError;

    fn try_from(def: SectionDef) -> Result<ColumnSection> {
        let mut section = ColumnSection::with_options(def.options);
        for column in def.columns {
            section.push_column(column);
        }
        for row in def.rows {
            match row {
                RowDef::Cells(values) => {
                    let cells = values.iter().map(cell_from_value).collect::<Result<Vec<_>>>()?;
                    section.add_row(cells);
                }
                RowDef::Rule { rule } => {
                    section.add_rule(rule);
                }
            }
        }
        Ok(section)
    }
}

impl Table {
    /// Loads a table from a YAML definition.
    ///
    /// ```rust
    /// use wikiman_groff::{Markup, Table};
    ///
    /// let table = Table::from_yaml(r#"
    /// sections:
    ///   - rows:
    ///       - [a, b]
    /// "#).unwrap();
    /// assert_eq!(table.to_markup().unwrap(), ".TS\ntab(\t);\nl l.\na\tb\n.TE\n");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Table> {
        if yaml.trim().is_empty() {
            return Ok(Table::new());
        }
        let def: TableDef = serde_yaml::from_str(yaml)?;
        Table::try_from(def)
    }
}

fn cell_from_value(value: &Value) -> Result<TableCell> {
    let Value::Object(map) = value else {
        return TableCell::from_value(value);
    };

    let mut content: Map<String, Value> = map.clone();
    let specifier = match content.remove("spec") {
        Some(code) => parse_code::<ColumnSpecifier>(&code)?,
        None => ColumnSpecifier::default(),
    };
    let options = match content.remove("options") {
        Some(code) => parse_code::<ColumnOption>(&code)?,
        None => ColumnOption::empty(),
    };

    let cell = if content.is_empty() {
        TableCell::new()
    } else {
        TableCell::from_value(&Value::Object(content))?
    };
    Ok(cell.specifier(specifier).options(options))
}

fn parse_code<T>(value: &Value) -> Result<T>
where
    T: std::str::FromStr<Err = GroffError>,
{
    match value {
        Value::String(code) => code.parse(),
        other => Err(GroffError::Config(format!(
            "expected a key-letter string, got {}",
            other
        ))),
    }
}
