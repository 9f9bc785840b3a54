//! The [`StyledText`] leaf value.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GroffError, Result};
use crate::markup::Markup;

/// A run of inline text, optionally drawn in a named groff colour.
///
/// The text is emitted as-is. Callers are responsible for keeping troff
/// control sequences out of `raw_text`.
///
/// # Example
///
/// ```rust
/// use wikiman_groff::StyledText;
///
/// assert_eq!(StyledText::coloured("red", "X").to_string(), "\\m[red]X\\m[]");
/// assert_eq!(StyledText::plain("X").to_string(), "X");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledText {
    #[serde(default, alias = "color", skip_serializing_if = "Option::is_none")]
    colour: Option<String>,
    #[serde(rename = "text", alias = "raw_text")]
    raw_text: String,
}

impl StyledText {
    /// Creates uncoloured text.
    pub fn plain(text: impl Into<String>) -> Self {
        StyledText {
            colour: None,
            raw_text: text.into(),
        }
    }

    /// Creates text drawn in the named colour.
    pub fn coloured(colour: impl Into<String>, text: impl Into<String>) -> Self {
        StyledText {
            colour: Some(colour.into()),
            raw_text: text.into(),
        }
    }

    /// The colour name, if any.
    pub fn colour(&self) -> Option<&str> {
        self.colour.as_deref()
    }

    /// The unescaped text.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Renders the text, wrapping it in colour escapes when a colour is set.
    pub fn text(&self) -> String {
        match &self.colour {
            Some(colour) => format!("\\m[{}]{}\\m[]", colour, self.raw_text),
            None => self.raw_text.clone(),
        }
    }

    /// Converts a JSON value into one or more text fragments.
    ///
    /// Strings, numbers and booleans become plain text. A mapping with a
    /// `text` key (and optional `colour`) becomes a single fragment. An array
    /// of such scalars or mappings yields one fragment per element.
    pub fn fragments_from_value(value: &Value) -> Result<Vec<StyledText>> {
        match value {
            Value::Array(items) => items.iter().map(Self::from_scalar).collect(),
            other => Ok(vec![Self::from_scalar(other)?]),
        }
    }

    fn from_scalar(value: &Value) -> Result<StyledText> {
        match value {
            Value::String(s) => Ok(StyledText::plain(s.as_str())),
            Value::Number(n) => Ok(StyledText::plain(n.to_string())),
            Value::Bool(b) => Ok(StyledText::plain(b.to_string())),
            Value::Object(map) if map.contains_key("text") || map.contains_key("raw_text") => {
                serde_json::from_value(value.clone()).map_err(|err| {
                    GroffError::UnsupportedContent {
                        found: err.to_string(),
                    }
                })
            }
            Value::Object(_) => Err(GroffError::UnsupportedContent {
                found: "mapping without a 'text' key".to_string(),
            }),
            Value::Array(_) => Err(GroffError::UnsupportedContent {
                found: "nested array".to_string(),
            }),
            Value::Null => Err(GroffError::UnsupportedContent {
                found: "null".to_string(),
            }),
        }
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl Markup for StyledText {
    fn to_markup(&self) -> Result<String> {
        Ok(self.text())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        StyledText::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        StyledText::plain(text)
    }
}
