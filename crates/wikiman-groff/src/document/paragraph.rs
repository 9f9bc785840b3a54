//! Paragraphs (`.LP`) and line breaks (`.br`).

use std::fmt;

use serde_json::Value;

use crate::error::Result;
use crate::markup::Markup;
use crate::style::StyledText;
use crate::util::protect_control_line;

/// A left-blocked paragraph of inline text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroffParagraph {
    content: Vec<StyledText>,
}

impl GroffParagraph {
    /// A paragraph made of the given fragments.
    pub fn new<I, T>(content: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StyledText>,
    {
        GroffParagraph {
            content: content.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a paragraph from a JSON string, number, `{colour, text}`
    /// mapping, or an array of those.
    ///
    /// Fails with [`GroffError::UnsupportedContent`] for anything else.
    ///
    /// [`GroffError::UnsupportedContent`]: crate::GroffError::UnsupportedContent
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(GroffParagraph {
            content: StyledText::fragments_from_value(value)?,
        })
    }

    /// The fragments.
    pub fn content(&self) -> &[StyledText] {
        &self.content
    }

    /// The paragraph text, with lines that would read as requests escaped.
    pub fn text(&self) -> String {
        let joined: String = self.content.iter().map(StyledText::text).collect();
        joined
            .lines()
            .map(protect_control_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for GroffParagraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".LP")?;
        let text = self.text();
        if !text.is_empty() {
            writeln!(f, "{}", text)?;
        }
        Ok(())
    }
}

impl Markup for GroffParagraph {
    fn to_markup(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl From<&str> for GroffParagraph {
    fn from(text: &str) -> Self {
        GroffParagraph::new([text])
    }
}

/// A forced line break.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroffLinebreak;

impl fmt::Display for GroffLinebreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ".br")
    }
}

impl Markup for GroffLinebreak {
    fn to_markup(&self) -> Result<String> {
        Ok(self.to_string())
    }
}
