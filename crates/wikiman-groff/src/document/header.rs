//! Section headers (`.SH` / `.NH`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::markup::Markup;

/// Placeholder written for an unset header size or section number. The
/// formatter then falls back to its own default.
pub const FORMATTER_DEFAULT: &str = "\u{8}";

/// Kind and size of a header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderLevel {
    /// `.SH 1`
    #[default]
    Large,
    /// `.SH 2`
    Medium,
    /// `.SH 3`
    Small,
    /// `.SH <size>`
    Custom,
    /// `.NH <size> <section>`
    Numbered,
}

/// Size and numbering for [`HeaderLevel::Custom`] and
/// [`HeaderLevel::Numbered`] headers. Ignored by the fixed levels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderOptions {
    /// Header size; larger numbers give smaller type.
    pub size: Option<u32>,
    /// Explicit section number, e.g. `"1.2"`. Numbered headers only.
    pub section: Option<String>,
}

impl HeaderOptions {
    /// Set the size.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the section number.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}

/// An ms-macro section header.
///
/// The header text is emitted verbatim on the line after the macro, so it
/// should not contain macros of its own.
///
/// ```rust
/// use wikiman_groff::{GroffHeader, HeaderLevel, HeaderOptions};
///
/// let header = GroffHeader::with_options(
///     "Intro",
///     HeaderLevel::Numbered,
///     HeaderOptions::default().size(2).section("1.1"),
/// );
/// assert_eq!(header.to_string(), ".NH 2 1.1\nIntro\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroffHeader {
    raw_text: String,
    level: HeaderLevel,
    options: HeaderOptions,
}

impl GroffHeader {
    /// A header with no size or section overrides.
    pub fn new(text: impl Into<String>, level: HeaderLevel) -> Self {
        Self::with_options(text, level, HeaderOptions::default())
    }

    /// A header with size and section overrides.
    pub fn with_options(text: impl Into<String>, level: HeaderLevel, options: HeaderOptions) -> Self {
        GroffHeader {
            raw_text: text.into(),
            level,
            options,
        }
    }

    /// The header text.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// The header level.
    pub fn level(&self) -> HeaderLevel {
        self.level
    }

    /// The macro line, without a trailing newline.
    pub fn declaration(&self) -> String {
        let size = || {
            self.options
                .size
                .map(|size| size.to_string())
                .unwrap_or_else(|| FORMATTER_DEFAULT.to_string())
        };
        match self.level {
            HeaderLevel::Large => ".SH 1".to_string(),
            HeaderLevel::Medium => ".SH 2".to_string(),
            HeaderLevel::Small => ".SH 3".to_string(),
            HeaderLevel::Custom => format!(".SH {}", size()),
            HeaderLevel::Numbered => format!(
                ".NH {} {}",
                size(),
                self.options.section.as_deref().unwrap_or(FORMATTER_DEFAULT)
            ),
        }
    }
}

impl fmt::Display for GroffHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.declaration())?;
        writeln!(f, "{}", self.raw_text)
    }
}

impl Markup for GroffHeader {
    fn to_markup(&self) -> Result<String> {
        Ok(self.to_string())
    }
}
