//! The rendering contract shared by every groff entity.

use crate::error::Result;

/// Types that render to a fragment of troff markup.
///
/// Fragments are plain strings meant to be concatenated by whatever assembles
/// the final document. Block-level entities (headers, paragraphs, tables) end
/// their output with a newline; inline entities such as [`StyledText`] do not.
///
/// [`StyledText`]: crate::StyledText
pub trait Markup {
    /// Renders this entity to troff markup.
    fn to_markup(&self) -> Result<String>;
}

impl<T: Markup + ?Sized> Markup for &T {
    fn to_markup(&self) -> Result<String> {
        (**self).to_markup()
    }
}

impl<T: Markup + ?Sized> Markup for Box<T> {
    fn to_markup(&self) -> Result<String> {
        (**self).to_markup()
    }
}

/// Renders a sequence of entities and concatenates their output.
///
/// Stops at the first failing entity; nothing is returned for a partial run.
pub fn concat<I>(items: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Markup,
{
    let mut out = String::new();
    for item in items {
        out.push_str(&item.to_markup()?);
    }
    Ok(out)
}
