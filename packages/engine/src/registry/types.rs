//! Replacement directives returned by handlers.

use std::fmt;

use scraper::ElementRef;

use crate::error::Result;

/// Content that is turned into markup only when replacements are committed.
///
/// `target` is the element as it stands at commit time, so any
/// replacements already applied inside it are visible.
pub trait Renderable {
    /// Produce the markup that takes the target's place.
    ///
    /// # Errors
    /// Returns `Render` if the content cannot be rendered for this target.
    fn render(&self, target: ElementRef<'_>) -> Result<String>;
}

impl<F> Renderable for F
where
    F: Fn(ElementRef<'_>) -> Result<String>,
{
    fn render(&self, target: ElementRef<'_>) -> Result<String> {
        self(target)
    }
}

/// What to do with an element once the walk has finished.
#[derive(Default)]
pub enum Replacement {
    /// Leave the element alone. Never queued.
    #[default]
    NoReplacement,
    /// Detach the element and its subtree.
    Remove,
    /// Replace the element with this markup, re-parsed as a fragment.
    Markup(String),
    /// Render the content against the element, then replace as for `Markup`.
    Render(Box<dyn Renderable>),
}

impl Replacement {
    /// Wrap renderable content.
    #[must_use]
    pub fn render(content: impl Renderable + 'static) -> Self {
        Self::Render(Box::new(content))
    }

    /// Whether this value should be queued as a directive.
    #[must_use]
    pub fn is_replacement(&self) -> bool {
        !matches!(self, Self::NoReplacement)
    }

    /// Short name for log output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoReplacement => "none",
            Self::Remove => "remove",
            Self::Markup(_) => "markup",
            Self::Render(_) => "render",
        }
    }
}

impl From<String> for Replacement {
    fn from(markup: String) -> Self {
        Self::Markup(markup)
    }
}

impl From<&str> for Replacement {
    fn from(markup: &str) -> Self {
        Self::Markup(markup.to_string())
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoReplacement => f.write_str("NoReplacement"),
            Self::Remove => f.write_str("Remove"),
            Self::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_replacement() {
        let replacement = Replacement::default();
        assert!(!replacement.is_replacement());
        assert_eq!(replacement.kind(), "none");
    }

    #[test]
    fn test_from_markup() {
        let replacement = Replacement::from("<br>");
        assert!(replacement.is_replacement());
        assert_eq!(format!("{replacement:?}"), r#"Markup("<br>")"#);
    }

    #[test]
    fn test_closure_is_renderable() {
        let doc = scraper::Html::parse_fragment("<em>x</em>");
        let target = doc.root_element();
        let content =
            |el: ElementRef<'_>| -> Result<String> { Ok(format!("<{}>", el.value().name())) };
        assert_eq!(content.render(target).unwrap(), "<html>");
    }
}
