//! Clean-up rules for a single message body.

use chatgrab_engine::markup::outer_html_without;
use chatgrab_engine::{Document, ElementRef, Registration, Renderable, Replacement, Visitor};

use crate::config::{EDITED_LABEL_SELECTOR, EMOJI_SELECTOR, LINE_BREAK_SELECTOR};
use crate::error::{HarvesterError, Result};
use crate::types::ExtractOptions;

/// Replacements rendered against the element at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFragment {
    /// Emoji set on its own line.
    Emoji,
    /// The element without its inline `style`.
    Unstyled,
}

impl Renderable for ContentFragment {
    fn render(&self, target: ElementRef<'_>) -> chatgrab_engine::Result<String> {
        Ok(match self {
            Self::Emoji => format!("<br>{}<br>", target.html()),
            Self::Unstyled => outer_html_without(target, &["style"]),
        })
    }
}

/// Turns the inner HTML of a rich-text block into portable HTML.
///
/// Slack styles lists inline and renders line breaks and the "(edited)"
/// marker as spans; none of that survives a paste into another editor.
#[derive(Debug, Clone, Default)]
pub struct MessageContentVisitor {
    options: ExtractOptions,
}

impl MessageContentVisitor {
    /// Create a visitor with the given options.
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    fn emoji(&mut self, _el: ElementRef<'_>) -> Result<Replacement> {
        if !self.options.include_emoji {
            return Ok(Replacement::Remove);
        }
        Ok(Replacement::render(ContentFragment::Emoji))
    }

    fn list(&mut self, _el: ElementRef<'_>) -> Result<Replacement> {
        Ok(Replacement::render(ContentFragment::Unstyled))
    }

    fn edited_label(&mut self, _el: ElementRef<'_>) -> Result<Replacement> {
        Ok(Replacement::Remove)
    }

    fn line_break(&mut self, _el: ElementRef<'_>) -> Result<Replacement> {
        Ok("<br>".into())
    }
}

impl Visitor for MessageContentVisitor {
    type Output = String;
    type Error = HarvesterError;

    fn registrations() -> Vec<Registration<Self>> {
        vec![
            Registration::enter(EMOJI_SELECTOR, Self::emoji),
            Registration::enter("ol", Self::list),
            Registration::enter("ul", Self::list),
            Registration::exit(EDITED_LABEL_SELECTOR, Self::edited_label),
            Registration::exit(LINE_BREAK_SELECTOR, Self::line_break),
        ]
    }

    fn results(&mut self, document: &Document) -> Result<String> {
        Ok(document.body_html().trim().to_string())
    }
}
