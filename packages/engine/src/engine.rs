//! Selector-dispatch walk and replacement commit.

use indexmap::IndexMap;
use scraper::ElementRef;

use crate::error::EngineError;
use crate::markup::{child_elements, Document, ElementId};
use crate::registry::{HandlerRegistry, Phase, Registration, Replacement};

/// Extraction rules: a set of handlers plus the state they build up.
///
/// Implementors declare their handlers through [`Visitor::registrations`]
/// and expose what they collected through [`Visitor::results`]. The engine
/// never resets visitor state between `parse` calls.
pub trait Visitor: Sized {
    /// Value returned from a `parse` call.
    type Output: Default;

    /// Error type handlers fail with. Engine errors convert into it, handler
    /// errors are returned as they are.
    type Error: From<EngineError>;

    /// Handlers in declaration order.
    fn registrations() -> Vec<Registration<Self>>;

    /// Finalize the extraction once replacements are committed.
    ///
    /// # Errors
    /// Implementations may fail while reading the committed document.
    fn results(&mut self, _document: &Document) -> Result<Self::Output, Self::Error> {
        Ok(Self::Output::default())
    }

    /// Wrap this visitor in a parser.
    ///
    /// # Errors
    /// Returns `InvalidSelector` if one of the registrations does not compile.
    fn into_parser(self) -> Result<Parser<Self>, EngineError> {
        Parser::new(self)
    }
}

/// Drives one visitor over markup.
///
/// The handler registry is built once here; the document and the queued
/// directives are rebuilt on every `parse` call.
pub struct Parser<V: Visitor> {
    visitor: V,
    registry: HandlerRegistry<V>,
    document: Option<Document>,
    directives: IndexMap<ElementId, Replacement>,
}

impl<V: Visitor> Parser<V> {
    /// Create a parser, compiling the visitor's registrations.
    ///
    /// # Errors
    /// Returns `InvalidSelector` if one of the registrations does not compile.
    pub fn new(visitor: V) -> Result<Self, EngineError> {
        let registry = HandlerRegistry::build(V::registrations())?;
        Ok(Self {
            visitor,
            registry,
            document: None,
            directives: IndexMap::new(),
        })
    }

    /// Parse markup, run the handlers, commit replacements and return the
    /// visitor's results.
    ///
    /// Blank input still produces a document, but no handler runs.
    ///
    /// # Errors
    /// A failing handler aborts the walk before anything is committed and
    /// its error is returned unchanged. A failing renderer stops the commit.
    pub fn parse(&mut self, raw: &str) -> Result<V::Output, V::Error> {
        self.directives.clear();
        let mut document = Document::parse(raw);

        let outcome = if raw.trim().is_empty() {
            Ok(())
        } else {
            match self.walk(&document) {
                Ok(()) => self.commit(&mut document),
                Err(err) => Err(err),
            }
        };

        self.directives.clear();
        let document = self.document.insert(document);
        outcome?;
        self.visitor.results(document)
    }

    /// Depth-first walk firing enter handlers before descendants and exit
    /// handlers after them.
    fn walk(&mut self, document: &Document) -> Result<(), V::Error> {
        let mut stack = vec![(document.walk_root(), Phase::Enter)];

        while let Some((id, phase)) = stack.pop() {
            let Some(element) = document.element(id) else {
                continue;
            };

            self.dispatch(element, phase)?;

            if phase == Phase::Enter {
                stack.push((id, Phase::Exit));
                let children: Vec<ElementId> = child_elements(element).map(|el| el.id()).collect();
                stack.extend(children.into_iter().rev().map(|child| (child, Phase::Enter)));
            }
        }

        Ok(())
    }

    /// Fire every handler of `phase` whose selector matches, in registration
    /// order, queueing any replacement they return.
    fn dispatch(&mut self, element: ElementRef<'_>, phase: Phase) -> Result<(), V::Error> {
        let Self {
            visitor,
            registry,
            directives,
            ..
        } = self;

        for (matcher, handler) in registry.handlers(phase) {
            if !matcher.matches(&element) {
                continue;
            }

            tracing::trace!(
                %phase,
                selector = %matcher.as_str(),
                tag = %element.value().name(),
                "Firing handler"
            );

            let replacement = handler(&mut *visitor, element)?;
            if replacement.is_replacement() {
                directives.insert(element.id(), replacement);
            }
        }

        Ok(())
    }

    /// Apply queued directives, most recently recorded first.
    fn commit(&mut self, document: &mut Document) -> Result<(), V::Error> {
        let directives = std::mem::take(&mut self.directives);
        let total = directives.len();
        let mut skipped = 0;

        for (id, replacement) in directives.into_iter().rev() {
            if !document.is_attached(id) {
                tracing::debug!(
                    kind = replacement.kind(),
                    "Element already detached, skipping replacement"
                );
                skipped += 1;
                continue;
            }

            match replacement {
                Replacement::NoReplacement => {}
                Replacement::Remove => document.remove(id),
                Replacement::Markup(markup) => document.replace_with_markup(id, &markup),
                Replacement::Render(content) => {
                    let target = document
                        .element(id)
                        .ok_or_else(|| EngineError::NotAnElement(format!("{id:?}")))?;
                    let markup = content.render(target)?;
                    document.replace_with_markup(id, &markup);
                }
            }
        }

        if total > 0 {
            tracing::debug!(total, skipped, "Committed replacements");
        }

        Ok(())
    }

    /// The visitor and the state it has accumulated.
    #[must_use]
    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    /// Mutable access to the visitor, e.g. to reset state between calls.
    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    /// Consume the parser and return the visitor.
    #[must_use]
    pub fn into_visitor(self) -> V {
        self.visitor
    }

    /// The document from the most recent `parse` call.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// The compiled handler registry.
    #[must_use]
    pub fn registry(&self) -> &HandlerRegistry<V> {
        &self.registry
    }
}
