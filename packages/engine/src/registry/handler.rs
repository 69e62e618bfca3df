//! Handler and registration definitions.

use std::fmt;

use scraper::ElementRef;

use super::types::Replacement;
use crate::engine::Visitor;

/// When a handler fires relative to the element's descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pre-order, before any descendant is visited.
    Enter,
    /// Post-order, after every descendant has been visited.
    Exit,
}

impl Phase {
    /// Get the string value used in log output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A handler bound to a visitor type.
///
/// Receives the visitor state and the matched element; returns the
/// replacement to queue for that element, if any.
pub type HandlerFn<V> =
    fn(&mut V, ElementRef<'_>) -> Result<Replacement, <V as Visitor>::Error>;

/// One (phase, selector, handler) declaration.
pub struct Registration<V: Visitor> {
    /// Phase the handler fires in.
    pub phase: Phase,
    /// CSS selector the element must match.
    pub selector: String,
    /// Callback invoked for matching elements.
    pub handler: HandlerFn<V>,
}

impl<V: Visitor> Registration<V> {
    /// Create a registration for the given phase.
    #[must_use]
    pub fn new(phase: Phase, selector: impl Into<String>, handler: HandlerFn<V>) -> Self {
        Self {
            phase,
            selector: selector.into(),
            handler,
        }
    }

    /// Register a handler that fires on entering matching elements.
    #[must_use]
    pub fn enter(selector: impl Into<String>, handler: HandlerFn<V>) -> Self {
        Self::new(Phase::Enter, selector, handler)
    }

    /// Register a handler that fires on leaving matching elements.
    #[must_use]
    pub fn exit(selector: impl Into<String>, handler: HandlerFn<V>) -> Self {
        Self::new(Phase::Exit, selector, handler)
    }
}

impl<V: Visitor> fmt::Debug for Registration<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("phase", &self.phase)
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Enter.to_string(), "enter");
        assert_eq!(Phase::Exit.to_string(), "exit");
    }
}
