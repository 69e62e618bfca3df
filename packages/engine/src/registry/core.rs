//! Registry mapping selectors to handlers, one ordered map per phase.

use indexmap::IndexMap;

use super::handler::{HandlerFn, Phase, Registration};
use crate::engine::Visitor;
use crate::error::Result;
use crate::markup::Matcher;

/// Ordered handler maps for one visitor type.
///
/// Keys are the selector strings as registered. Registering the same
/// selector twice for one phase replaces the earlier handler but keeps its
/// position in the firing order.
pub struct HandlerRegistry<V: Visitor> {
    enter: IndexMap<String, (Matcher, HandlerFn<V>)>,
    exit: IndexMap<String, (Matcher, HandlerFn<V>)>,
}

impl<V: Visitor> HandlerRegistry<V> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enter: IndexMap::new(),
            exit: IndexMap::new(),
        }
    }

    /// Build a registry from registrations, in the order given.
    ///
    /// # Errors
    /// Returns `InvalidSelector` for the first selector that fails to compile.
    pub fn build(registrations: impl IntoIterator<Item = Registration<V>>) -> Result<Self> {
        let mut registry = Self::new();
        for registration in registrations {
            registry.register(registration)?;
        }
        Ok(registry)
    }

    /// Register a single handler.
    ///
    /// # Errors
    /// Returns `InvalidSelector` if the selector fails to compile.
    pub fn register(&mut self, registration: Registration<V>) -> Result<()> {
        let matcher = Matcher::compile(&registration.selector)?;
        let map = match registration.phase {
            Phase::Enter => &mut self.enter,
            Phase::Exit => &mut self.exit,
        };
        if map
            .insert(registration.selector.clone(), (matcher, registration.handler))
            .is_some()
        {
            tracing::debug!(
                phase = %registration.phase,
                selector = %registration.selector,
                "Selector registered twice, later handler wins"
            );
        }
        Ok(())
    }

    /// Handlers for a phase, in firing order.
    pub fn handlers(&self, phase: Phase) -> impl Iterator<Item = (&Matcher, HandlerFn<V>)> {
        self.map(phase).values().map(|(matcher, handler)| (matcher, *handler))
    }

    /// Selector strings for a phase, in firing order.
    pub fn selectors(&self, phase: Phase) -> impl Iterator<Item = &str> {
        self.map(phase).keys().map(String::as_str)
    }

    /// Check if a handler is registered for a selector and phase.
    #[must_use]
    pub fn has_handler(&self, phase: Phase, selector: &str) -> bool {
        self.map(phase).contains_key(selector)
    }

    /// Total number of registered handlers across both phases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enter.len() + self.exit.len()
    }

    /// Whether no handler is registered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn map(&self, phase: Phase) -> &IndexMap<String, (Matcher, HandlerFn<V>)> {
        match phase {
            Phase::Enter => &self.enter,
            Phase::Exit => &self.exit,
        }
    }
}

impl<V: Visitor> Default for HandlerRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
