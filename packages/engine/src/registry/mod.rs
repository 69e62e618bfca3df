//! Handler registration for selector-dispatch visitors.
//!
//! A visitor declares an ordered list of (phase, selector, handler)
//! registrations. The registry compiles the selectors once and keeps one
//! insertion-ordered map per phase; that order is the order in which
//! handlers fire when several selectors match the same element.

mod core;
mod handler;
mod types;

pub use self::core::HandlerRegistry;
pub use handler::{HandlerFn, Phase, Registration};
pub use types::{Renderable, Replacement};
