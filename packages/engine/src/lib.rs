//! Chatgrab Engine
//!
//! A selector-dispatch visitor over parsed HTML. Visitors register handlers
//! against CSS selectors for two phases:
//! - **enter**: fires before the element's descendants are visited
//! - **exit**: fires after all of them have been visited
//!
//! Handlers update the visitor's own state and may return a
//! [`Replacement`] for the element. Replacements are queued during the walk
//! and committed afterwards, most recently recorded first, so the tree
//! shape the walk relies on never changes underneath it.
//!
//! # Example
//!
//! ```
//! use chatgrab_engine::{
//!     Document, ElementRef, EngineError, Parser, Registration, Replacement, Visitor,
//! };
//!
//! #[derive(Default)]
//! struct Headings(Vec<String>);
//!
//! impl Headings {
//!     fn heading(&mut self, el: ElementRef<'_>) -> Result<Replacement, EngineError> {
//!         self.0.push(chatgrab_engine::markup::inner_text(el));
//!         Ok(Replacement::NoReplacement)
//!     }
//! }
//!
//! impl Visitor for Headings {
//!     type Output = Vec<String>;
//!     type Error = EngineError;
//!
//!     fn registrations() -> Vec<Registration<Self>> {
//!         vec![Registration::enter("h1, h2", Self::heading)]
//!     }
//!
//!     fn results(&mut self, _document: &Document) -> Result<Vec<String>, EngineError> {
//!         Ok(std::mem::take(&mut self.0))
//!     }
//! }
//!
//! let mut parser = Parser::new(Headings::default()).unwrap();
//! let headings = parser.parse("<h1>One</h1><p>x</p><h2>Two</h2>").unwrap();
//! assert_eq!(headings, ["One", "Two"]);
//! ```

pub mod engine;
pub mod error;
pub mod markup;
pub mod registry;

// Re-export commonly used items
pub use engine::{Parser, Visitor};
pub use error::{EngineError, Result};
pub use markup::{Document, ElementId, Matcher};
pub use registry::{HandlerFn, HandlerRegistry, Phase, Registration, Renderable, Replacement};
pub use scraper::ElementRef;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
