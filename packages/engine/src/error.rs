//! Error types for the visitor engine.

use thiserror::Error;

/// Main error type for engine operations.
///
/// Handler failures are not wrapped here: they surface through the
/// visitor's own error type, which must be constructible from this one.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A registered selector could not be compiled.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A renderable replacement failed to produce markup.
    #[error("Failed to render replacement for <{tag_name}>: {message}")]
    Render { tag_name: String, message: String },

    /// A directive referred to a node that is not an element.
    #[error("Node {0} is not an element")]
    NotAnElement(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
