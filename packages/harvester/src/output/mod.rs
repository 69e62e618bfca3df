//! Serialized output for extracted conversations.

mod writer;

pub use writer::{render_conversation, save_output, OutputFormat};
