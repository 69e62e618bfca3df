//! Visitors for HTML copied out of Slack.
//!
//! [`ConversationVisitor`] walks the whole export and collects one
//! [`Message`](crate::types::Message) per message container. Each message
//! body is handed to a nested [`MessageContentVisitor`], which cleans up
//! Slack-specific markup and returns the body as HTML.

mod content;
mod conversation;

pub use content::{ContentFragment, MessageContentVisitor};
pub use conversation::{extract_conversation, ConversationVisitor};
