//! Chatgrab Harvester - Extract conversations from HTML copied out of Slack.
//!
//! This crate builds on the selector-dispatch visitor engine in
//! `chatgrab-engine` to turn Slack's clipboard HTML into structured
//! messages, and serializes them as YAML or JSON.
//!
//! # Example
//!
//! ```
//! use chatgrab_harvester::{extract_conversation, ExtractOptions};
//!
//! let html = r#"
//!     <div data-qa="message_container">
//!       <a data-qa="message_sender_name" data-message-sender="U1">Ada</a>
//!       <div class="p-rich_text_block">Morning!</div>
//!     </div>
//! "#;
//! let conversation = extract_conversation(html, ExtractOptions::default()).unwrap();
//! assert_eq!(conversation.messages.len(), 1);
//! assert_eq!(conversation.messages[0].content.as_deref(), Some("Morning!"));
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Selectors, constants and validation
//! - [`types`]: Core data types (Conversation, Message, Author)
//! - [`error`]: Error types and Result alias
//! - [`slack`]: Visitors for Slack markup
//! - [`output`]: YAML and JSON output
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Main harvester service

pub mod cli;
pub mod config;
pub mod error;
pub mod harvester;
pub mod output;
pub mod slack;
pub mod types;

// Re-export main functions
pub use harvester::harvest;
pub use slack::extract_conversation;

// Re-export commonly used items
pub use error::{HarvesterError, Result};
pub use output::OutputFormat;
pub use types::{Author, Conversation, ExtractOptions, Message};
