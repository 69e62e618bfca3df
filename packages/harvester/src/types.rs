//! Core data types for the harvester.
//!
//! A [`Conversation`] is what one export yields: the messages in document
//! order plus the workspace they came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Options for one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Keep emoji in message content instead of dropping them.
    pub include_emoji: bool,
    /// Attach a profile link to each author when the workspace is known.
    pub author_links: bool,
}

impl ExtractOptions {
    /// Create options with everything turned off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether emoji are kept.
    #[must_use]
    pub fn with_emoji(mut self, include_emoji: bool) -> Self {
        self.include_emoji = include_emoji;
        self
    }

    /// Set whether author profile links are attached.
    #[must_use]
    pub fn with_author_links(mut self, author_links: bool) -> Self {
        self.author_links = author_links;
        self
    }
}

/// The sender of a message group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name as shown in the client.
    pub name: String,

    /// Slack member ID (e.g., U012AB3CD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Link to the member's profile in the workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

/// A single message.
///
/// Messages posted right after another one by the same sender carry no
/// author: Slack only renders the sender once per group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Cleaned-up message body as HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Message {
    /// Whether this message continues the previous sender's group.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.author.is_none()
    }

    /// Whether nothing has been collected for this message yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.timestamp.is_none() && self.content.is_none()
    }
}

/// Everything extracted from one export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Origin of the workspace the messages were copied from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_url: Option<String>,

    /// Messages in document order.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Number of distinct authors by display name.
    #[must_use]
    pub fn author_count(&self) -> usize {
        let mut names: Vec<&str> = self
            .messages
            .iter()
            .filter_map(|m| m.author.as_ref().map(|a| a.name.as_str()))
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}
