//! Message extraction for a whole Slack export.

use chatgrab_engine::markup::inner_text;
use chatgrab_engine::{Document, ElementRef, Parser, Registration, Replacement, Visitor};

use super::content::MessageContentVisitor;
use crate::config::{
    parse_slack_timestamp, profile_url, workspace_origin, MESSAGE_CONTAINER_SELECTOR,
    RICH_TEXT_SELECTOR, SENDER_ID_ATTRIBUTE, SENDER_NAME_SELECTOR, TIMESTAMP_ATTRIBUTE,
    TIMESTAMP_SELECTOR,
};
use crate::error::{HarvesterError, Result};
use crate::types::{Author, Conversation, ExtractOptions, Message};

/// Collects messages from Slack's clipboard HTML.
///
/// The message under construction is filled in by enter handlers on the
/// sender, timestamp and body elements, and moved into the result list
/// when its container is left.
#[derive(Debug, Clone, Default)]
pub struct ConversationVisitor {
    options: ExtractOptions,
    workspace_url: Option<String>,
    current: Message,
    messages: Vec<Message>,
}

impl ConversationVisitor {
    /// Create a visitor with the given options.
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    fn finish_message(&mut self) {
        let message = std::mem::take(&mut self.current);
        if message.is_empty() {
            tracing::trace!("Skipping empty message container");
            return;
        }
        self.messages.push(message);
    }

    fn message_container(&mut self, _el: ElementRef<'_>) -> Result<Replacement> {
        self.finish_message();
        Ok(Replacement::NoReplacement)
    }

    /// A selection can end halfway through a container; keep what has a body.
    fn body(&mut self, _el: ElementRef<'_>) -> Result<Replacement> {
        if self.current.content.is_some() {
            self.finish_message();
        }
        Ok(Replacement::NoReplacement)
    }

    fn sender_name(&mut self, el: ElementRef<'_>) -> Result<Replacement> {
        self.current.author = Some(Author {
            name: inner_text(el),
            id: el.value().attr(SENDER_ID_ATTRIBUTE).map(String::from),
            profile_url: None,
        });
        Ok(Replacement::NoReplacement)
    }

    fn timestamp(&mut self, el: ElementRef<'_>) -> Result<Replacement> {
        if self.workspace_url.is_none() {
            if let Some(href) = el.value().attr("href") {
                match workspace_origin(href) {
                    Ok(origin) => self.workspace_url = origin,
                    Err(err) => tracing::warn!(error = %err, "Ignoring timestamp link"),
                }
            }
        }

        if let Some(ts) = el.value().attr(TIMESTAMP_ATTRIBUTE) {
            match parse_slack_timestamp(ts) {
                Ok(timestamp) => self.current.timestamp = Some(timestamp),
                Err(err) => tracing::warn!(error = %err, "Ignoring message timestamp"),
            }
        }

        Ok(Replacement::NoReplacement)
    }

    fn rich_text(&mut self, el: ElementRef<'_>) -> Result<Replacement> {
        let mut parser = Parser::new(MessageContentVisitor::new(self.options))?;
        self.current.content = Some(parser.parse(&el.inner_html())?);
        Ok(Replacement::NoReplacement)
    }

    /// Profile link for an author, if links are enabled and resolvable.
    fn author_link(&self, author: &Author) -> Option<String> {
        if !self.options.author_links {
            return None;
        }
        let workspace = self.workspace_url.as_deref()?;
        let id = author.id.as_deref()?;
        Some(profile_url(workspace, id))
    }
}

impl Visitor for ConversationVisitor {
    type Output = Conversation;
    type Error = HarvesterError;

    fn registrations() -> Vec<Registration<Self>> {
        vec![
            Registration::exit(MESSAGE_CONTAINER_SELECTOR, Self::message_container),
            Registration::exit("body", Self::body),
            Registration::enter(SENDER_NAME_SELECTOR, Self::sender_name),
            Registration::enter(TIMESTAMP_SELECTOR, Self::timestamp),
            Registration::enter(RICH_TEXT_SELECTOR, Self::rich_text),
        ]
    }

    fn results(&mut self, _document: &Document) -> Result<Conversation> {
        let messages = self
            .messages
            .iter()
            .cloned()
            .map(|mut message| {
                if let Some(author) = message.author.as_mut() {
                    author.profile_url = self.author_link(author);
                }
                message
            })
            .collect();

        Ok(Conversation {
            workspace_url: self.workspace_url.clone(),
            messages,
        })
    }
}

/// Extract a conversation from Slack clipboard HTML.
///
/// # Errors
/// Returns an error if a message body fails to render.
pub fn extract_conversation(html: &str, options: ExtractOptions) -> Result<Conversation> {
    let mut parser = Parser::new(ConversationVisitor::new(options))?;
    parser.parse(html)
}
