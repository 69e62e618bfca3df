//! End-to-end tests for extraction from a Slack clipboard export.
//!
//! The fixture holds three messages by two senders, one of them a
//! continuation, plus an empty container.

use std::fs;
use std::path::{Path, PathBuf};

use chatgrab_harvester::{extract_conversation, harvest, Conversation, ExtractOptions};
use pretty_assertions::assert_eq;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("slack")
        .join("conversation.html")
}

/// Load the fixture export.
fn load_fixture() -> String {
    let path = fixture_path();
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn extract(options: ExtractOptions) -> Conversation {
    extract_conversation(&load_fixture(), options).expect("Extraction failed")
}

fn content(conversation: &Conversation, index: usize) -> &str {
    conversation.messages[index]
        .content
        .as_deref()
        .expect("message has content")
}

#[test]
fn test_messages_in_document_order() {
    let conversation = extract(ExtractOptions::default());

    assert_eq!(
        conversation.workspace_url.as_deref(),
        Some("https://acme.slack.com")
    );
    assert_eq!(conversation.messages.len(), 3);
    assert_eq!(conversation.author_count(), 2);

    let timestamps: Vec<i64> = conversation
        .messages
        .iter()
        .map(|m| m.timestamp.expect("timestamp").timestamp())
        .collect();
    assert_eq!(timestamps, [1_700_000_000, 1_700_000_060, 1_700_000_120]);
}

#[test]
fn test_authors_and_continuation() {
    let conversation = extract(ExtractOptions::default());

    let ada = conversation.messages[0].author.as_ref().expect("author");
    assert_eq!(ada.name, "Ada Lovelace");
    assert_eq!(ada.id.as_deref(), Some("U01ADA"));
    assert_eq!(ada.profile_url, None);

    assert!(conversation.messages[1].is_continuation());

    let grace = conversation.messages[2].author.as_ref().expect("author");
    assert_eq!(grace.name, "Grace Hopper");
}

#[test]
fn test_emoji_dropped_by_default() {
    let conversation = extract(ExtractOptions::default());
    let first = content(&conversation, 0);

    assert!(first.starts_with(r#"<div class="p-rich_text_section">Morning all"#));
    assert!(!first.contains("<img"));
}

#[test]
fn test_emoji_kept_on_own_line() {
    let conversation = extract(ExtractOptions::new().with_emoji(true));
    let first = content(&conversation, 0);

    assert!(first.contains("<br><img"));
    assert!(first.contains(r#"alt=":wave:""#));
    assert!(first.ends_with("<br></div>"));
}

#[test]
fn test_list_style_stripped() {
    let conversation = extract(ExtractOptions::default());

    assert_eq!(
        content(&conversation, 1),
        r#"<ul class="p-rich_text_list"><li>one</li><li>two</li></ul>"#
    );
}

#[test]
fn test_line_breaks_and_edited_label() {
    let conversation = extract(ExtractOptions::default());

    assert_eq!(
        content(&conversation, 2),
        r#"<div class="p-rich_text_section">Line one<br>Line two</div>"#
    );
}

#[test]
fn test_author_links() {
    let conversation = extract(ExtractOptions::new().with_author_links(true));

    let urls: Vec<Option<&str>> = conversation
        .messages
        .iter()
        .map(|m| m.author.as_ref().and_then(|a| a.profile_url.as_deref()))
        .collect();
    assert_eq!(
        urls,
        [
            Some("https://acme.slack.com/team/U01ADA"),
            None,
            Some("https://acme.slack.com/team/U02GRACE"),
        ]
    );
}

#[test]
fn test_harvest_reads_fixture_file() {
    let path = fixture_path();
    let conversation = harvest(
        path.to_str().expect("utf-8 path"),
        ExtractOptions::default(),
    )
    .expect("harvest failed");

    assert_eq!(conversation, extract(ExtractOptions::default()));
}
