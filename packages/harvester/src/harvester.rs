//! Main harvester service that ties reading and extraction together.

use std::io::Read;
use std::path::Path;

use crate::config::{validate_input_path, STDIN_PATH};
use crate::error::Result;
use crate::slack::extract_conversation;
use crate::types::{Conversation, ExtractOptions};

/// Read an export from a file, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns `UnsupportedInput` for unexpected file types and `Io` if the
/// input cannot be read.
pub fn read_input(path: &str) -> Result<String> {
    validate_input_path(path)?;

    if path == STDIN_PATH {
        let mut html = String::new();
        std::io::stdin().read_to_string(&mut html)?;
        return Ok(html);
    }

    Ok(std::fs::read_to_string(Path::new(path))?)
}

/// Read and extract a Slack export.
///
/// # Arguments
/// * `path` - File path, or `-` for stdin
/// * `options` - Extraction options
///
/// # Returns
/// The extracted `Conversation`
pub fn harvest(path: &str, options: ExtractOptions) -> Result<Conversation> {
    let html = read_input(path)?;
    tracing::debug!(path, bytes = html.len(), "Read export");

    let conversation = extract_conversation(&html, options)?;
    if conversation.messages.is_empty() {
        tracing::warn!(path, "No messages found, is this HTML copied from Slack?");
    }

    Ok(conversation)
}
