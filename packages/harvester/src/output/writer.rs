//! YAML and JSON writer for conversations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::Conversation;

/// Serialization format for extracted conversations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML document with a `---` start marker.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Conventional file extension.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// Serialize a conversation.
///
/// Output always ends with a single newline.
pub fn render_conversation(conversation: &Conversation, format: OutputFormat) -> Result<String> {
    let body = match format {
        OutputFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(conversation)?;
            // Clean up trailing whitespace
            let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
            format!("---\n{}", lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(conversation)?,
    };
    Ok(format!("{}\n", body.trim_end()))
}

/// Save a conversation to `path`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// Parent directories are created as needed.
pub fn save_output(conversation: &Conversation, format: OutputFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let content = render_conversation(conversation, format)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("conversation.{}", format.extension()));
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?; // Ensure data is flushed to disk
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), "Saved conversation");

    Ok(())
}
