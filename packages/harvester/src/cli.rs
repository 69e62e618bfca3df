//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::error::Result;
use crate::harvester::harvest;
use crate::output::{render_conversation, save_output, OutputFormat};
use crate::types::ExtractOptions;

/// Chatgrab - Extract conversations from HTML copied out of Slack.
#[derive(Parser)]
#[command(name = "chatgrab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract messages from a Slack HTML export.
    Extract {
        /// HTML file to read, or '-' for stdin
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep emoji in message content
        #[arg(long)]
        include_emoji: bool,

        /// Add workspace profile links to authors
        #[arg(long)]
        author_links: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            format,
            output,
            include_emoji,
            author_links,
        } => {
            let options = ExtractOptions::new()
                .with_emoji(include_emoji)
                .with_author_links(author_links);
            extract_command(&input, format, output.as_deref(), options)
        }
    }
}

/// Execute the extract command.
fn extract_command(
    input: &str,
    format: OutputFormat,
    output: Option<&Path>,
    options: ExtractOptions,
) -> Result<()> {
    let conversation = harvest(input, options)?;

    let Some(output_path) = output else {
        print!("{}", render_conversation(&conversation, format)?);
        return Ok(());
    };

    save_output(&conversation, format, output_path)?;

    println!(
        "{} {} from {}",
        style("Extracted").bold(),
        style(format!("{} messages", conversation.messages.len())).cyan(),
        style(input).green()
    );
    println!("  Authors: {}", conversation.author_count());
    if let Some(workspace) = &conversation.workspace_url {
        println!("  Workspace: {workspace}");
    }
    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}
