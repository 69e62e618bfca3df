//! Error types for the harvester.
//!
//! Engine failures (bad selectors, failed renders) are wrapped as they are;
//! everything else is specific to reading exports and writing records.

use thiserror::Error;

use chatgrab_engine::EngineError;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Visitor engine failure.
    #[error("Extraction failed: {0}")]
    Engine(#[from] EngineError),

    /// Invalid Slack timestamp attribute.
    #[error("Invalid timestamp: '{0}'. Expected seconds since the epoch (e.g., 1700000000.000200)")]
    InvalidTimestamp(String),

    /// Timestamp link that is not an absolute URL.
    #[error("Invalid workspace URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Input file that is neither HTML nor plain text.
    #[error("Unsupported input file: '{0}'. Expected an .html, .htm or .txt export, or '-' for stdin")]
    UnsupportedInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;
