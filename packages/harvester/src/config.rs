//! Configuration constants and validation functions for the harvester.
//!
//! Selectors and attribute names follow the markup Slack puts on the
//! clipboard when messages are copied from the desktop or web client.

use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use url::Url;

use crate::error::{HarvesterError, Result};

/// Wrapper around one message, including consecutive ones by the same sender.
pub const MESSAGE_CONTAINER_SELECTOR: &str = "[data-qa=message_container]";

/// Sender name link at the top of a message group.
pub const SENDER_NAME_SELECTOR: &str = "[data-qa=message_sender_name]";

/// Permalink carrying the message timestamp.
pub const TIMESTAMP_SELECTOR: &str = ".c-timestamp";

/// Rich-text body of a message.
pub const RICH_TEXT_SELECTOR: &str = ".p-rich_text_block";

/// Custom or unicode emoji.
pub const EMOJI_SELECTOR: &str = "[data-qa=emoji]";

/// "(edited)" marker after an edited message.
pub const EDITED_LABEL_SELECTOR: &str = ".c-message__edited_label";

/// Slack's own line-break span inside message text.
pub const LINE_BREAK_SELECTOR: &str = ".c-mrkdwn__br";

/// Attribute on the sender link holding the member ID.
pub const SENDER_ID_ATTRIBUTE: &str = "data-message-sender";

/// Attribute on the timestamp link holding seconds since the epoch.
pub const TIMESTAMP_ATTRIBUTE: &str = "data-ts";

/// Input file extensions accepted by the CLI.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["html", "htm", "txt"];

/// Path argument meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Slack timestamp pattern: whole seconds with an optional fraction.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TIMESTAMP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.(\d+))?$").expect("valid regex"));

/// Parse a Slack `data-ts` value into a UTC timestamp.
///
/// Precision is truncated to milliseconds.
///
/// # Examples
/// ```
/// use chatgrab_harvester::config::parse_slack_timestamp;
///
/// let ts = parse_slack_timestamp("1700000000.123456").unwrap();
/// assert_eq!(ts.timestamp_millis(), 1_700_000_000_123);
/// assert!(parse_slack_timestamp("yesterday").is_err());
/// ```
pub fn parse_slack_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let invalid = || HarvesterError::InvalidTimestamp(value.to_string());

    let captures = TIMESTAMP_PATTERN.captures(value.trim()).ok_or_else(invalid)?;
    let seconds: i64 = captures[1].parse().map_err(|_| invalid())?;

    // First three fractional digits, right-padded: ".5" is 500 ms
    let millis = captures.get(2).map_or(0, |fraction| {
        fraction
            .as_str()
            .chars()
            .chain(std::iter::repeat('0'))
            .take(3)
            .filter_map(|c| c.to_digit(10))
            .fold(0_i64, |acc, digit| acc * 10 + i64::from(digit))
    });

    seconds
        .checked_mul(1000)
        .and_then(|ms| ms.checked_add(millis))
        .and_then(DateTime::from_timestamp_millis)
        .ok_or_else(invalid)
}

/// Origin (`scheme://host[:port]`) of a message permalink.
///
/// Returns `Ok(None)` for URLs without a meaningful origin, such as `data:`.
///
/// # Examples
/// ```
/// use chatgrab_harvester::config::workspace_origin;
///
/// let origin = workspace_origin("https://acme.slack.com/archives/C01/p1700000000123456").unwrap();
/// assert_eq!(origin.as_deref(), Some("https://acme.slack.com"));
/// ```
pub fn workspace_origin(href: &str) -> Result<Option<String>> {
    let url = Url::parse(href).map_err(|source| HarvesterError::InvalidUrl {
        url: href.to_string(),
        source,
    })?;
    let origin = url.origin();
    Ok(origin.is_tuple().then(|| origin.ascii_serialization()))
}

/// Profile link for a workspace member.
#[must_use]
pub fn profile_url(workspace_url: &str, member_id: &str) -> String {
    format!("{}/team/{member_id}", workspace_url.trim_end_matches('/'))
}

/// Validate a CLI input path.
///
/// Accepts `-` for stdin and files with one of [`SUPPORTED_EXTENSIONS`].
///
/// # Examples
/// ```
/// use chatgrab_harvester::config::validate_input_path;
///
/// assert!(validate_input_path("-").is_ok());
/// assert!(validate_input_path("export.html").is_ok());
/// assert!(validate_input_path("export.pdf").is_err());
/// ```
pub fn validate_input_path(path: &str) -> Result<()> {
    if path == STDIN_PATH {
        return Ok(());
    }

    let supported = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        });

    if supported {
        Ok(())
    } else {
        Err(HarvesterError::UnsupportedInput(path.to_string()))
    }
}
