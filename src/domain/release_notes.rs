use serde::{Deserialize, Serialize};

/// The release-notes payload served by the backend.
///
/// Only `hardware_requirements` is shown; `note` and `code` are carried
/// along unused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotes {
    /// Free-text release note.
    pub note: String,
    /// Release code.
    pub code: String,
    /// Hardware requirements, with lines separated by `\r\n`.
    pub hardware_requirements: String,
}

/// Splits text on the literal `\r\n` delimiter, one fragment per line.
///
/// A bare `\n` is not a delimiter. A trailing delimiter produces a trailing
/// empty fragment.
#[must_use]
pub fn format_lines(text: &str) -> Vec<String> {
    text.split("\r\n").map(str::to_string).collect()
}
