//! CSV export of extracted email lists

use std::fmt;
use tracing::debug;

/// Header line of every export
pub const CSV_HEADER: &str = "Email Address";

/// Media type used when the payload is offered as a download
pub const CSV_MEDIA_TYPE: &str = "text/csv;charset=utf-8";

/// Filename used when the caller does not choose one
pub const DEFAULT_FILENAME: &str = "email_list.csv";

/// CSV text ready to be persisted
///
/// First line is [`CSV_HEADER`], then one entry per line, joined by `\n`
/// with no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    text: String,
    rows: usize,
}

impl ExportPayload {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of entries, not counting the header
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for ExportPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for ExportPayload {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Build the CSV payload for `entries`
///
/// Entries are written verbatim. The extractor's character class never
/// yields commas, quotes or newlines, so no escaping is done. An empty
/// slice yields the header alone.
#[must_use]
pub fn to_csv<S: AsRef<str>>(entries: &[S]) -> ExportPayload {
    let capacity = entries
        .iter()
        .fold(CSV_HEADER.len(), |acc, e| acc + e.as_ref().len() + 1);
    let mut text = String::with_capacity(capacity);
    text.push_str(CSV_HEADER);

    for entry in entries {
        text.push('\n');
        text.push_str(entry.as_ref());
    }

    debug!("Built CSV payload with {} rows", entries.len());

    ExportPayload {
        text,
        rows: entries.len(),
    }
}
