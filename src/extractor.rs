//! Email address extraction from free text

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

use crate::export::{ExportPayload, to_csv};

// Local part and domain share one class; the final label drops the dot.
static EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+").unwrap()
});

/// A single pattern match in the raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCandidate {
    pub address: String,
    pub position: usize, // byte offset in the input
}

/// Deduplicated email addresses in order of first occurrence
///
/// No two entries compare equal. Comparison is exact, so `A@b.com` and
/// `a@b.com` are distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct EmailList(Vec<String>);

impl EmailList {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, address: &str) -> bool {
        self.0.iter().any(|a| a == address)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Render this list as a CSV export payload
    #[must_use]
    pub fn to_csv(&self) -> ExportPayload {
        to_csv(&self.0)
    }
}

impl fmt::Display for EmailList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

/// Keeps only the first occurrence of each address
impl From<Vec<String>> for EmailList {
    fn from(addresses: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        Self(
            addresses
                .into_iter()
                .filter(|a| seen.insert(a.clone()))
                .collect(),
        )
    }
}

impl From<EmailList> for Vec<String> {
    fn from(list: EmailList) -> Self {
        list.0
    }
}

impl IntoIterator for EmailList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EmailList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Every pattern match in scan order, duplicates included
#[must_use]
pub fn extract_candidates(text: &str) -> Vec<EmailCandidate> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| EmailCandidate {
            address: m.as_str().to_string(),
            position: m.start(),
        })
        .collect()
}

/// Extract the unique email addresses from `text`
///
/// Matches never overlap and are not case-normalized. An empty list means
/// nothing matched; it is not an error.
///
/// ```rust
/// use email_list::extract;
///
/// let emails = extract("John (john@example.com), Jane <jane@test.org>, john@example.com");
/// assert_eq!(emails.as_slice(), ["john@example.com", "jane@test.org"]);
/// ```
#[must_use]
pub fn extract(text: &str) -> EmailList {
    let mut seen = HashSet::new();
    let mut total = 0usize;
    let mut unique = Vec::new();

    for m in EMAIL_REGEX.find_iter(text) {
        total += 1;
        if seen.insert(m.as_str()) {
            unique.push(m.as_str().to_string());
        }
    }

    debug!(
        "Extracted {} unique emails from {} matches ({} bytes)",
        unique.len(),
        total,
        text.len()
    );

    EmailList(unique)
}
