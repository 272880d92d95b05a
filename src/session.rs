//! Caller-owned extraction results and the extract/export command pair

use crate::error::Result;
use crate::export::ExportPayload;
use crate::extractor::{EmailList, extract};
use crate::sink::{PayloadSink, PersistedFile};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use tracing::debug;

/// Informational outcome of an extract command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    Found { count: usize },
    NoneFound,
}

impl Notice {
    #[must_use]
    pub const fn for_count(count: usize) -> Self {
        if count == 0 {
            Self::NoneFound
        } else {
            Self::Found { count }
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { count } => write!(f, "Found {count} unique emails"),
            Self::NoneFound => write!(f, "No emails found in the text."),
        }
    }
}

/// Result of one extract command
///
/// Running extract again produces a new value; nothing is merged into a
/// previous result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    emails: EmailList,
}

impl Extraction {
    #[must_use]
    pub fn run(text: &str) -> Self {
        Self {
            emails: extract(text),
        }
    }

    #[must_use]
    pub const fn emails(&self) -> &EmailList {
        &self.emails
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.emails.len()
    }

    #[must_use]
    pub const fn notice(&self) -> Notice {
        Notice::for_count(self.emails.len())
    }

    /// Export is only offered once something was extracted
    #[must_use]
    pub const fn can_export(&self) -> bool {
        !self.emails.is_empty()
    }

    /// CSV payload, or `None` while export is disabled
    #[must_use]
    pub fn export(&self) -> Option<ExportPayload> {
        if !self.can_export() {
            debug!("Export skipped: no emails extracted");
            return None;
        }
        Some(self.emails.to_csv())
    }

    /// Export through `sink` as `filename`; `Ok(None)` while disabled
    pub fn export_to<S: PayloadSink + ?Sized>(
        &self,
        sink: &mut S,
        filename: &str,
    ) -> Result<Option<PersistedFile>> {
        self.export()
            .map(|payload| sink.persist(filename, &payload))
            .transpose()
    }

    /// Numbered listing as shown to the user, rows indexed from 1
    #[must_use]
    pub fn listing(&self) -> String {
        let mut out = format!("Extracted Emails ({})\n", self.count());

        if self.emails.is_empty() {
            out.push_str("No emails extracted yet.\n");
            return out;
        }

        let width = self.count().to_string().len();
        for (index, email) in self.emails.iter().enumerate() {
            let _ = writeln!(out, "{:>width$}. {email}", index + 1);
        }
        out
    }
}

impl From<EmailList> for Extraction {
    fn from(emails: EmailList) -> Self {
        Self { emails }
    }
}
