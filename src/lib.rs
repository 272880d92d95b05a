// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email List Generator
//!
//! Pulls email addresses out of arbitrary pasted text, deduplicates them in
//! order of first appearance, and exports the result as a one-column CSV.
//!
//! # Features
//!
//! - Permissive pattern matching; any input yields a (possibly empty) list
//! - Order-preserving, case-sensitive deduplication
//! - CSV export with a fixed `Email Address` header
//! - Pluggable sinks for saving the export (directory, writer, memory)
//!
//! # Example
//!
//! ```rust
//! use email_list::{Extraction, MemorySink, DEFAULT_FILENAME};
//!
//! let extraction = Extraction::run("John (john@example.com), Jane <jane@test.org>");
//! assert_eq!(extraction.notice().to_string(), "Found 2 unique emails");
//!
//! let mut sink = MemorySink::new();
//! extraction.export_to(&mut sink, DEFAULT_FILENAME).unwrap();
//! assert_eq!(
//!     sink.get(DEFAULT_FILENAME),
//!     Some("Email Address\njohn@example.com\njane@test.org")
//! );
//! ```

mod error;
mod export;
mod extractor;
mod session;
mod sink;

pub use error::{ExportError, Result};
pub use export::{CSV_HEADER, CSV_MEDIA_TYPE, DEFAULT_FILENAME, ExportPayload, to_csv};
pub use extractor::{EmailCandidate, EmailList, extract, extract_candidates};
pub use session::{Extraction, Notice};
pub use sink::{DirectorySink, MemorySink, PayloadSink, PersistedFile, WriterSink, validate_filename};
