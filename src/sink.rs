//! Destinations that persist an export payload as a named file

use crate::error::{ExportError, Result};
use crate::export::ExportPayload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// Where a payload ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedFile {
    pub filename: String,

    /// Filesystem location, when the sink writes to disk
    pub path: Option<PathBuf>,

    pub bytes: usize,
}

/// Capability to persist a text payload under a filename
pub trait PayloadSink {
    fn persist(&mut self, filename: &str, payload: &ExportPayload) -> Result<PersistedFile>;
}

/// Reject anything that is not a single normal path component
pub fn validate_filename(filename: &str) -> Result<()> {
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None)
            if !filename.contains('/') && !filename.contains('\\') =>
        {
            Ok(())
        }
        _ => Err(ExportError::InvalidFilename(filename.to_string())),
    }
}

/// Writes payloads into a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PayloadSink for DirectorySink {
    fn persist(&mut self, filename: &str, payload: &ExportPayload) -> Result<PersistedFile> {
        validate_filename(filename)?;

        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(filename);
        fs::write(&path, payload.as_bytes()).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        info!(
            "Exported {} emails to {}",
            payload.rows(),
            path.display()
        );

        Ok(PersistedFile {
            filename: filename.to_string(),
            path: Some(path),
            bytes: payload.as_bytes().len(),
        })
    }
}

/// Streams payload bytes to any writer (stdout, a socket, a response body)
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PayloadSink for WriterSink<W> {
    fn persist(&mut self, filename: &str, payload: &ExportPayload) -> Result<PersistedFile> {
        validate_filename(filename)?;

        let io_err = |source| ExportError::Io {
            path: PathBuf::from(filename),
            source,
        };
        self.writer.write_all(payload.as_bytes()).map_err(io_err)?;
        self.writer.flush().map_err(io_err)?;

        Ok(PersistedFile {
            filename: filename.to_string(),
            path: None,
            bytes: payload.as_bytes().len(),
        })
    }
}

/// Keeps payloads in memory, keyed by filename
///
/// A later write to the same name replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl PayloadSink for MemorySink {
    fn persist(&mut self, filename: &str, payload: &ExportPayload) -> Result<PersistedFile> {
        validate_filename(filename)?;

        self.files
            .insert(filename.to_string(), payload.as_str().to_string());

        Ok(PersistedFile {
            filename: filename.to_string(),
            path: None,
            bytes: payload.as_bytes().len(),
        })
    }
}
