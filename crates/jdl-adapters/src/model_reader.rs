//! Filesystem-based model document reader.
//!
//! Parses model documents into the [`ModelDocument`] attribute-bag form the
//! domain builds from. The format is chosen by extension.
//!
//! # Directory layout expected
//!
//! ```text
//! models/
//! ├── library.toml
//! ├── billing/
//! │   └── invoice.json
//! └── README.md          ← ignored
//! ```
//!
//! # `*.toml` format
//!
//! ```toml
//! [[enums]]
//! name    = "Language"
//! comment = "The language enumeration."
//! values  = ["FRENCH", "ENGLISH"]
//!
//! [[entities]]
//! name       = "Book"
//! table_name = "books"       # optional, defaults to the name
//!
//! [[entities.fields]]
//! name        = "title"
//! type        = "String"
//! validations = [{ name = "required" }, { name = "maxlength", value = 120 }]
//! ```
//!
//! `*.json` documents use the same keys.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use jdl_core::{
    application::{ApplicationError, ports::ModelReader},
    domain::ModelDocument,
    error::JdlResult,
};

use crate::filesystem::local::map_io_error;

/// Why a document could not be parsed.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A supported model document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 2] = [Self::Toml, Self::Json];

    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Format for `path`, by extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }

    /// Parse `raw` as a model document.
    pub fn parse(&self, raw: &str) -> Result<ModelDocument, DocumentError> {
        Ok(match self {
            Self::Toml => toml::from_str(raw)?,
            Self::Json => serde_json::from_str(raw)?,
        })
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Reads model documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileModelReader;

impl FileModelReader {
    pub fn new() -> Self {
        Self
    }
}

impl ModelReader for FileModelReader {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn read(&self, path: &Path) -> JdlResult<ModelDocument> {
        let format = DocumentFormat::from_path(path).ok_or_else(|| {
            ApplicationError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;

        let raw = fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read model"))?;
        let document = format
            .parse(&raw)
            .map_err(|e| ApplicationError::ModelLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(
            %format,
            entities = document.entities.len(),
            enums = document.enums.len(),
            "Parsed model document"
        );
        Ok(document)
    }

    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn discover(&self, dir: &Path) -> JdlResult<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for walk_entry in WalkDir::new(dir).min_depth(1) {
            let entry = match walk_entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && DocumentFormat::from_path(entry.path()).is_some() {
                paths.push(entry.into_path());
            }
        }

        paths.sort();
        debug!(count = paths.len(), "Discovered model documents");
        Ok(paths)
    }
}
