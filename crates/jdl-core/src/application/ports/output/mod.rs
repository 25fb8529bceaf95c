//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `jdl-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::ModelDocument;
use crate::error::JdlResult;

/// Port for reading model documents.
///
/// Implemented by:
/// - `jdl_adapters::FileModelReader` (TOML and JSON documents on disk)
#[cfg_attr(test, mockall::automock)]
pub trait ModelReader: Send + Sync {
    /// Parse the model document at `path`.
    fn read(&self, path: &Path) -> JdlResult<ModelDocument>;

    /// List every model document under `dir`, sorted.
    fn discover(&self, dir: &Path) -> JdlResult<Vec<PathBuf>>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `jdl_adapters::filesystem::LocalFilesystem` (production)
/// - `jdl_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> JdlResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> JdlResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
