//! Infrastructure adapters for jdl.
//!
//! This crate implements the ports defined in `jdl-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod model_reader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use model_reader::{DocumentError, DocumentFormat, FileModelReader};
