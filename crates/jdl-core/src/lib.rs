//! JDL Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for working with
//! JDL ("JHipster Domain Language") models, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             jdl-cli (CLI)               │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ModelService, CatalogService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (Driven: ModelReader, Filesystem)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      jdl-adapters (Infrastructure)      │
//! │ (FileModelReader, LocalFilesystem, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (JdlField, JdlEnum, JdlValidation...)  │
//! │         No I/O, no logging              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use jdl_core::domain::{Bound, JdlField, JdlValidation};
//!
//! let field = JdlField::builder("title", "String")
//!     .comment("The title")
//!     .validation(JdlValidation::MaxLength(Bound::count(120)))
//!     .validation(JdlValidation::Required)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     field.to_string(),
//!     "/**\n * The title\n */\ntitle String required maxlength(120)"
//! );
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, CheckReport, ModelService, TypeInfo,
        ports::{Filesystem, ModelReader},
    };
    pub use crate::domain::{
        Bound, DatabaseType, EntityAttributes, EnumAttributes, FieldAttributes, JdlEntity,
        JdlEnum, JdlField, JdlObject, JdlValidation, ModelChecker, ModelDocument, TypeChecker,
        ValidationAttributes, ValidationKind,
    };
    pub use crate::error::{JdlError, JdlResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
