// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for JDL models.
//!
//! This module contains the pure model: entities, fields, enumerations,
//! validations, and the static type vocabularies they are checked against.
//! Reading documents and writing output are handled via ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Static tables**: Reserved keywords and type registries are immutable
//! - **Rich domain model**: Validation lives in the entities
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod field_types;
pub mod reserved_keywords;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    Bound, EntityAttributes, EnumAttributes, FieldAttributes, JdlEntity, JdlEnum, JdlField,
    JdlFieldBuilder, JdlObject, JdlValidation, ModelDocument, ValidationAttributes,
};

pub use error::{DomainError, DomainResult, ErrorCategory, ErrorKind};

pub use field_types::{
    FieldTypeDef, TypeCandidate, TypeChecker, get_is_type, get_is_type_with, has_validation,
    is_cassandra_type, is_common_db_type,
};

pub use value_objects::{DatabaseType, ValidationKind};

pub use validation::ModelChecker;
