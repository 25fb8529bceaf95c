//! Field type registry.
//!
//! Each database family has one static table describing the field types it
//! accepts and, for each type, the validations that may be attached to it.
//! Every type check and applicability check is a lookup in these tables.
//!
//! # Adding a New Type
//!
//! 1. Add its name constant to [`common_db_types`] or [`cassandra_types`]
//! 2. Add one [`FieldTypeDef`] entry to the matching registry
//! 3. That's it: no `match` arms elsewhere

use crate::domain::{
    entities::enumeration::JdlEnum,
    error::{DomainError, DomainResult},
    value_objects::{DatabaseType, ValidationKind},
};

use ValidationKind::{
    Max, MaxBytes, MaxLength, Min, MinBytes, MinLength, Pattern, Required, Unique,
};

/// Type names portable across the relational (and document) databases.
pub mod common_db_types {
    pub const STRING: &str = "String";
    pub const INTEGER: &str = "Integer";
    pub const LONG: &str = "Long";
    pub const BIG_DECIMAL: &str = "BigDecimal";
    pub const FLOAT: &str = "Float";
    pub const DOUBLE: &str = "Double";
    pub const ENUM: &str = "Enum";
    pub const BOOLEAN: &str = "Boolean";
    pub const LOCAL_DATE: &str = "LocalDate";
    pub const ZONED_DATE_TIME: &str = "ZonedDateTime";
    pub const INSTANT: &str = "Instant";
    pub const BLOB: &str = "Blob";
    pub const ANY_BLOB: &str = "AnyBlob";
    pub const IMAGE_BLOB: &str = "ImageBlob";
    pub const TEXT_BLOB: &str = "TextBlob";
}

/// Type names of the Cassandra column-family model.
pub mod cassandra_types {
    pub const STRING: &str = "String";
    pub const INTEGER: &str = "Integer";
    pub const LONG: &str = "Long";
    pub const BIG_DECIMAL: &str = "BigDecimal";
    pub const FLOAT: &str = "Float";
    pub const DOUBLE: &str = "Double";
    pub const BOOLEAN: &str = "Boolean";
    pub const DATE: &str = "Date";
    pub const UUID: &str = "UUID";
    pub const INSTANT: &str = "Instant";
}

// ── Type definitions ─────────────────────────────────────────────────────────

/// One field type and the validations it supports.
#[derive(Debug, Clone, Copy)]
pub struct FieldTypeDef {
    pub name: &'static str,
    pub validations: &'static [ValidationKind],
}

impl FieldTypeDef {
    pub fn supports(&self, kind: ValidationKind) -> bool {
        self.validations.contains(&kind)
    }
}

const TEXT: &[ValidationKind] = &[Required, Unique, MinLength, MaxLength, Pattern];
const NUMERIC: &[ValidationKind] = &[Required, Unique, Min, Max];
const FLAGS: &[ValidationKind] = &[Required, Unique];
const BINARY: &[ValidationKind] = &[Required, Unique, MinBytes, MaxBytes];

/// Single source of truth for CommonDB field types.
pub static COMMON_DB_REGISTRY: &[FieldTypeDef] = &[
    FieldTypeDef { name: common_db_types::STRING, validations: TEXT },
    FieldTypeDef { name: common_db_types::INTEGER, validations: NUMERIC },
    FieldTypeDef { name: common_db_types::LONG, validations: NUMERIC },
    FieldTypeDef { name: common_db_types::BIG_DECIMAL, validations: NUMERIC },
    FieldTypeDef { name: common_db_types::FLOAT, validations: NUMERIC },
    FieldTypeDef { name: common_db_types::DOUBLE, validations: NUMERIC },
    FieldTypeDef { name: common_db_types::ENUM, validations: FLAGS },
    FieldTypeDef { name: common_db_types::BOOLEAN, validations: FLAGS },
    FieldTypeDef { name: common_db_types::LOCAL_DATE, validations: FLAGS },
    FieldTypeDef { name: common_db_types::ZONED_DATE_TIME, validations: FLAGS },
    FieldTypeDef { name: common_db_types::INSTANT, validations: FLAGS },
    FieldTypeDef { name: common_db_types::BLOB, validations: BINARY },
    FieldTypeDef { name: common_db_types::ANY_BLOB, validations: BINARY },
    FieldTypeDef { name: common_db_types::IMAGE_BLOB, validations: BINARY },
    FieldTypeDef { name: common_db_types::TEXT_BLOB, validations: FLAGS },
];

const CASSANDRA_TEXT: &[ValidationKind] = &[Required, MinLength, MaxLength, Pattern];
const CASSANDRA_NUMERIC: &[ValidationKind] = &[Required, Min, Max];
const CASSANDRA_FLAGS: &[ValidationKind] = &[Required];

/// Single source of truth for Cassandra field types.
pub static CASSANDRA_REGISTRY: &[FieldTypeDef] = &[
    FieldTypeDef { name: cassandra_types::STRING, validations: CASSANDRA_TEXT },
    FieldTypeDef { name: cassandra_types::INTEGER, validations: CASSANDRA_NUMERIC },
    FieldTypeDef { name: cassandra_types::LONG, validations: CASSANDRA_NUMERIC },
    FieldTypeDef { name: cassandra_types::BIG_DECIMAL, validations: CASSANDRA_NUMERIC },
    FieldTypeDef { name: cassandra_types::FLOAT, validations: CASSANDRA_NUMERIC },
    FieldTypeDef { name: cassandra_types::DOUBLE, validations: CASSANDRA_NUMERIC },
    FieldTypeDef { name: cassandra_types::BOOLEAN, validations: CASSANDRA_FLAGS },
    FieldTypeDef { name: cassandra_types::DATE, validations: CASSANDRA_FLAGS },
    FieldTypeDef { name: cassandra_types::UUID, validations: CASSANDRA_FLAGS },
    FieldTypeDef { name: cassandra_types::INSTANT, validations: CASSANDRA_FLAGS },
];

// ── Candidates ───────────────────────────────────────────────────────────────

/// What a type check is asked about: a type name or an enumeration.
#[derive(Debug, Clone, Copy)]
pub enum TypeCandidate<'a> {
    Named(&'a str),
    Enumeration(&'a JdlEnum),
}

impl<'a> From<&'a str> for TypeCandidate<'a> {
    fn from(name: &'a str) -> Self {
        Self::Named(name)
    }
}

impl<'a> From<&'a String> for TypeCandidate<'a> {
    fn from(name: &'a String) -> Self {
        Self::Named(name.as_str())
    }
}

impl<'a> From<&'a JdlEnum> for TypeCandidate<'a> {
    fn from(jdl_enum: &'a JdlEnum) -> Self {
        Self::Enumeration(jdl_enum)
    }
}

// ── Type checkers ────────────────────────────────────────────────────────────

/// The type predicate selected for a database family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeChecker {
    CommonDb,
    Cassandra,
}

impl TypeChecker {
    /// The type predicate for `database`.
    pub const fn for_database(database: DatabaseType) -> Self {
        match database {
            DatabaseType::Cassandra => Self::Cassandra,
            _ => Self::CommonDb,
        }
    }

    /// Run this family's type predicate.
    pub fn is_type<'a>(self, candidate: impl Into<TypeCandidate<'a>>) -> DomainResult<bool> {
        match self {
            Self::CommonDb => is_common_db_type(candidate),
            Self::Cassandra => is_cassandra_type(candidate),
        }
    }

    /// The registry backing this family.
    pub fn registry(self) -> &'static [FieldTypeDef] {
        match self {
            Self::CommonDb => COMMON_DB_REGISTRY,
            Self::Cassandra => CASSANDRA_REGISTRY,
        }
    }

    /// Look up a type by exact name in this family.
    pub fn find(self, name: &str) -> Option<&'static FieldTypeDef> {
        self.registry().iter().find(|def| def.name == name)
    }
}

// ── Lookup API ───────────────────────────────────────────────────────────────

/// Whether the candidate is a CommonDB type. Enumerations always are.
///
/// # Errors
///
/// `NullPointer` when the candidate is an empty type name.
pub fn is_common_db_type<'a>(candidate: impl Into<TypeCandidate<'a>>) -> DomainResult<bool> {
    match candidate.into() {
        TypeCandidate::Enumeration(_) => Ok(true),
        TypeCandidate::Named(name) => {
            require_type_name(name)?;
            Ok(TypeChecker::CommonDb.find(name).is_some())
        }
    }
}

/// Whether the candidate is a Cassandra type. Enumerations never are.
///
/// # Errors
///
/// `NullPointer` when the candidate is an empty type name.
pub fn is_cassandra_type<'a>(candidate: impl Into<TypeCandidate<'a>>) -> DomainResult<bool> {
    match candidate.into() {
        TypeCandidate::Enumeration(_) => Ok(false),
        TypeCandidate::Named(name) => {
            require_type_name(name)?;
            Ok(TypeChecker::Cassandra.find(name).is_some())
        }
    }
}

/// Select the type predicate for a database family name.
///
/// # Errors
///
/// `NullPointer` for an empty name, `IllegalArgument` for an unknown family.
pub fn get_is_type(database_type: &str) -> DomainResult<TypeChecker> {
    get_is_type_with(database_type, || {})
}

/// Like [`get_is_type`], running `on_unknown` before failing on an unknown
/// family. The callback never changes the returned checker.
pub fn get_is_type_with<F>(database_type: &str, on_unknown: F) -> DomainResult<TypeChecker>
where
    F: FnOnce(),
{
    match database_type.parse::<DatabaseType>() {
        Ok(database) => Ok(TypeChecker::for_database(database)),
        Err(err @ DomainError::IllegalArgument(_)) => {
            on_unknown();
            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// Whether `validation` may be attached to a field of `field_type` in any
/// database family.
///
/// # Errors
///
/// `NullPointer` when either argument is empty.
pub fn has_validation(field_type: &str, validation: &str) -> DomainResult<bool> {
    if field_type.is_empty() || validation.is_empty() {
        return Err(DomainError::NullPointer(
            "The passed type and validation must not be nil.".into(),
        ));
    }
    let Ok(kind) = validation.parse::<ValidationKind>() else {
        return Ok(false);
    };
    Ok([TypeChecker::CommonDb, TypeChecker::Cassandra]
        .into_iter()
        .filter_map(|checker| checker.find(field_type))
        .any(|def| def.supports(kind)))
}

fn require_type_name(name: &str) -> DomainResult<()> {
    if name.is_empty() {
        return Err(DomainError::NullPointer(
            "The passed type must not be nil.".into(),
        ));
    }
    Ok(())
}
