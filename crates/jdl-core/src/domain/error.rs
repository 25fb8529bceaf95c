// ============================================================================
// domain/error.rs - DOMAIN MODEL ERRORS
// ============================================================================

use std::fmt;

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers collect them into reports)
/// - Kinded (the JDL error vocabulary: `NullPointer`, `IllegalName`, ...)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Argument Errors
    // ========================================================================
    /// A required input was missing or empty.
    #[error("{0}")]
    NullPointer(String),

    /// A name collides with a reserved keyword.
    #[error("The {context} name cannot be a reserved keyword, got: '{name}'.")]
    IllegalName { context: &'static str, name: String },

    /// A value lies outside a recognised vocabulary.
    #[error("{0}")]
    IllegalArgument(String),

    /// A nested value failed its own validity predicate.
    #[error("{0}")]
    InvalidObject(String),

    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error(
        "The type '{field_type}' of field '{field}' in entity '{entity}' is not supported by the '{database}' database."
    )]
    WrongType {
        entity: String,
        field: String,
        field_type: String,
        database: String,
    },

    #[error(
        "The validation '{validation}' of field '{field}' in entity '{entity}' does not apply to the type '{field_type}'."
    )]
    WrongValidation {
        entity: String,
        field: String,
        field_type: String,
        validation: String,
    },
}

impl DomainError {
    /// The JDL error kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullPointer(_) => ErrorKind::NullPointer,
            Self::IllegalName { .. } => ErrorKind::IllegalName,
            Self::IllegalArgument(_) => ErrorKind::IllegalArgument,
            Self::InvalidObject(_) => ErrorKind::InvalidObject,
            Self::WrongType { .. } => ErrorKind::WrongType,
            Self::WrongValidation { .. } => ErrorKind::WrongValidation,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NullPointer(msg) => vec![
                format!("Missing input: {msg}"),
                "Every field needs a name and a type; every entity and enum needs a name".into(),
            ],
            Self::IllegalName { name, .. } => vec![
                format!("'{name}' is a reserved keyword in the generated code"),
                format!("Try a prefixed or more specific name, e.g. 'my{}'", capitalize(name)),
            ],
            Self::InvalidObject(msg) if msg.contains("No value") => vec![
                "Value-bearing validations (min, max, minlength, maxlength, pattern, minbytes, maxbytes) need a value".into(),
                "Example: { name = \"minlength\", value = 3 }".into(),
            ],
            Self::WrongType { database, .. } => vec![
                format!("List the types '{database}' supports: jdl types --database {database}"),
            ],
            Self::WrongValidation { field_type, .. } => vec![format!(
                "List the validations allowed on '{field_type}': jdl types"
            )],
            _ => vec!["See the JDL documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NullPointer(_)
            | Self::IllegalName { .. }
            | Self::IllegalArgument(_)
            | Self::InvalidObject(_) => ErrorCategory::Validation,
            Self::WrongType { .. } | Self::WrongValidation { .. } => ErrorCategory::Compatibility,
        }
    }
}

/// The JDL error vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullPointer,
    IllegalName,
    IllegalArgument,
    InvalidObject,
    WrongType,
    WrongValidation,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NullPointer => "NullPointer",
            Self::IllegalName => "IllegalName",
            Self::IllegalArgument => "IllegalArgument",
            Self::InvalidObject => "InvalidObject",
            Self::WrongType => "WrongType",
            Self::WrongValidation => "WrongValidation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
}

pub type DomainResult<T> = Result<T, DomainError>;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
