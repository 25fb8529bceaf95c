//! Domain value objects: ValidationKind, DatabaseType.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO applicability logic. Which validations apply to which field
//! types lives in `field_types.rs`. This file's only job is to define the
//! types, their string representations, and their `FromStr` parsers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── ValidationKind ───────────────────────────────────────────────────────────

/// The validation vocabulary.
///
/// Declaration order is the canonical rendering order: a field prints its
/// validations sorted by this `Ord`, whatever order they were added in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidationKind {
    Required,
    Unique,
    Min,
    Max,
    MinLength,
    MaxLength,
    Pattern,
    MinBytes,
    MaxBytes,
}

impl ValidationKind {
    /// Every kind, in rendering order.
    pub const ALL: [ValidationKind; 9] = [
        Self::Required,
        Self::Unique,
        Self::Min,
        Self::Max,
        Self::MinLength,
        Self::MaxLength,
        Self::Pattern,
        Self::MinBytes,
        Self::MaxBytes,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Unique => "unique",
            Self::Min => "min",
            Self::Max => "max",
            Self::MinLength => "minlength",
            Self::MaxLength => "maxlength",
            Self::Pattern => "pattern",
            Self::MinBytes => "minbytes",
            Self::MaxBytes => "maxbytes",
        }
    }

    /// Whether this kind carries a value (`min(0)`) rather than being a bare
    /// flag (`required`).
    pub const fn needs_value(&self) -> bool {
        !matches!(self, Self::Required | Self::Unique)
    }

    /// Whether the value must be a non-negative integer when numeric.
    pub const fn is_count(&self) -> bool {
        matches!(
            self,
            Self::MinLength | Self::MaxLength | Self::MinBytes | Self::MaxBytes
        )
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                DomainError::IllegalArgument(format!("The validation '{s}' doesn't exist."))
            })
    }
}

// ── DatabaseType ─────────────────────────────────────────────────────────────

/// A database family a model can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Sql,
    Mysql,
    Mariadb,
    Postgresql,
    Oracle,
    Mssql,
    Mongodb,
    Cassandra,
}

impl DatabaseType {
    pub const ALL: [DatabaseType; 8] = [
        Self::Sql,
        Self::Mysql,
        Self::Mariadb,
        Self::Postgresql,
        Self::Oracle,
        Self::Mssql,
        Self::Mongodb,
        Self::Cassandra,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::Mysql => "mysql",
            Self::Mariadb => "mariadb",
            Self::Postgresql => "postgresql",
            Self::Oracle => "oracle",
            Self::Mssql => "mssql",
            Self::Mongodb => "mongodb",
            Self::Cassandra => "cassandra",
        }
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::NullPointer(
                "The passed database type must not be nil.".into(),
            ));
        }
        match s.to_ascii_lowercase().as_str() {
            "sql" => Ok(Self::Sql),
            "mysql" => Ok(Self::Mysql),
            "mariadb" => Ok(Self::Mariadb),
            "postgresql" | "postgres" => Ok(Self::Postgresql),
            "oracle" => Ok(Self::Oracle),
            "mssql" => Ok(Self::Mssql),
            "mongodb" | "mongo" => Ok(Self::Mongodb),
            "cassandra" => Ok(Self::Cassandra),
            _ => Err(DomainError::IllegalArgument(
                "The passed database type must either be 'sql', 'mysql', 'mariadb', \
                 'postgresql', 'oracle', 'mssql', 'mongodb', or 'cassandra'"
                    .into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_kind_order_is_rendering_order() {
        let mut kinds = vec![
            ValidationKind::Pattern,
            ValidationKind::MinLength,
            ValidationKind::Required,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                ValidationKind::Required,
                ValidationKind::MinLength,
                ValidationKind::Pattern
            ]
        );
    }

    #[test]
    fn validation_kind_parses_case_insensitively() {
        assert_eq!(
            "minLength".parse::<ValidationKind>().unwrap(),
            ValidationKind::MinLength
        );
        assert!(matches!(
            "between".parse::<ValidationKind>(),
            Err(DomainError::IllegalArgument(_))
        ));
    }

    #[test]
    fn only_flags_are_value_free() {
        let free: Vec<_> = ValidationKind::ALL
            .into_iter()
            .filter(|k| !k.needs_value())
            .collect();
        assert_eq!(free, vec![ValidationKind::Required, ValidationKind::Unique]);
    }

    #[test]
    fn database_type_accepts_aliases() {
        assert_eq!(
            "Postgres".parse::<DatabaseType>().unwrap(),
            DatabaseType::Postgresql
        );
        assert_eq!("mongo".parse::<DatabaseType>().unwrap(), DatabaseType::Mongodb);
    }

    #[test]
    fn database_type_empty_is_null_pointer() {
        assert!(matches!(
            "".parse::<DatabaseType>(),
            Err(DomainError::NullPointer(_))
        ));
        assert!(matches!(
            "couchdb".parse::<DatabaseType>(),
            Err(DomainError::IllegalArgument(_))
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for db in DatabaseType::ALL {
            assert_eq!(db.to_string().parse::<DatabaseType>().unwrap(), db);
        }
        for kind in ValidationKind::ALL {
            assert_eq!(kind.to_string().parse::<ValidationKind>().unwrap(), kind);
        }
    }
}
