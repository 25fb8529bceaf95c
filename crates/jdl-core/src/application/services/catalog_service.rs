//! Catalog Service - field type vocabularies for display.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::{DatabaseType, FieldTypeDef, TypeChecker};

/// One field type and the validations it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    pub name: String,
    pub family: String,
    pub validations: Vec<String>,
}

impl TypeInfo {
    fn from_def(def: &FieldTypeDef, checker: TypeChecker) -> Self {
        Self {
            name: def.name.to_string(),
            family: family_name(checker).to_string(),
            validations: def
                .validations
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
        }
    }
}

fn family_name(checker: TypeChecker) -> &'static str {
    match checker {
        TypeChecker::CommonDb => "commondb",
        TypeChecker::Cassandra => "cassandra",
    }
}

/// Service for type catalog queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Every type accepted by `database`, in registry order.
    #[instrument(skip(self))]
    pub fn types(&self, database: DatabaseType) -> Vec<TypeInfo> {
        let checker = TypeChecker::for_database(database);
        let types: Vec<TypeInfo> = checker
            .registry()
            .iter()
            .map(|def| TypeInfo::from_def(def, checker))
            .collect();
        debug!(count = types.len(), "Listed types");
        types
    }

    /// A single type of `database`, by exact name.
    pub fn type_info(&self, database: DatabaseType, name: &str) -> Option<TypeInfo> {
        let checker = TypeChecker::for_database(database);
        checker.find(name).map(|def| TypeInfo::from_def(def, checker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cassandra_catalog_lists_uuid() {
        let types = CatalogService::new().types(DatabaseType::Cassandra);
        assert!(types.iter().any(|t| t.name == "UUID"));
        assert!(types.iter().all(|t| t.family == "cassandra"));
    }

    #[test]
    fn sql_families_share_the_common_catalog() {
        let service = CatalogService::new();
        assert_eq!(
            service.types(DatabaseType::Sql),
            service.types(DatabaseType::Mongodb)
        );
    }

    #[test]
    fn type_info_lists_validations_in_order() {
        let info = CatalogService::new()
            .type_info(DatabaseType::Postgresql, "String")
            .unwrap();
        assert_eq!(
            info.validations,
            ["required", "unique", "minlength", "maxlength", "pattern"]
        );
        assert!(
            CatalogService::new()
                .type_info(DatabaseType::Postgresql, "UUID")
                .is_none()
        );
    }

    #[test]
    fn serializes_as_json() {
        let info = CatalogService::new()
            .type_info(DatabaseType::Cassandra, "Boolean")
            .unwrap();
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"name":"Boolean","family":"cassandra","validations":["required"]}"#
        );
    }
}
