//! Business rules tying a model to a database family.
//!
//! [`ModelChecker`] runs after a [`JdlObject`] is built. It never fails; it
//! collects every field whose type or validation the family cannot store.

use crate::domain::{
    entities::{JdlEntity, JdlField, JdlObject},
    error::DomainError,
    field_types::{FieldTypeDef, TypeCandidate, TypeChecker, common_db_types},
    value_objects::DatabaseType,
};

/// Centralized business checks of a model against a database family.
///
/// Structural invariants (names, reserved keywords, validation payloads) are
/// enforced when the model is built. This checker covers what depends on the
/// target database: which field types exist and which validations apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelChecker {
    database: DatabaseType,
    checker: TypeChecker,
}

impl ModelChecker {
    pub const fn new(database: DatabaseType) -> Self {
        Self {
            database,
            checker: TypeChecker::for_database(database),
        }
    }

    pub const fn database(&self) -> DatabaseType {
        self.database
    }

    /// First issue found, if any.
    pub fn check(&self, object: &JdlObject) -> Result<(), DomainError> {
        match self.check_all(object).into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }

    /// Every issue, in declaration order.
    pub fn check_all(&self, object: &JdlObject) -> Vec<DomainError> {
        object
            .entities()
            .iter()
            .flat_map(|entity| {
                entity
                    .fields()
                    .iter()
                    .flat_map(move |field| self.check_field(object, entity, field))
            })
            .collect()
    }

    fn check_field(&self, object: &JdlObject, entity: &JdlEntity, field: &JdlField) -> Vec<DomainError> {
        let enumeration = object.enumeration(field.field_type());
        let candidate = match enumeration {
            Some(jdl_enum) => TypeCandidate::Enumeration(jdl_enum),
            None => TypeCandidate::Named(field.field_type()),
        };

        match self.checker.is_type(candidate) {
            Ok(true) => {}
            Ok(false) => {
                return vec![DomainError::WrongType {
                    entity: entity.name().to_string(),
                    field: field.name().to_string(),
                    field_type: field.field_type().to_string(),
                    database: self.database.to_string(),
                }];
            }
            Err(err) => return vec![err],
        }

        let row = if enumeration.is_some() {
            self.checker.find(common_db_types::ENUM)
        } else {
            self.checker.find(field.field_type())
        };
        let Some(def) = row else {
            return Vec::new();
        };
        self.check_validations(entity, field, def)
    }

    fn check_validations(
        &self,
        entity: &JdlEntity,
        field: &JdlField,
        def: &FieldTypeDef,
    ) -> Vec<DomainError> {
        field
            .validations()
            .filter(|validation| !def.supports(validation.kind()))
            .map(|validation| DomainError::WrongValidation {
                entity: entity.name().to_string(),
                field: field.name().to_string(),
                field_type: field.field_type().to_string(),
                validation: validation.name().to_string(),
            })
            .collect()
    }
}
