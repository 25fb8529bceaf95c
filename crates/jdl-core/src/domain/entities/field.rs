//! `JdlField`: a named, typed member of an entity.
//!
//! Validations are stored by kind, so adding a second `min` replaces the
//! first, and rendering follows the vocabulary order rather than insertion
//! order.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        comment_block,
        validation::{JdlValidation, ValidationAttributes},
    },
    error::{DomainError, DomainResult},
    reserved_keywords,
    value_objects::ValidationKind,
};

/// Loose description of a field, as found in a model document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<ValidationAttributes>,
}

impl FieldAttributes {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            field_type: Some(field_type.into()),
            ..Self::default()
        }
    }

    fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JdlField {
    name: String,
    field_type: String,
    comment: Option<String>,
    validations: BTreeMap<ValidationKind, JdlValidation>,
}

impl JdlField {
    /// Build a field from its attribute bag.
    ///
    /// # Errors
    ///
    /// - `NullPointer` when the name or the type is missing
    /// - `IllegalName` when the name is a reserved keyword
    /// - `InvalidObject` when a nested validation is invalid
    pub fn new(attrs: FieldAttributes) -> DomainResult<Self> {
        let name = attrs
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::NullPointer("The field name is mandatory.".into()))?;
        let field_type = attrs
            .field_type
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DomainError::NullPointer("The field type is mandatory.".into()))?;
        if reserved_keywords::is_reserved(&name) {
            return Err(DomainError::IllegalName {
                context: "field",
                name,
            });
        }

        let mut field = Self {
            name,
            field_type,
            comment: attrs.comment.filter(|c| !c.is_empty()),
            validations: BTreeMap::new(),
        };
        for validation in attrs.validations {
            field.add_validation(validation)?;
        }
        Ok(field)
    }

    /// Typed entry point: `JdlField::builder("age", "Integer").validation(...)`.
    pub fn builder(name: impl Into<String>, field_type: impl Into<String>) -> JdlFieldBuilder {
        JdlFieldBuilder {
            attrs: FieldAttributes::new(name, field_type),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Validations in rendering order.
    pub fn validations(&self) -> impl Iterator<Item = &JdlValidation> {
        self.validations.values()
    }

    pub fn validation(&self, kind: ValidationKind) -> Option<&JdlValidation> {
        self.validations.get(&kind)
    }

    pub fn validation_count(&self) -> usize {
        self.validations.len()
    }

    /// Insert a validation, replacing any existing one of the same kind.
    ///
    /// # Errors
    ///
    /// `InvalidObject` listing every reason the validation is invalid.
    pub fn add_validation(
        &mut self,
        validation: impl Into<ValidationAttributes>,
    ) -> DomainResult<&mut Self> {
        let attrs = validation.into();
        let errors = JdlValidation::errors(&attrs);
        if !errors.is_empty() {
            return Err(DomainError::InvalidObject(format!(
                "The passed validation must be valid.\nErrors: {}",
                errors.join(", ")
            )));
        }
        let validation = JdlValidation::try_from(attrs)?;
        self.validations.insert(validation.kind(), validation);
        Ok(self)
    }

    /// Whether `attrs` describes a valid field. Never fails.
    pub fn is_valid(attrs: &FieldAttributes) -> bool {
        if attrs.is_empty() {
            return false;
        }
        let (Some(name), Some(field_type)) = (attrs.name.as_deref(), attrs.field_type.as_deref())
        else {
            return false;
        };
        !name.is_empty()
            && !field_type.is_empty()
            && !reserved_keywords::is_reserved(name)
            && attrs.validations.iter().all(JdlValidation::is_valid)
    }
}

impl fmt::Display for JdlField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            f.write_str(&comment_block(comment))?;
        }
        write!(f, "{} {}", self.name, self.field_type)?;
        for validation in self.validations.values() {
            write!(f, " {validation}")?;
        }
        Ok(())
    }
}

/// Builder for [`JdlField`]; validation happens in [`JdlFieldBuilder::build`].
#[derive(Debug, Clone)]
pub struct JdlFieldBuilder {
    attrs: FieldAttributes,
}

impl JdlFieldBuilder {
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.attrs.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn validation(mut self, validation: JdlValidation) -> Self {
        self.attrs.validations.push(validation.into());
        self
    }

    pub fn build(self) -> DomainResult<JdlField> {
        JdlField::new(self.attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::validation::Bound;
    use crate::domain::error::ErrorKind;

    #[test]
    fn builds_from_attributes() {
        let field = JdlField::new(FieldAttributes {
            comment: Some("The title".into()),
            ..FieldAttributes::new("title", "String")
        })
        .unwrap();
        assert_eq!(field.name(), "title");
        assert_eq!(field.field_type(), "String");
        assert_eq!(field.comment(), Some("The title"));
        assert_eq!(field.validation_count(), 0);
    }

    #[test]
    fn missing_name_or_type_is_null_pointer() {
        let err = JdlField::new(FieldAttributes {
            field_type: Some("String".into()),
            ..FieldAttributes::default()
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullPointer);
        assert_eq!(err.to_string(), "The field name is mandatory.");

        let err = JdlField::new(FieldAttributes {
            name: Some("abc".into()),
            ..FieldAttributes::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "The field type is mandatory.");
    }

    #[test]
    fn reserved_name_is_illegal() {
        for keyword in ["class", "Abstract", "WHILE"] {
            let err = JdlField::new(FieldAttributes::new(keyword, "String")).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::IllegalName);
        }
    }

    #[test]
    fn invalid_nested_validation_fails_construction() {
        let err = JdlField::new(FieldAttributes {
            validations: vec![ValidationAttributes::new("min")],
            ..FieldAttributes::new("age", "Integer")
        })
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidObject);
    }

    #[test]
    fn is_valid_cases() {
        assert!(!JdlField::is_valid(&FieldAttributes::default()));
        assert!(!JdlField::is_valid(&FieldAttributes {
            field_type: Some("String".into()),
            ..FieldAttributes::default()
        }));
        assert!(!JdlField::is_valid(&FieldAttributes {
            name: Some("x".into()),
            ..FieldAttributes::default()
        }));
        assert!(!JdlField::is_valid(&FieldAttributes::new("class", "String")));
        assert!(!JdlField::is_valid(&FieldAttributes {
            validations: vec![ValidationAttributes::default()],
            ..FieldAttributes::new("myField", "String")
        }));
        assert!(JdlField::is_valid(&FieldAttributes::new("myField", "String")));
    }

    #[test]
    fn add_validation_rejects_empty_bag() {
        let mut field = JdlField::new(FieldAttributes::new("abc", "String")).unwrap();
        let err = field
            .add_validation(ValidationAttributes::default())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The passed validation must be valid.\nErrors: No validation"
        );
    }

    #[test]
    fn add_validation_rejects_missing_value() {
        let mut field = JdlField::new(FieldAttributes::new("abc", "String")).unwrap();
        let err = field
            .add_validation(ValidationAttributes::new("min"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidObject);
        assert_eq!(
            err.to_string(),
            "The passed validation must be valid.\nErrors: No value"
        );
    }

    #[test]
    fn add_validation_overwrites_by_kind_and_chains() {
        let mut field = JdlField::new(FieldAttributes::new("abc", "String")).unwrap();
        field
            .add_validation(JdlValidation::MaxLength(Bound::count(10)))
            .unwrap()
            .add_validation(JdlValidation::MaxLength(Bound::count(20)))
            .unwrap();
        assert_eq!(field.validation_count(), 1);
        assert_eq!(
            field.validation(ValidationKind::MaxLength),
            Some(&JdlValidation::MaxLength(Bound::count(20)))
        );
    }

    #[test]
    fn display_uses_vocabulary_order() {
        let field = JdlField::builder("abc", "String")
            .comment("comment")
            .validation(JdlValidation::MinLength(Bound::count(42)))
            .validation(JdlValidation::Required)
            .build()
            .unwrap();
        assert_eq!(
            field.to_string(),
            "/**\n * comment\n */\nabc String required minlength(42)"
        );
    }

    #[test]
    fn display_without_comment_or_validations() {
        let field = JdlField::builder("count", "Integer").build().unwrap();
        assert_eq!(field.to_string(), "count Integer");
    }

    #[test]
    fn deserializes_type_key() {
        let attrs: FieldAttributes = serde_json::from_str(
            r#"{"name":"age","type":"Integer","validations":[{"name":"min","value":0}]}"#,
        )
        .unwrap();
        let field = JdlField::new(attrs).unwrap();
        assert_eq!(field.to_string(), "age Integer min(0)");
    }
}
