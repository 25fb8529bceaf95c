//! `JdlEntity`: a named table of fields, rendered as an `entity` block.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        comment_block,
        field::{FieldAttributes, JdlField},
    },
    error::{DomainError, DomainResult},
    reserved_keywords,
};

/// Loose description of an entity, as found in a model document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldAttributes>,
}

impl EntityAttributes {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// An entity: a named collection of fields backed by a table.
#[derive(Debug, Clone, PartialEq)]
pub struct JdlEntity {
    name: String,
    table_name: String,
    comment: Option<String>,
    fields: Vec<JdlField>,
}

impl JdlEntity {
    /// # Errors
    ///
    /// - `NullPointer` when the name is missing
    /// - `IllegalName` when the name is a reserved keyword
    /// - `IllegalArgument` when two fields share a name
    /// - any error raised while building a field
    pub fn new(attrs: EntityAttributes) -> DomainResult<Self> {
        let name = attrs
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::NullPointer("The entity name is mandatory.".into()))?;
        if reserved_keywords::is_reserved(&name) {
            return Err(DomainError::IllegalName {
                context: "entity",
                name,
            });
        }

        let mut entity = Self {
            table_name: attrs
                .table_name
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| name.clone()),
            name,
            comment: attrs.comment.filter(|c| !c.is_empty()),
            fields: Vec::with_capacity(attrs.fields.len()),
        };
        for field in attrs.fields {
            entity.add_field(JdlField::new(field)?)?;
        }
        Ok(entity)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn fields(&self) -> &[JdlField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&JdlField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// # Errors
    ///
    /// `IllegalArgument` when a field with the same name already exists.
    pub fn add_field(&mut self, field: JdlField) -> DomainResult<&mut Self> {
        if self.field(field.name()).is_some() {
            return Err(DomainError::IllegalArgument(format!(
                "The field '{}' is already declared in entity '{}'.",
                field.name(),
                self.name
            )));
        }
        self.fields.push(field);
        Ok(self)
    }

    pub fn is_valid(attrs: &EntityAttributes) -> bool {
        let Some(name) = attrs.name.as_deref() else {
            return false;
        };
        !name.is_empty()
            && !reserved_keywords::is_reserved(name)
            && attrs.fields.iter().all(JdlField::is_valid)
    }
}

impl fmt::Display for JdlEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            f.write_str(&comment_block(comment))?;
        }
        write!(f, "entity {}", self.name)?;
        if self.table_name != self.name {
            write!(f, " ({})", self.table_name)?;
        }
        if self.fields.is_empty() {
            return Ok(());
        }
        let body = self
            .fields
            .iter()
            .map(|field| indent(&field.to_string()))
            .collect::<Vec<_>>()
            .join(",\n");
        write!(f, " {{\n{body}\n}}")
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::validation::ValidationAttributes;
    use crate::domain::error::ErrorKind;

    fn book() -> EntityAttributes {
        EntityAttributes {
            fields: vec![
                FieldAttributes {
                    comment: Some("The title".into()),
                    validations: vec![ValidationAttributes::new("required")],
                    ..FieldAttributes::new("title", "String")
                },
                FieldAttributes::new("pages", "Integer"),
            ],
            ..EntityAttributes::named("Book")
        }
    }

    #[test]
    fn table_name_defaults_to_name() {
        let entity = JdlEntity::new(book()).unwrap();
        assert_eq!(entity.table_name(), "Book");
        assert_eq!(entity.fields().len(), 2);
    }

    #[test]
    fn duplicate_field_is_illegal_argument() {
        let mut attrs = book();
        attrs.fields.push(FieldAttributes::new("pages", "Long"));
        let err = JdlEntity::new(attrs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
    }

    #[test]
    fn reserved_name_is_illegal() {
        let err = JdlEntity::new(EntityAttributes::named("Package")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalName);
        assert!(!JdlEntity::is_valid(&EntityAttributes::named("package")));
    }

    #[test]
    fn field_errors_propagate() {
        let attrs = EntityAttributes {
            fields: vec![FieldAttributes::new("class", "String")],
            ..EntityAttributes::named("Book")
        };
        assert!(!JdlEntity::is_valid(&attrs));
        assert_eq!(
            JdlEntity::new(attrs).unwrap_err().kind(),
            ErrorKind::IllegalName
        );
    }

    #[test]
    fn display_indents_fields_and_comments() {
        let entity = JdlEntity::new(book()).unwrap();
        assert_eq!(
            entity.to_string(),
            "entity Book {\n  /**\n   * The title\n   */\n  title String required,\n  pages Integer\n}"
        );
    }

    #[test]
    fn display_shows_distinct_table_name() {
        let entity = JdlEntity::new(EntityAttributes {
            table_name: Some("books".into()),
            comment: Some("A book".into()),
            ..EntityAttributes::named("Book")
        })
        .unwrap();
        assert_eq!(entity.to_string(), "/**\n * A book\n */\nentity Book (books)");
    }
}
