//! `JdlObject`: the aggregate root of a whole model.
//!
//! An object owns its entities and enumerations in declaration order. Names
//! are unique within each collection. A field whose type names a declared
//! enumeration refers to it by name only; nothing is linked.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{
        entity::{EntityAttributes, JdlEntity},
        enumeration::{EnumAttributes, JdlEnum},
    },
    error::{DomainError, DomainResult},
};

/// Serialized form of a whole model.
///
/// ```toml
/// [[entities]]
/// name = "Book"
///
/// [[entities.fields]]
/// name = "title"
/// type = "String"
/// validations = [{ name = "required" }]
///
/// [[enums]]
/// name = "Language"
/// values = ["FRENCH", "ENGLISH"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<EntityAttributes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enums: Vec<EnumAttributes>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JdlObject {
    entities: Vec<JdlEntity>,
    enums: Vec<JdlEnum>,
}

impl JdlObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every entity and enumeration of `document`.
    ///
    /// Enumerations are added first so the order of declaration in the
    /// document does not matter.
    pub fn from_document(document: ModelDocument) -> DomainResult<Self> {
        let mut object = Self::new();
        for attrs in document.enums {
            object.add_enum(JdlEnum::new(attrs)?)?;
        }
        for attrs in document.entities {
            object.add_entity(JdlEntity::new(attrs)?)?;
        }
        Ok(object)
    }

    /// # Errors
    ///
    /// `IllegalArgument` when an entity with the same name already exists.
    pub fn add_entity(&mut self, entity: JdlEntity) -> DomainResult<&mut Self> {
        if self.entity(entity.name()).is_some() {
            return Err(DomainError::IllegalArgument(format!(
                "The entity '{}' is already declared.",
                entity.name()
            )));
        }
        self.entities.push(entity);
        Ok(self)
    }

    /// # Errors
    ///
    /// `IllegalArgument` when an enumeration with the same name already exists.
    pub fn add_enum(&mut self, jdl_enum: JdlEnum) -> DomainResult<&mut Self> {
        if self.enumeration(jdl_enum.name()).is_some() {
            return Err(DomainError::IllegalArgument(format!(
                "The enum '{}' is already declared.",
                jdl_enum.name()
            )));
        }
        self.enums.push(jdl_enum);
        Ok(self)
    }

    pub fn entities(&self) -> &[JdlEntity] {
        &self.entities
    }

    pub fn enums(&self) -> &[JdlEnum] {
        &self.enums
    }

    pub fn entity(&self, name: &str) -> Option<&JdlEntity> {
        self.entities.iter().find(|e| e.name() == name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&JdlEnum> {
        self.enums.iter().find(|e| e.name() == name)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    pub fn field_count(&self) -> usize {
        self.entities.iter().map(|e| e.fields().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.enums.is_empty()
    }
}

impl fmt::Display for JdlObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks: Vec<String> = self
            .entities
            .iter()
            .map(ToString::to_string)
            .chain(self.enums.iter().map(ToString::to_string))
            .collect();
        if blocks.is_empty() {
            return Ok(());
        }
        writeln!(f, "{}", blocks.join("\n\n"))
    }
}
