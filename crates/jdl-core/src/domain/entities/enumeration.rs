//! `JdlEnum`: a named, ordered list of constants.
//!
//! Values are kept exactly as added: duplicates and empty strings are allowed
//! here and left to downstream consumers.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    entities::comment_block,
    error::{DomainError, DomainResult},
    reserved_keywords,
};

/// Loose description of an enumeration, as found in a model document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl EnumAttributes {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdlEnum {
    name: String,
    values: Vec<String>,
    comment: Option<String>,
}

impl JdlEnum {
    /// Build an enumeration from its attribute bag.
    ///
    /// # Errors
    ///
    /// - `NullPointer` when the name is missing or a value is null
    /// - `IllegalName` when the name is a reserved keyword
    pub fn new(attrs: EnumAttributes) -> DomainResult<Self> {
        let name = attrs
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::NullPointer("The enum name is mandatory.".into()))?;
        if reserved_keywords::is_reserved(&name) {
            return Err(DomainError::IllegalName {
                context: "enum",
                name,
            });
        }

        let mut jdl_enum = Self {
            name,
            values: Vec::with_capacity(attrs.values.len()),
            comment: attrs.comment.filter(|c| !c.is_empty()),
        };
        for value in attrs.values {
            jdl_enum.add_value(value)?;
        }
        Ok(jdl_enum)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Append a value, coerced to its string form.
    ///
    /// # Errors
    ///
    /// `NullPointer` when the value is null.
    pub fn add_value(&mut self, value: impl Into<Value>) -> DomainResult<&mut Self> {
        let value = coerce(value.into()).ok_or_else(|| {
            DomainError::NullPointer("A valid value must be passed, got nil.".into())
        })?;
        self.values.push(value);
        Ok(self)
    }

    /// Whether `attrs` describes a valid enumeration. Values are not inspected.
    pub fn is_valid(attrs: &EnumAttributes) -> bool {
        attrs
            .name
            .as_deref()
            .is_some_and(|name| !name.is_empty() && !reserved_keywords::is_reserved(name))
    }
}

fn coerce(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

impl fmt::Display for JdlEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            f.write_str(&comment_block(comment))?;
        }
        writeln!(f, "enum {} {{", self.name)?;
        let body = self
            .values
            .iter()
            .map(|v| format!("  {v}"))
            .collect::<Vec<_>>()
            .join(",\n");
        if !body.is_empty() {
            writeln!(f, "{body}")?;
        }
        f.write_str("}")
    }
}
