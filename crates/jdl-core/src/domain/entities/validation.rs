//! `JdlValidation`: one constraint attached to a field.
//!
//! Validations arrive either typed (a `JdlValidation` value) or as a loose
//! [`ValidationAttributes`] bag read from a model document. The bag is checked
//! with [`JdlValidation::errors`] and converted with `TryFrom`; the typed enum
//! makes "value-bearing kind without a value" unrepresentable.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::domain::{
    error::{DomainError, DomainResult},
    value_objects::ValidationKind,
};

/// Reasons an attribute bag does not describe a validation.
pub mod reasons {
    pub const NO_VALIDATION: &str = "No validation";
    pub const NO_NAME: &str = "No name";
    pub const UNKNOWN_NAME: &str = "Unknown name";
    pub const NO_VALUE: &str = "No value";
    pub const INVALID_VALUE: &str = "Invalid value";
}

// ── Bound ────────────────────────────────────────────────────────────────────

/// The payload of a bounded validation: a literal number or the name of a
/// constant declared elsewhere in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Number(Number),
    Constant(String),
}

impl Bound {
    /// Integer bound shorthand.
    pub fn count(n: u64) -> Self {
        Self::Number(n.into())
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Self::Constant(name.into())
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Number(n) => Value::Number(n.clone()),
            Self::Constant(name) => Value::String(name.clone()),
        }
    }

    /// Parse a bag value into a bound. Count bounds accept only non-negative
    /// integers as literals.
    fn parse(value: &Value, count: bool) -> Option<Self> {
        let number = match value {
            Value::Number(n) => Some(n.clone()),
            Value::String(s) => match s.trim().parse::<Number>() {
                Ok(n) => Some(n),
                Err(_) if is_constant_name(s) => return Some(Self::Constant(s.clone())),
                Err(_) => None,
            },
            _ => None,
        }?;
        if count && number.as_u64().is_none() {
            return None;
        }
        Some(Self::Number(number))
    }
}

impl From<u64> for Bound {
    fn from(n: u64) -> Self {
        Self::count(n)
    }
}

impl From<i64> for Bound {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Constant(name) => f.write_str(name),
        }
    }
}

fn is_constant_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ── Attribute bag ────────────────────────────────────────────────────────────

/// Loose description of a validation, as found in a model document.
///
/// The empty bag (`Default`) stands for "no validation at all".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ValidationAttributes {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Neither a name nor a value.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.value.is_none()
    }

    fn present_value(&self) -> Option<&Value> {
        self.value.as_ref().filter(|v| !v.is_null())
    }
}

impl From<JdlValidation> for ValidationAttributes {
    fn from(validation: JdlValidation) -> Self {
        Self {
            name: Some(validation.kind().as_str().to_string()),
            value: validation.value(),
        }
    }
}

impl From<&JdlValidation> for ValidationAttributes {
    fn from(validation: &JdlValidation) -> Self {
        validation.clone().into()
    }
}

// ── Validation ───────────────────────────────────────────────────────────────

/// A constraint over a field's values.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum JdlValidation {
    #[default]
    Required,
    Unique,
    Min(Bound),
    Max(Bound),
    MinLength(Bound),
    MaxLength(Bound),
    /// Regular expression source, without delimiters.
    Pattern(String),
    MinBytes(Bound),
    MaxBytes(Bound),
}

impl JdlValidation {
    pub const fn kind(&self) -> ValidationKind {
        match self {
            Self::Required => ValidationKind::Required,
            Self::Unique => ValidationKind::Unique,
            Self::Min(_) => ValidationKind::Min,
            Self::Max(_) => ValidationKind::Max,
            Self::MinLength(_) => ValidationKind::MinLength,
            Self::MaxLength(_) => ValidationKind::MaxLength,
            Self::Pattern(_) => ValidationKind::Pattern,
            Self::MinBytes(_) => ValidationKind::MinBytes,
            Self::MaxBytes(_) => ValidationKind::MaxBytes,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// The payload as a dynamic value, `None` for presence-only kinds.
    pub fn value(&self) -> Option<Value> {
        match self {
            Self::Required | Self::Unique => None,
            Self::Pattern(source) => Some(Value::String(source.clone())),
            Self::Min(b)
            | Self::Max(b)
            | Self::MinLength(b)
            | Self::MaxLength(b)
            | Self::MinBytes(b)
            | Self::MaxBytes(b) => Some(b.to_value()),
        }
    }

    /// Whether `attrs` can be turned into a validation. Never fails.
    pub fn is_valid(attrs: &ValidationAttributes) -> bool {
        Self::errors(attrs).is_empty()
    }

    /// Every reason `attrs` does not describe a validation.
    pub fn errors(attrs: &ValidationAttributes) -> Vec<&'static str> {
        if attrs.is_empty() {
            return vec![reasons::NO_VALIDATION];
        }
        let Some(name) = attrs.name.as_deref().filter(|n| !n.is_empty()) else {
            return vec![reasons::NO_NAME];
        };
        let Ok(kind) = name.parse::<ValidationKind>() else {
            return vec![reasons::UNKNOWN_NAME];
        };
        if !kind.needs_value() {
            return Vec::new();
        }
        match attrs.present_value() {
            None => vec![reasons::NO_VALUE],
            Some(value) if Self::with_value(kind, value).is_none() => {
                vec![reasons::INVALID_VALUE]
            }
            Some(_) => Vec::new(),
        }
    }

    fn with_value(kind: ValidationKind, value: &Value) -> Option<Self> {
        let bound = |count| Bound::parse(value, count);
        Some(match kind {
            ValidationKind::Required => Self::Required,
            ValidationKind::Unique => Self::Unique,
            ValidationKind::Min => Self::Min(bound(false)?),
            ValidationKind::Max => Self::Max(bound(false)?),
            ValidationKind::MinLength => Self::MinLength(bound(true)?),
            ValidationKind::MaxLength => Self::MaxLength(bound(true)?),
            ValidationKind::MinBytes => Self::MinBytes(bound(true)?),
            ValidationKind::MaxBytes => Self::MaxBytes(bound(true)?),
            ValidationKind::Pattern => match value {
                Value::String(source) if !source.is_empty() => Self::Pattern(source.clone()),
                _ => return None,
            },
        })
    }
}

impl TryFrom<&ValidationAttributes> for JdlValidation {
    type Error = DomainError;

    fn try_from(attrs: &ValidationAttributes) -> DomainResult<Self> {
        let name = attrs
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DomainError::NullPointer("The validation name is mandatory.".into()))?;
        let kind: ValidationKind = name.parse()?;

        if !kind.needs_value() {
            return Ok(Self::with_value(kind, &Value::Null).unwrap_or_default());
        }
        let value = attrs
            .present_value()
            .ok_or_else(|| DomainError::InvalidObject(reasons::NO_VALUE.into()))?;
        Self::with_value(kind, value)
            .ok_or_else(|| DomainError::InvalidObject(reasons::INVALID_VALUE.into()))
    }
}

impl TryFrom<ValidationAttributes> for JdlValidation {
    type Error = DomainError;

    fn try_from(attrs: ValidationAttributes) -> DomainResult<Self> {
        Self::try_from(&attrs)
    }
}

impl fmt::Display for JdlValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required | Self::Unique => f.write_str(self.name()),
            Self::Pattern(source) => write!(f, "pattern(/{}/)", escape_slashes(source)),
            Self::Min(b)
            | Self::Max(b)
            | Self::MinLength(b)
            | Self::MaxLength(b)
            | Self::MinBytes(b)
            | Self::MaxBytes(b) => write!(f, "{}({b})", self.name()),
        }
    }
}

/// Escape every `/` not already preceded by a backslash, so the source
/// cannot close the regex literal early.
fn escape_slashes(source: &str) -> Cow<'_, str> {
    if !source.contains('/') {
        return Cow::Borrowed(source);
    }
    let mut out = String::with_capacity(source.len() + 2);
    let mut escaped = false;
    for c in source.chars() {
        if c == '/' && !escaped {
            out.push('\\');
        }
        escaped = c == '\\' && !escaped;
        out.push(c);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_required() {
        assert_eq!(JdlValidation::default(), JdlValidation::Required);
        assert_eq!(JdlValidation::default().to_string(), "required");
    }

    #[test]
    fn missing_name_is_null_pointer() {
        let attrs = ValidationAttributes {
            name: None,
            value: Some(json!(3)),
        };
        assert!(matches!(
            JdlValidation::try_from(attrs),
            Err(DomainError::NullPointer(_))
        ));
    }

    #[test]
    fn unknown_name_is_illegal_argument() {
        assert!(matches!(
            JdlValidation::try_from(ValidationAttributes::new("between")),
            Err(DomainError::IllegalArgument(_))
        ));
    }

    #[test]
    fn value_bearing_kind_without_value_is_invalid_object() {
        let err = JdlValidation::try_from(ValidationAttributes::new("min")).unwrap_err();
        assert_eq!(err, DomainError::InvalidObject("No value".into()));

        let err = JdlValidation::try_from(ValidationAttributes::new("max").with_value(Value::Null))
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidObject("No value".into()));
    }

    #[test]
    fn wrong_shaped_value_is_invalid_object() {
        let attrs = ValidationAttributes::new("minlength").with_value(true);
        assert_eq!(
            JdlValidation::try_from(&attrs).unwrap_err(),
            DomainError::InvalidObject("Invalid value".into())
        );
        let negative = ValidationAttributes::new("maxbytes").with_value(-1);
        assert!(JdlValidation::try_from(&negative).is_err());
        let empty_pattern = ValidationAttributes::new("pattern").with_value("");
        assert!(JdlValidation::try_from(&empty_pattern).is_err());
    }

    #[test]
    fn numeric_strings_and_constants_are_accepted() {
        let numeric = ValidationAttributes::new("min").with_value("42");
        assert_eq!(
            JdlValidation::try_from(numeric).unwrap(),
            JdlValidation::Min(Bound::count(42))
        );
        let constant = ValidationAttributes::new("maxlength").with_value("MAX_NAME");
        assert_eq!(
            JdlValidation::try_from(constant).unwrap(),
            JdlValidation::MaxLength(Bound::constant("MAX_NAME"))
        );
        let decimal = ValidationAttributes::new("max").with_value(json!(2.5));
        assert_eq!(
            JdlValidation::try_from(decimal).unwrap().to_string(),
            "max(2.5)"
        );
    }

    #[test]
    fn presence_kinds_ignore_value() {
        let attrs = ValidationAttributes::new("unique").with_value(12);
        assert_eq!(JdlValidation::try_from(attrs).unwrap(), JdlValidation::Unique);
    }

    #[test]
    fn errors_enumerate_reasons() {
        assert_eq!(
            JdlValidation::errors(&ValidationAttributes::default()),
            vec!["No validation"]
        );
        let nameless = ValidationAttributes {
            name: None,
            value: Some(json!(1)),
        };
        assert_eq!(JdlValidation::errors(&nameless), vec!["No name"]);
        assert_eq!(
            JdlValidation::errors(&ValidationAttributes::new("nope")),
            vec!["Unknown name"]
        );
        assert_eq!(
            JdlValidation::errors(&ValidationAttributes::new("min")),
            vec!["No value"]
        );
        assert!(JdlValidation::errors(&ValidationAttributes::new("required")).is_empty());
    }

    #[test]
    fn is_valid_never_fails() {
        assert!(!JdlValidation::is_valid(&ValidationAttributes::default()));
        assert!(JdlValidation::is_valid(
            &ValidationAttributes::new("minlength").with_value(42)
        ));
    }

    #[test]
    fn display_formats() {
        assert_eq!(JdlValidation::Unique.to_string(), "unique");
        assert_eq!(
            JdlValidation::MinLength(Bound::count(42)).to_string(),
            "minlength(42)"
        );
        assert_eq!(
            JdlValidation::Pattern("^[A-Z]+$".into()).to_string(),
            "pattern(/^[A-Z]+$/)"
        );
        assert_eq!(
            JdlValidation::Pattern("a/b".into()).to_string(),
            r"pattern(/a\/b/)"
        );
        assert_eq!(
            JdlValidation::Pattern(r"a\/b\\/c".into()).to_string(),
            r"pattern(/a\/b\\\/c/)"
        );
        assert_eq!(
            JdlValidation::Max(Bound::constant("LIMIT")).to_string(),
            "max(LIMIT)"
        );
    }

    #[test]
    fn attributes_from_typed_validation_are_valid() {
        for validation in [
            JdlValidation::Required,
            JdlValidation::Min(Bound::from(-5_i64)),
            JdlValidation::Pattern("a+".into()),
            JdlValidation::MaxBytes(Bound::count(1024)),
        ] {
            let attrs = ValidationAttributes::from(&validation);
            assert_eq!(JdlValidation::try_from(&attrs).unwrap(), validation);
        }
    }
}
