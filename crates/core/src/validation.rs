//! Field validator: checks one raw JSON value against its field's rule.

use serde_json::Value;
use validator::ValidateEmail;

use crate::resource::ResourceField;
use crate::types::DbId;

/// Constraint a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// A JSON string containing at least one non-whitespace character and
    /// at most `max` characters.
    NonEmptyText { max: usize },
    /// A non-empty JSON string in email syntax, at most `max` characters.
    Email { max: usize },
    /// A JSON integer strictly greater than zero.
    PositiveId,
    /// A JSON boolean.
    Boolean,
}

/// A value that passed its field's rule, narrowed to the rule's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Id(DbId),
    Flag(bool),
}

/// Why a field failed validation.
///
/// The two variants produce different client-facing messages: an unknown
/// field is always reported as `"Invalid field name"`, while a failed rule
/// names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid field name")]
    UnknownField(String),

    #[error("{message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    pub fn cannot_be_null(field: &'static str) -> Self {
        Self::InvalidValue {
            field,
            message: format!("{field} cannot be null"),
        }
    }

    fn invalid_format(field: &'static str) -> Self {
        Self::InvalidValue {
            field,
            message: format!("Invalid {field} format"),
        }
    }
}

/// Validate a raw value for the field named `name` of resource `F`.
///
/// Returns [`ValidationError::UnknownField`] when `name` is not one of `F`'s
/// fields, otherwise the result of [`validate_value`].
pub fn validate_field<F: ResourceField>(
    name: &str,
    raw: &Value,
) -> Result<(F, FieldValue), ValidationError> {
    let field =
        F::from_name(name).ok_or_else(|| ValidationError::UnknownField(name.to_string()))?;
    let value = validate_value(field, raw)?;
    Ok((field, value))
}

/// Validate a raw value against a known field's rule.
pub fn validate_value<F: ResourceField>(
    field: F,
    raw: &Value,
) -> Result<FieldValue, ValidationError> {
    let name = field.name();
    if raw.is_null() {
        return Err(ValidationError::cannot_be_null(name));
    }

    match field.rule() {
        FieldRule::NonEmptyText { max } => {
            let text = bounded_text(name, raw, max)?;
            Ok(FieldValue::Text(text.to_string()))
        }
        FieldRule::Email { max } => {
            let email = bounded_text(name, raw, max)?.to_string();
            if !email.validate_email() {
                return Err(ValidationError::invalid_format(name));
            }
            Ok(FieldValue::Text(email))
        }
        FieldRule::PositiveId => {
            let id = raw
                .as_i64()
                .ok_or_else(|| ValidationError::invalid_format(name))?;
            if id <= 0 {
                return Err(ValidationError::InvalidValue {
                    field: name,
                    message: format!("{name} must be greater than 0"),
                });
            }
            Ok(FieldValue::Id(id))
        }
        FieldRule::Boolean => raw
            .as_bool()
            .map(FieldValue::Flag)
            .ok_or_else(|| ValidationError::invalid_format(name)),
    }
}

/// A non-blank string of at most `max` characters with no NUL bytes.
fn bounded_text<'a>(
    name: &'static str,
    raw: &'a Value,
    max: usize,
) -> Result<&'a str, ValidationError> {
    let text = raw
        .as_str()
        .ok_or_else(|| ValidationError::invalid_format(name))?;
    if text.trim().is_empty() {
        return Err(ValidationError::cannot_be_null(name));
    }
    if text.contains('\0') || text.chars().count() > max {
        return Err(ValidationError::invalid_format(name));
    }
    Ok(text)
}
