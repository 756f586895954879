//! Validated field sets for create and partial-update requests.
//!
//! A [`FieldSet`] only exists once every entry in the request body has
//! passed validation, so the repository layer never sees a partially
//! validated update. Applying the set is a single write in the repository.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::resource::ResourceField;
use crate::types::DbId;
use crate::validation::{validate_value, FieldValue, ValidationError};

/// A set of validated values keyed by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet<F> {
    values: BTreeMap<F, FieldValue>,
}

impl<F: ResourceField> FieldSet<F> {
    /// Validate a partial-update body.
    ///
    /// Any subset of `F`'s fields may be present. All keys are checked
    /// before any value, so an unknown field is reported even when another
    /// entry also carries a bad value. Nothing is returned unless every
    /// entry passes. An empty body yields an empty set.
    pub fn partial(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut known = Vec::with_capacity(body.len());
        for (name, raw) in body {
            let field =
                F::from_name(name).ok_or_else(|| ValidationError::UnknownField(name.clone()))?;
            known.push((field, raw));
        }

        let mut values = BTreeMap::new();
        for (field, raw) in known {
            values.insert(field, validate_value(field, raw)?);
        }
        Ok(Self { values })
    }

    /// Validate a create body.
    ///
    /// Every field of `F` must be present and valid. Fields are checked in
    /// declaration order and the first failure is returned. Keys that are
    /// not fields of `F` (an echoed `id`, timestamps) are ignored.
    pub fn complete(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut values = BTreeMap::new();
        for &field in F::ALL {
            let raw = body
                .get(field.name())
                .ok_or_else(|| ValidationError::cannot_be_null(field.name()))?;
            values.insert(field, validate_value(field, raw)?);
        }
        Ok(Self { values })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields present in the set, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.values.keys().copied()
    }

    /// Remove a text value. `None` if the field is absent or not text.
    pub fn take_text(&mut self, field: F) -> Option<String> {
        match self.values.remove(&field)? {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Remove an id value. `None` if the field is absent or not an id.
    pub fn take_id(&mut self, field: F) -> Option<DbId> {
        match self.values.remove(&field)? {
            FieldValue::Id(id) => Some(id),
            _ => None,
        }
    }

    /// Remove a boolean value. `None` if the field is absent or not a flag.
    pub fn take_flag(&mut self, field: F) -> Option<bool> {
        match self.values.remove(&field)? {
            FieldValue::Flag(flag) => Some(flag),
            _ => None,
        }
    }

    /// Like [`take_text`](Self::take_text) but for fields a create body
    /// must carry.
    pub fn require_text(&mut self, field: F) -> Result<String, ValidationError> {
        self.take_text(field)
            .ok_or_else(|| ValidationError::cannot_be_null(field.name()))
    }

    pub fn require_id(&mut self, field: F) -> Result<DbId, ValidationError> {
        self.take_id(field)
            .ok_or_else(|| ValidationError::cannot_be_null(field.name()))
    }

    pub fn require_flag(&mut self, field: F) -> Result<bool, ValidationError> {
        self.take_flag(field)
            .ok_or_else(|| ValidationError::cannot_be_null(field.name()))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::resource::{ActivityGroupField, TodoItemField};

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    // --- Partial ---

    #[test]
    fn partial_accepts_single_valid_field() {
        let mut set =
            FieldSet::<ActivityGroupField>::partial(&body(json!({"title": "Plan v2"}))).unwrap();
        assert_eq!(set.take_text(ActivityGroupField::Email), None);
        assert_eq!(
            set.take_text(ActivityGroupField::Title).as_deref(),
            Some("Plan v2")
        );
        assert!(set.is_empty());
    }

    #[test]
    fn partial_accepts_every_todo_field_at_once() {
        let set = FieldSet::<TodoItemField>::partial(&body(json!({
            "activity_group_id": 2,
            "title": "Buy milk",
            "is_active": false,
            "priority": "high",
        })))
        .unwrap();
        assert_eq!(set.fields().collect::<Vec<_>>(), TodoItemField::ALL.to_vec());
    }

    #[test]
    fn partial_empty_body_is_empty_set() {
        let set = FieldSet::<TodoItemField>::partial(&Map::new()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn partial_unknown_field_rejects_whole_body() {
        let err = FieldSet::<ActivityGroupField>::partial(&body(json!({
            "title": "ok",
            "colour": "red",
        })))
        .unwrap_err();
        assert_matches!(err, ValidationError::UnknownField(ref name) if name == "colour");
    }

    #[test]
    fn partial_unknown_field_wins_over_invalid_value() {
        let err = FieldSet::<ActivityGroupField>::partial(&body(json!({
            "email": "nope",
            "zzz": 1,
        })))
        .unwrap_err();
        assert_matches!(err, ValidationError::UnknownField(_));
    }

    #[test]
    fn partial_one_invalid_value_rejects_whole_body() {
        let err = FieldSet::<TodoItemField>::partial(&body(json!({
            "title": "fine",
            "activity_group_id": 0,
        })))
        .unwrap_err();
        assert_matches!(
            err,
            ValidationError::InvalidValue { field: "activity_group_id", .. }
        );
    }

    #[test]
    fn partial_rejects_immutable_columns() {
        for key in ["id", "created_at", "createdAt", "updatedAt"] {
            let mut map = Map::new();
            map.insert(key.to_string(), json!(1));
            let err = FieldSet::<ActivityGroupField>::partial(&map).unwrap_err();
            assert_matches!(err, ValidationError::UnknownField(_));
        }
    }

    // --- Complete ---

    #[test]
    fn complete_requires_every_field() {
        let err = FieldSet::<TodoItemField>::complete(&body(json!({
            "activity_group_id": 1,
            "title": "t",
            "is_active": true,
        })))
        .unwrap_err();
        assert_eq!(err.to_string(), "priority cannot be null");
    }

    #[test]
    fn complete_reports_first_field_in_declaration_order() {
        let err =
            FieldSet::<ActivityGroupField>::complete(&body(json!({"email": "bad"}))).unwrap_err();
        assert_eq!(err.to_string(), "title cannot be null");
    }

    #[test]
    fn complete_ignores_unrecognised_keys() {
        let mut set = FieldSet::<ActivityGroupField>::complete(&body(json!({
            "id": 99,
            "title": "Plan",
            "email": "a@b.com",
            "createdAt": "2020-01-01T00:00:00Z",
        })))
        .unwrap();
        assert_eq!(set.require_text(ActivityGroupField::Title).unwrap(), "Plan");
        assert_eq!(set.require_text(ActivityGroupField::Email).unwrap(), "a@b.com");
        assert!(set.is_empty());
    }

    #[test]
    fn complete_rejects_zero_activity_group_id() {
        let err = FieldSet::<TodoItemField>::complete(&body(json!({
            "activity_group_id": 0,
            "title": "t",
            "is_active": true,
            "priority": "p",
        })))
        .unwrap_err();
        assert_eq!(err.to_string(), "activity_group_id must be greater than 0");
    }

    // --- Accessors ---

    #[test]
    fn take_removes_the_value() {
        let mut set = FieldSet::<TodoItemField>::partial(&body(json!({
            "is_active": true,
            "activity_group_id": 4,
        })))
        .unwrap();
        assert_eq!(set.take_flag(TodoItemField::IsActive), Some(true));
        assert_eq!(set.take_flag(TodoItemField::IsActive), None);
        assert_eq!(set.take_id(TodoItemField::ActivityGroupId), Some(4));
        assert!(set.is_empty());
    }

    #[test]
    fn require_on_missing_field_reports_null() {
        let mut set = FieldSet::<TodoItemField>::partial(&Map::new()).unwrap();
        let err = set.require_flag(TodoItemField::IsActive).unwrap_err();
        assert_eq!(err.to_string(), "is_active cannot be null");
    }
}
