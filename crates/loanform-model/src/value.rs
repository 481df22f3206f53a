//! Normalized field values and the forward-only context of validated fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// A value that passed its field's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }
}

/// Fields that have passed validation so far, keyed by field.
///
/// A field is present only if every one of its rules succeeded. Rules receive
/// this as a shared borrow; the engine inserts a field only after all of that
/// field's rules have run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatedFields {
    values: BTreeMap<FieldName, FieldValue>,
}

impl ValidatedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, value: FieldValue) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    pub fn text(&self, field: FieldName) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn integer(&self, field: FieldName) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_integer)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }
}
