//! Declarative request validation.
//!
//! Each endpoint declares a static list of [`FieldRule`]s. The evaluator
//! runs every rule against the incoming JSON object, sanitizing as it goes,
//! and either yields the coerced [`Fields`] or a [`FieldErrors`] map holding
//! the first failing message per field. Input types implement [`Schema`] to
//! bind a rule list to the struct built from the sanitized fields.

pub mod evaluator;
pub mod rules;
pub mod sanitize;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;

pub use evaluator::{evaluate, FieldValue, Fields};
pub use rules::{Check, FieldRule, Presence};

/// Field name to message mapping returned to clients on a 422.
///
/// Only the first failure recorded for a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// A request input whose fields are described by a static rule list.
pub trait Schema: Sized {
    /// Rules evaluated, in order, against the raw request data.
    const RULES: &'static [FieldRule];

    /// Build the typed input from fields that already passed [`Self::RULES`].
    fn from_fields(fields: Fields) -> Result<Self, CoreError>;
}

/// Run `T`'s rules against `data` and build `T` from the sanitized result.
pub fn validate<T: Schema>(data: &Map<String, Value>) -> Result<T, CoreError> {
    let fields = evaluate(T::RULES, data).map_err(CoreError::Validation)?;
    T::from_fields(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_message() {
        let mut errors = FieldErrors::new();
        errors.insert("tipo", "first");
        errors.insert("tipo", "second");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("tipo"), Some("first"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut errors = FieldErrors::new();
        errors.insert("capacidad", "La capacidad debe ser mayor a 0");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"capacidad": "La capacidad debe ser mayor a 0"})
        );
    }

    #[test]
    fn display_joins_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("b", "two");
        errors.insert("a", "one");

        assert_eq!(errors.to_string(), "a: one; b: two");
    }
}
