//! Rule evaluator. Pure logic, no database access.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use validator::{ValidateLength, ValidateRange};

use super::rules::{Check, FieldRule, Presence};
use super::sanitize;
use super::FieldErrors;
use crate::error::CoreError;

/// A field value after its rule chain ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

/// Sanitized values of every present field that passed its rules.
#[derive(Debug, Default)]
pub struct Fields(BTreeMap<&'static str, FieldValue>);

impl Fields {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take an integer field, `None` if the field was absent.
    pub fn optional_int(&mut self, field: &str) -> Result<Option<i64>, CoreError> {
        match self.0.remove(field) {
            None => Ok(None),
            Some(FieldValue::Integer(n)) => Ok(Some(n)),
            Some(FieldValue::Text(_)) => Err(CoreError::Internal(format!(
                "field `{field}` has no integer conversion in its rules"
            ))),
        }
    }

    /// Take a text field, `None` if the field was absent.
    pub fn optional_text(&mut self, field: &str) -> Result<Option<String>, CoreError> {
        match self.0.remove(field) {
            None => Ok(None),
            Some(FieldValue::Text(s)) => Ok(Some(s)),
            Some(FieldValue::Integer(_)) => Err(CoreError::Internal(format!(
                "field `{field}` was converted to an integer"
            ))),
        }
    }

    /// Take an integer field declared as required.
    pub fn int(&mut self, field: &str) -> Result<i64, CoreError> {
        self.optional_int(field)?.ok_or_else(|| missing(field))
    }

    /// Take a text field declared as required.
    pub fn text(&mut self, field: &str) -> Result<String, CoreError> {
        self.optional_text(field)?.ok_or_else(|| missing(field))
    }
}

fn missing(field: &str) -> CoreError {
    CoreError::Internal(format!("validated field `{field}` is missing"))
}

/// Evaluate all rules against a single request object.
///
/// Every rule runs even after an earlier one failed, so the error map
/// reports all offending fields at once.
pub fn evaluate(rules: &[FieldRule], data: &Map<String, Value>) -> Result<Fields, FieldErrors> {
    let mut fields = Fields::default();
    let mut errors = FieldErrors::new();

    for rule in rules {
        match evaluate_rule(rule, data.get(rule.field)) {
            Ok(Some(value)) => {
                fields.0.insert(rule.field, value);
            }
            Ok(None) => {}
            Err(message) => errors.insert(rule.field, message),
        }
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(errors)
    }
}

fn evaluate_rule(
    rule: &FieldRule,
    raw: Option<&Value>,
) -> Result<Option<FieldValue>, &'static str> {
    let raw = match raw {
        None | Some(Value::Null) => {
            return match rule.presence {
                Presence::Required => Err(rule.message),
                Presence::Optional => Ok(None),
            };
        }
        Some(v) => v,
    };

    let mut value = FieldValue::Text(sanitize::stringify(raw).ok_or(rule.message)?);
    for check in rule.checks {
        value = apply(*check, value).map_err(|msg| msg.unwrap_or(rule.message))?;
    }
    Ok(Some(value))
}

fn apply(check: Check, value: FieldValue) -> Result<FieldValue, Option<&'static str>> {
    match (check, value) {
        (Check::Trim, FieldValue::Text(s)) => Ok(FieldValue::Text(s.trim().to_string())),
        (Check::NotEmpty(msg), FieldValue::Text(s)) => {
            if s.is_empty() {
                Err(msg)
            } else {
                Ok(FieldValue::Text(s))
            }
        }
        (Check::Integer(msg), FieldValue::Text(s)) => {
            if !sanitize::is_numeric(&s) {
                return Err(msg);
            }
            sanitize::to_int(&s).map(FieldValue::Integer).ok_or(msg)
        }
        (Check::GreaterThan(bound, msg), FieldValue::Integer(n)) => {
            if n.validate_range(None, None, Some(bound), None) {
                Ok(FieldValue::Integer(n))
            } else {
                Err(msg)
            }
        }
        (Check::GreaterThan(_, msg), FieldValue::Text(_)) => Err(msg),
        (Check::MaxChars(max, msg), FieldValue::Text(s)) => {
            if s.validate_length(None, Some(max), None) {
                Ok(FieldValue::Text(s))
            } else {
                Err(msg)
            }
        }
        (Check::Escape, FieldValue::Text(s)) => Ok(FieldValue::Text(sanitize::escape_html(&s))),
        // Text-only steps leave integers alone.
        (_, value @ FieldValue::Integer(_)) => Ok(value),
    }
}
