// Argument validation against an OperationSpec

use crate::schema::{FieldKind, FieldRule, OperationSpec};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// First constraint violation found while validating an argument bag.
///
/// Rendered as `"<field>: <reason>"`, e.g. `"account_id: account_id is required"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(field, format!("{} is required", field))
    }

    fn violation(field: &str, constraint: impl std::fmt::Display) -> Self {
        Self::new(field, format!("{} {}", field, constraint))
    }
}

/// Arguments that passed every rule of their operation.
///
/// Only declared fields survive; undeclared keys from the raw bag are dropped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidatedArgs {
    fields: Map<String, Value>,
}

impl ValidatedArgs {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Convert into the typed argument struct of an operation.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ValidationError> {
        serde_json::from_value(self.into_value())
            .map_err(|e| ValidationError::new("arguments", format!("arguments {}", e)))
    }
}

/// Apply `spec` to a raw argument bag.
///
/// Fields are checked in declaration order and the first violation is
/// returned. `None` and `null` bags count as an empty object.
pub fn validate(spec: &OperationSpec, raw: Option<&Value>) -> Result<ValidatedArgs, ValidationError> {
    let empty = Map::new();
    let bag = match raw {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(ValidationError::violation("arguments", "must be an object"));
        }
    };

    let mut fields = Map::new();
    for rule in &spec.fields {
        match bag.get(rule.name) {
            None if rule.required => return Err(ValidationError::required(rule.name)),
            None => {}
            Some(value) => {
                check_field(rule, value)?;
                fields.insert(rule.name.to_string(), value.clone());
            }
        }
    }

    Ok(ValidatedArgs { fields })
}

fn check_field(rule: &FieldRule, value: &Value) -> Result<(), ValidationError> {
    let name = rule.name;
    match &rule.kind {
        FieldKind::PositiveInteger => match value.as_u64() {
            Some(n) if n > 0 => Ok(()),
            _ => Err(ValidationError::violation(name, "must be a positive integer")),
        },
        FieldKind::NonEmptyString => match value.as_str() {
            Some("") => Err(ValidationError::violation(name, "must not be empty")),
            Some(_) => Ok(()),
            None => Err(ValidationError::violation(name, "must be a string")),
        },
        FieldKind::OneOf(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => Ok(()),
            Some(_) => Err(ValidationError::violation(
                name,
                format!("must be one of: {}", allowed.join(", ")),
            )),
            None => Err(ValidationError::violation(name, "must be a string")),
        },
        FieldKind::Bounded { min, max } => match value.as_i64() {
            Some(n) if n < *min => {
                Err(ValidationError::violation(name, format!("must be at least {}", min)))
            }
            Some(n) if n > *max => {
                Err(ValidationError::violation(name, format!("must be at most {}", max)))
            }
            Some(_) => Ok(()),
            None => Err(ValidationError::violation(name, "must be an integer")),
        },
        FieldKind::Email => match value.as_str() {
            Some(s) if is_email_shaped(s) => Ok(()),
            Some(_) => Err(ValidationError::violation(name, "must be a valid email address")),
            None => Err(ValidationError::violation(name, "must be a string")),
        },
        FieldKind::Object => match value {
            Value::Object(_) => Ok(()),
            _ => Err(ValidationError::violation(name, "must be an object")),
        },
    }
}

/// Shape check only: one `@`, non-empty local part, dotted domain, no spaces.
fn is_email_shaped(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
