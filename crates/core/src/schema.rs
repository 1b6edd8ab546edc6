// Declarative input constraints for Infomaniak operations

use serde_json::{json, Map, Value};

/// Constraint applied to a single argument field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer strictly greater than zero (resource identifiers)
    PositiveInteger,
    /// String with at least one character
    NonEmptyString,
    /// String drawn from a fixed set of values
    OneOf(&'static [&'static str]),
    /// Integer within an inclusive range
    Bounded { min: i64, max: i64 },
    /// String shaped like `local@domain.tld`
    Email,
    /// Any JSON object, passed through untouched
    Object,
}

/// A named field with its constraint and presence requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldRule {
    pub fn new(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            kind,
        }
    }

    pub fn id(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::PositiveInteger, description)
    }

    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::NonEmptyString, description)
    }

    pub fn email(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Email, description)
    }

    pub fn one_of(
        name: &'static str,
        values: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self::new(name, FieldKind::OneOf(values), description)
    }

    pub fn bounded(name: &'static str, min: i64, max: i64, description: &'static str) -> Self {
        Self::new(name, FieldKind::Bounded { min, max }, description)
    }

    pub fn object(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::Object, description)
    }

    /// Mark the field as optional. Absent optional fields stay absent.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// JSON Schema fragment describing this field
    pub fn json_schema(&self) -> Value {
        match &self.kind {
            FieldKind::PositiveInteger => json_schema_integer(self.description, Some(1), None),
            FieldKind::NonEmptyString => {
                let mut schema = json_schema_string(self.description);
                schema["minLength"] = json!(1);
                schema
            }
            FieldKind::OneOf(values) => json_schema_enum(values, self.description),
            FieldKind::Bounded { min, max } => {
                json_schema_integer(self.description, Some(*min), Some(*max))
            }
            FieldKind::Email => {
                let mut schema = json_schema_string(self.description);
                schema["format"] = json!("email");
                schema
            }
            FieldKind::Object => json!({
                "type": "object",
                "description": self.description
            }),
        }
    }
}

/// Immutable description of one operation's input shape.
///
/// Field order is significant: validation walks the fields in declaration
/// order and reports the first violation it meets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<FieldRule>,
}

impl OperationSpec {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldRule> {
        self.fields.iter().filter(|f| f.required)
    }

    /// JSON Schema advertised to MCP clients in `tools/list`
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for rule in &self.fields {
            properties.insert(rule.name.to_string(), rule.json_schema());
        }
        let required: Vec<&str> = self.required_fields().map(|f| f.name).collect();
        json_schema_object(Value::Object(properties), required)
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str, minimum: Option<i64>, maximum: Option<i64>) -> Value {
    let mut schema = json!({
        "type": "integer",
        "description": description
    });
    if let Some(min) = minimum {
        schema["minimum"] = json!(min);
    }
    if let Some(max) = maximum {
        schema["maximum"] = json!(max);
    }
    schema
}

pub fn json_schema_enum(values: &[&str], description: &str) -> Value {
    json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_schema_lists_required_fields_in_order() {
        let spec = OperationSpec::new("infomaniak_test", "Test operation")
            .field(FieldRule::string("domain", "Domain name"))
            .field(FieldRule::bounded("ttl", 60, 86400, "TTL").optional())
            .field(FieldRule::id("record_id", "Record identifier"));

        let schema = spec.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["domain", "record_id"]));
        assert_eq!(schema["properties"]["ttl"]["minimum"], 60);
        assert_eq!(schema["properties"]["ttl"]["maximum"], 86400);
        assert_eq!(schema["properties"]["record_id"]["minimum"], 1);
    }

    #[test]
    fn test_field_schemas() {
        let email = FieldRule::email("email", "Address").json_schema();
        assert_eq!(email["format"], "email");

        let kind = FieldRule::one_of("type", &["A", "AAAA"], "Record type").json_schema();
        assert_eq!(kind["enum"], json!(["A", "AAAA"]));

        let body = FieldRule::object("body", "Request body").json_schema();
        assert_eq!(body["type"], "object");
    }

    #[test]
    fn test_optional_builder() {
        let rule = FieldRule::string("comment", "Comment").optional();
        assert!(!rule.required);
        assert!(FieldRule::string("name", "Name").required);
    }
}
