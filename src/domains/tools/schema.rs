//! Declarative parameter tables and the shared argument validator.
//!
//! Every tool describes its inputs as a slice of [`FieldSpec`]. The same table
//! produces the JSON schema advertised to clients and drives
//! [`validate_arguments`], so there is one validator for all tools.

use rmcp::model::JsonObject;
use serde_json::{Map, Value, json};

use super::error::{ToolError, ToolResult};
use crate::domains::webmaster::ApiError;

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Non-negative whole number (paging).
    Integer,
}

impl FieldKind {
    fn json_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

/// One declared tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Argument name as sent by clients (camelCase).
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

/// Build the `inputSchema` object for a parameter table.
pub fn input_schema(fields: &[FieldSpec]) -> JsonObject {
    let properties: Map<String, Value> = fields
        .iter()
        .map(|field| {
            (
                field.name.to_string(),
                json!({
                    "type": field.kind.json_type(),
                    "description": field.description,
                }),
            )
        })
        .collect();

    let required: Vec<&str> = fields
        .iter()
        .filter(|field| field.required)
        .map(|field| field.name)
        .collect();

    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".to_string(), json!(required));
    }
    schema
}

/// Check and coerce caller arguments against a parameter table.
///
/// - required fields must be present, non-null and, for strings, non-blank
/// - numbers are accepted for string fields (IDs are often numeric)
/// - integer fields accept whole numbers written as floats (`10.0`) or as
///   strings (`"10"`, `"1e1"`) and normalize them to unsigned integers
/// - null or blank optional fields are dropped
/// - undeclared arguments are passed through untouched
pub fn validate_arguments(fields: &[FieldSpec], mut args: JsonObject) -> ToolResult<JsonObject> {
    for field in fields {
        let value = args.remove(field.name).unwrap_or(Value::Null);
        match coerce(field, value)? {
            Some(value) => {
                args.insert(field.name.to_string(), value);
            }
            None if field.required => return Err(ApiError::missing(field.name).into()),
            None => {}
        }
    }
    Ok(args)
}

/// `Ok(None)` means the field is absent for validation purposes.
fn coerce(field: &FieldSpec, value: Value) -> ToolResult<Option<Value>> {
    match (field.kind, value) {
        (_, Value::Null) => Ok(None),
        (_, Value::String(s)) if s.trim().is_empty() => Ok(None),
        (FieldKind::String, Value::String(s)) => Ok(Some(Value::String(s))),
        (FieldKind::String, Value::Number(n)) => Ok(Some(Value::String(n.to_string()))),
        (FieldKind::String, other) => Err(invalid(field, "a string", &other)),
        (FieldKind::Integer, value) => match non_negative_integer(&value) {
            Some(n) => Ok(Some(Value::from(n))),
            None => Err(invalid(field, "a non-negative integer", &value)),
        },
    }
}

fn invalid(field: &FieldSpec, expected: &str, got: &Value) -> ToolError {
    ToolError::invalid_arguments(format!(
        "parameter '{}' must be {}, got {}",
        field.name, expected, got
    ))
}

fn non_negative_integer(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let raw = s.trim();
            raw.parse::<u64>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }
}

fn whole(n: f64) -> Option<u64> {
    (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n < u64::MAX as f64).then_some(n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("userId", FieldKind::String, "User ID"),
        FieldSpec::required("hostId", FieldKind::String, "Host ID"),
        FieldSpec::optional("dateFrom", FieldKind::String, "Start date"),
        FieldSpec::optional("limit", FieldKind::Integer, "Page size"),
    ];

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("test arguments must be an object"),
        }
    }

    fn missing_field(result: ToolResult<JsonObject>) -> String {
        match result {
            Err(ToolError::Api(ApiError::Validation(field))) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_schema_from_table() {
        let schema = input_schema(FIELDS);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["userId"]["type"], "string");
        assert_eq!(schema["properties"]["limit"]["type"], "integer");
        assert_eq!(schema["properties"]["dateFrom"]["description"], "Start date");
        assert_eq!(schema["required"], json!(["userId", "hostId"]));
    }

    #[test]
    fn test_schema_without_required_fields() {
        let schema = input_schema(&[]);
        assert!(schema.get("required").is_none());
        assert_eq!(schema["properties"], json!({}));
    }

    #[test]
    fn test_missing_null_and_blank_required_fields() {
        let result = validate_arguments(FIELDS, args(json!({"hostId": "h"})));
        assert_eq!(missing_field(result), "userId");

        let result = validate_arguments(FIELDS, args(json!({"userId": null, "hostId": "h"})));
        assert_eq!(missing_field(result), "userId");

        let result = validate_arguments(FIELDS, args(json!({"userId": "42", "hostId": "  "})));
        assert_eq!(missing_field(result), "hostId");
    }

    #[test]
    fn test_coerces_numbers_and_numeric_strings() {
        let validated = validate_arguments(
            FIELDS,
            args(json!({"userId": 42, "hostId": "h", "limit": "25"})),
        )
        .unwrap();
        assert_eq!(validated["userId"], json!("42"));
        assert_eq!(validated["limit"], json!(25));
    }

    #[test]
    fn test_normalizes_whole_numbers_for_integer_fields() {
        for limit in [json!(10), json!(10.0), json!("10"), json!(" 1e1 ")] {
            let validated = validate_arguments(
                FIELDS,
                args(json!({"userId": "42", "hostId": "h", "limit": limit})),
            )
            .unwrap();
            assert_eq!(validated["limit"], json!(10u64));
        }
    }

    #[test]
    fn test_rejects_negative_and_fractional_integers() {
        for limit in [json!(-5), json!("-5"), json!(10.5), json!("2.5")] {
            let err = validate_arguments(
                FIELDS,
                args(json!({"userId": "42", "hostId": "h", "limit": limit.clone()})),
            )
            .unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(_)), "{limit}");
            assert!(
                err.to_string()
                    .contains("parameter 'limit' must be a non-negative integer"),
                "{err}"
            );
        }
    }

    #[test]
    fn test_drops_empty_optional_fields() {
        let validated = validate_arguments(
            FIELDS,
            args(json!({"userId": "42", "hostId": "h", "dateFrom": "", "limit": null})),
        )
        .unwrap();
        assert!(!validated.contains_key("dateFrom"));
        assert!(!validated.contains_key("limit"));
    }

    #[test]
    fn test_rejects_wrong_types() {
        let err = validate_arguments(
            FIELDS,
            args(json!({"userId": "42", "hostId": "h", "limit": "ten"})),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("limit"));

        let err = validate_arguments(FIELDS, args(json!({"userId": true, "hostId": "h"})))
            .unwrap_err();
        assert!(err.to_string().contains("userId"));
    }

    #[test]
    fn test_passes_through_undeclared_arguments() {
        let validated = validate_arguments(
            FIELDS,
            args(json!({"userId": "42", "hostId": "h", "extra": [1, 2]})),
        )
        .unwrap();
        assert_eq!(validated["extra"], json!([1, 2]));
    }
}
