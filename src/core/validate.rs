// Shape predicates applied before any filesystem work. Pure, no error
// detail; callers reconstruct the failure from context.
use serde_json::Value;

/// True iff the value is a key/value mapping. Arrays, null, and every other
/// JSON type fail the check, valid JSON or not.
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// True iff the text parses as JSON *and* the top-level value is a plain
/// object. `"true"`, `"[1,2]"`, and `"null"` are valid JSON but not valid
/// here.
pub fn is_valid_json_object_str(text: &str) -> bool {
    serde_json::from_str::<Value>(text)
        .map(|value| is_plain_object(&value))
        .unwrap_or(false)
}
