//! Template value helpers.
//!
//! Template expressions evaluate to `serde_json::Value` throughout the
//! engine: it covers null/bool/number/string/array/object, serializes for
//! free, and keeps extension authors on the same type the rest of the stack
//! already speaks.

/// The value type flowing through template evaluation.
pub use serde_json::Value;

/// Coerce a value to a boolean, for arguments whose declared type is
/// [`ArgumentType::Boolean`](crate::definition::ArgumentType::Boolean).
///
/// Rules:
/// - booleans pass through unchanged;
/// - strings are `true` unless empty or case-insensitively `"false"`
///   (so `"0"` is `true` — the string is non-empty and not the literal);
/// - numbers are `true` iff strictly greater than zero;
/// - arrays and objects are `true` iff non-empty;
/// - null is `false`.
pub fn coerce_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty() && !s.eq_ignore_ascii_case("false"),
        Value::Number(n) => n.as_f64().map_or(false, |n| n > 0.0),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Null => false,
    }
}

/// Render a value into the text that ends up in template output.
///
/// Strings render bare (no surrounding quotes), null renders empty; other
/// values use their JSON representation.
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
