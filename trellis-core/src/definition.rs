//! The argument schema a rendering extension declares for itself.
//!
//! A schema is an ordered list of [`ArgumentDefinition`]s; the order is the
//! extension's own declaration order and drives both argument evaluation and
//! the positional render-parameter list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

// ---------------------------------------------------------------------------
// ArgumentType
// ---------------------------------------------------------------------------

/// Declared type tag of one extension argument.
///
/// Only [`ArgumentType::Boolean`] carries a conversion rule; every other tag
/// passes the evaluated value through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    Boolean,
    String,
    Integer,
    Float,
    Array,
    Object,
    #[default]
    Mixed,
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentType::Boolean => write!(f, "boolean"),
            ArgumentType::String => write!(f, "string"),
            ArgumentType::Integer => write!(f, "integer"),
            ArgumentType::Float => write!(f, "float"),
            ArgumentType::Array => write!(f, "array"),
            ArgumentType::Object => write!(f, "object"),
            ArgumentType::Mixed => write!(f, "mixed"),
        }
    }
}

// ---------------------------------------------------------------------------
// ArgumentDefinition
// ---------------------------------------------------------------------------

/// Schema entry for one named extension argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    name: String,
    #[serde(rename = "type")]
    argument_type: ArgumentType,
    #[serde(default)]
    description: String,
    #[serde(default)]
    required: bool,
    /// Used verbatim when the template supplies no expression for this
    /// argument — defaults bypass type conversion.
    #[serde(default)]
    default: Value,
    /// Whether the (possibly defaulted) value is also passed positionally to
    /// the extension's render operation.
    #[serde(default)]
    method_parameter: bool,
}

impl ArgumentDefinition {
    pub fn new(
        name: impl Into<String>,
        argument_type: ArgumentType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            argument_type,
            description: description.into(),
            required: false,
            default: Value::Null,
            method_parameter: false,
        }
    }

    /// Mark the argument as required; validation fails when it is missing.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// Mark the argument as a positional parameter of the render operation.
    pub fn method_parameter(mut self) -> Self {
        self.method_parameter = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument_type(&self) -> ArgumentType {
        self.argument_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub fn is_method_parameter(&self) -> bool {
        self.method_parameter
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_defaults() {
        let def = ArgumentDefinition::new("count", ArgumentType::Integer, "iteration count");
        assert_eq!(def.name(), "count");
        assert_eq!(def.argument_type(), ArgumentType::Integer);
        assert!(!def.is_required());
        assert!(!def.is_method_parameter());
        assert_eq!(def.default_value(), &Value::Null);
    }

    #[test]
    fn builder_flags() {
        let def = ArgumentDefinition::new("each", ArgumentType::Array, "items")
            .required()
            .with_default(json!([]))
            .method_parameter();
        assert!(def.is_required());
        assert!(def.is_method_parameter());
        assert_eq!(def.default_value(), &json!([]));
    }

    #[test]
    fn type_tags_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ArgumentType::Boolean).unwrap(), "\"boolean\"");
        assert_eq!(serde_json::to_string(&ArgumentType::Mixed).unwrap(), "\"mixed\"");
        let parsed: ArgumentType = serde_json::from_str("\"integer\"").unwrap();
        assert_eq!(parsed, ArgumentType::Integer);
    }

    #[test]
    fn type_display_matches_tag() {
        assert_eq!(ArgumentType::Boolean.to_string(), "boolean");
        assert_eq!(ArgumentType::Float.to_string(), "float");
    }

    #[test]
    fn definition_serde_roundtrip() {
        let def = ArgumentDefinition::new("flag", ArgumentType::Boolean, "on/off switch")
            .with_default(json!(false));
        let encoded = serde_json::to_string(&def).expect("serialize");
        assert!(encoded.contains("\"type\":\"boolean\""));
        let decoded: ArgumentDefinition = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, def);
    }
}
