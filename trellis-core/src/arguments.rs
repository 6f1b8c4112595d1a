//! The evaluated argument set handed to an extension for one invocation.
//!
//! Built fresh by the extension-call node on every evaluation and dropped
//! when the invocation returns; never cached between renders.

use std::collections::BTreeMap;

use crate::value::Value;

/// Argument name → converted value, for exactly one extension invocation.
///
/// Only names present in the extension's declared schema ever appear here;
/// extraneous template-supplied arguments are dropped upstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluatedArguments {
    values: BTreeMap<String, Value>,
}

impl EvaluatedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for EvaluatedArguments {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
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
    fn insert_and_lookup() {
        let mut args = EvaluatedArguments::new();
        args.insert("count", json!(3));
        assert_eq!(args.get("count"), Some(&json!(3)));
        assert!(args.contains("count"));
        assert!(!args.contains("other"));
    }

    #[test]
    fn iteration_is_deterministic() {
        let args: EvaluatedArguments = [
            ("b".to_string(), json!(2)),
            ("a".to_string(), json!(1)),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = args.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
