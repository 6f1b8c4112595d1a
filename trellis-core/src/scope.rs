//! The variable scope — the mutable identifier → value container visible to
//! template expressions during one render pass.
//!
//! The scope is shared across the whole tree evaluation. The extension-call
//! node only ever *reads* the identifier list (for before/after leak
//! detection); extensions may read and write values.

use std::collections::BTreeMap;

use crate::value::Value;

/// Identifier → value mapping for one render pass.
///
/// Backed by a `BTreeMap` so [`all_identifiers`](VariableScope::all_identifiers)
/// is deterministic regardless of binding order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableScope {
    variables: BTreeMap<String, Value>,
}

impl VariableScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Remove the binding for `name`, returning its value if it was bound.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// All currently bound identifiers, in sorted order.
    ///
    /// This is the snapshot the extension-call node compares before and
    /// after a render to detect scope leaks.
    pub fn all_identifiers(&self) -> Vec<String> {
        self.variables.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl FromIterator<(String, Value)> for VariableScope {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { variables: iter.into_iter().collect() }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
