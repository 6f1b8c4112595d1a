//! The extension registry — the object factory that turns an extension id
//! into a fresh [`RenderExtension`] instance.
//!
//! One instance is created per invocation; extensions are never shared
//! between calls, so they may keep per-render state in `&mut self`.

use std::collections::HashMap;
use std::fmt;

use crate::error::EvalError;
use crate::extension::RenderExtension;

type Factory = Box<dyn Fn() -> Result<Box<dyn RenderExtension>, String>>;

/// Id → factory mapping for all registered rendering extensions.
#[derive(Default)]
pub struct ExtensionRegistry {
    factories: HashMap<String, Factory>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `id`, replacing any previous registration.
    ///
    /// The factory may fail with a reason string; the failure surfaces as
    /// [`EvalError::ExtensionResolution`] at evaluation time.
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Box<dyn RenderExtension>, String> + 'static,
    {
        self.factories.insert(id.into(), Box::new(factory));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Create a fresh instance of the extension registered under `id`.
    pub fn create(&self, id: &str) -> Result<Box<dyn RenderExtension>, EvalError> {
        match self.factories.get(id) {
            None => Err(EvalError::ExtensionResolution {
                id: id.to_owned(),
                reason: "no extension registered under this id".into(),
            }),
            Some(factory) => factory().map_err(|reason| EvalError::ExtensionResolution {
                id: id.to_owned(),
                reason,
            }),
        }
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("ExtensionRegistry").field("ids", &ids).finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::Invocation;
    use trellis_core::{ArgumentDefinition, Value};

    struct Noop;

    impl RenderExtension for Noop {
        fn name(&self) -> &str {
            "noop"
        }

        fn argument_definitions(&self) -> Vec<ArgumentDefinition> {
            vec![]
        }

        fn render(
            &mut self,
            _parameters: &[Value],
            _invocation: &mut Invocation<'_>,
        ) -> Result<Value, EvalError> {
            Ok(Value::Null)
        }
    }

    #[test]
    fn create_unknown_id_fails() {
        let registry = ExtensionRegistry::new();
        let err = registry.create("missing").unwrap_err();
        assert!(matches!(err, EvalError::ExtensionResolution { .. }), "got: {err}");
        assert!(err.to_string().contains("`missing`"));
    }

    #[test]
    fn create_returns_fresh_instances() {
        let mut registry = ExtensionRegistry::new();
        registry.register("noop", || Ok(Box::new(Noop)));
        assert!(registry.contains("noop"));
        registry.create("noop").expect("first instance");
        registry.create("noop").expect("second instance");
    }

    #[test]
    fn factory_failure_surfaces_as_resolution_error() {
        let mut registry = ExtensionRegistry::new();
        registry.register("broken", || Err("constructor exploded".to_string()));
        let err = registry.create("broken").unwrap_err();
        assert!(err.to_string().contains("constructor exploded"), "got: {err}");
    }

    #[test]
    fn debug_lists_registered_ids() {
        let mut registry = ExtensionRegistry::new();
        registry.register("noop", || Ok(Box::new(Noop)));
        assert!(format!("{registry:?}").contains("noop"));
    }
}
