//! The rendering context — the bundle of services threaded through one
//! template render pass.
//!
//! Evaluation takes the context as an explicit `&mut` parameter; nothing is
//! late-bound onto nodes. The `Rc`/`RefCell` sharing makes the model
//! explicit: one context per render pass, single-threaded, with the variable
//! scope as the only mutable resource shared between the tree and the
//! extensions it invokes.

use std::cell::RefCell;
use std::rc::Rc;

use trellis_core::{ControllerContext, VariableScope};

use crate::error::EvalError;
use crate::registry::ExtensionRegistry;

/// Services available to every node during one render pass.
#[derive(Debug)]
pub struct RenderingContext {
    registry: Rc<ExtensionRegistry>,
    variables: Rc<RefCell<VariableScope>>,
    controller: ControllerContext,
    argument_evaluation: bool,
}

impl RenderingContext {
    pub fn new(registry: Rc<ExtensionRegistry>) -> Self {
        Self {
            registry,
            variables: Rc::new(RefCell::new(VariableScope::new())),
            controller: ControllerContext::default(),
            argument_evaluation: false,
        }
    }

    /// Replace the (empty) initial scope with pre-bound variables.
    pub fn with_variables(mut self, variables: VariableScope) -> Self {
        self.variables = Rc::new(RefCell::new(variables));
        self
    }

    pub fn with_controller(mut self, controller: ControllerContext) -> Self {
        self.controller = controller;
        self
    }

    /// The object factory for rendering extensions.
    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    /// The shared variable scope. Callers `borrow()`/`borrow_mut()` for the
    /// shortest span possible; holding a borrow across a nested evaluation
    /// will panic at runtime.
    pub fn variables(&self) -> &Rc<RefCell<VariableScope>> {
        &self.variables
    }

    pub fn controller(&self) -> &ControllerContext {
        &self.controller
    }

    /// Whether argument sub-expressions are currently being evaluated.
    ///
    /// Collaborators may use this side-channel to alter evaluation semantics
    /// (the classic use is suppressing output escaping inside arguments).
    pub fn in_argument_evaluation(&self) -> bool {
        self.argument_evaluation
    }

    /// Run `f` with the argument-evaluation flag raised.
    ///
    /// The flag is unconditionally reset to `false` afterwards, also when
    /// `f` fails. Note it resets to `false` rather than to the previous
    /// value: a nested extension call inside an argument expression lowers
    /// the flag for the remainder of the outer argument list.
    pub fn with_argument_evaluation<T, F>(&mut self, f: F) -> Result<T, EvalError>
    where
        F: FnOnce(&mut Self) -> Result<T, EvalError>,
    {
        self.argument_evaluation = true;
        let outcome = f(self);
        self.argument_evaluation = false;
        outcome
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> RenderingContext {
        RenderingContext::new(Rc::new(ExtensionRegistry::new()))
    }

    #[test]
    fn argument_evaluation_flag_is_scoped() {
        let mut ctx = context();
        assert!(!ctx.in_argument_evaluation());
        ctx.with_argument_evaluation(|ctx| {
            assert!(ctx.in_argument_evaluation());
            Ok(())
        })
        .expect("closure succeeds");
        assert!(!ctx.in_argument_evaluation());
    }

    #[test]
    fn argument_evaluation_flag_resets_on_error() {
        let mut ctx = context();
        let err = ctx.with_argument_evaluation(|_| -> Result<(), EvalError> {
            Err(EvalError::render("argument blew up"))
        });
        assert!(err.is_err());
        assert!(!ctx.in_argument_evaluation());
    }

    #[test]
    fn with_variables_seeds_the_scope() {
        let scope: VariableScope =
            [("name".to_string(), json!("ada"))].into_iter().collect();
        let ctx = context().with_variables(scope);
        assert_eq!(ctx.variables().borrow().get("name"), Some(&json!("ada")));
    }

    #[test]
    fn controller_defaults_to_empty() {
        let ctx = context();
        assert!(ctx.controller().controller_name.is_empty());
    }
}
