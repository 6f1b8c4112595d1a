//! The extension-call node — where static template structure becomes
//! dynamic behavior.
//!
//! ## Invocation sequence
//!
//! 1. Resolve the extension through the registry (fresh instance per call).
//! 2. Fetch its argument schema — the authoritative list of bindable names.
//! 3. Snapshot the variable-scope identifiers.
//! 4. Evaluate declared arguments under the scoped argument-evaluation flag,
//!    converting by declared type; undeclared supplied arguments are ignored.
//! 5. `validate_arguments` → `initialize` → `render`, with the evaluated
//!    arguments, scope, controller context and node back-reference exposed
//!    through a call-scoped [`Invocation`].
//! 6. `EvalError::Render` downgrades to the message text; everything else
//!    propagates.
//! 7. Re-snapshot the identifiers and fail on a detected scope leak.

use std::collections::BTreeMap;
use std::rc::Rc;

use trellis_core::value::{self, Value};
use trellis_core::{ArgumentType, EvaluatedArguments};

use crate::context::RenderingContext;
use crate::error::EvalError;
use crate::extension::Invocation;
use crate::node::SyntaxNode;

/// A parsed invocation of a rendering extension.
///
/// Created once by the parser, evaluated zero or more times per render
/// pass. The node owns its argument expressions and child sequence; the
/// child sequence is shared by reference (`Rc`) with child-aware extensions
/// for the duration of a single call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionCallNode {
    extension_id: String,
    arguments: BTreeMap<String, SyntaxNode>,
    children: Rc<Vec<SyntaxNode>>,
}

impl ExtensionCallNode {
    /// No validation happens here: an unknown id or a malformed argument
    /// set surfaces at evaluation time, not at parse time.
    pub fn new(
        extension_id: impl Into<String>,
        arguments: BTreeMap<String, SyntaxNode>,
    ) -> Self {
        Self {
            extension_id: extension_id.into(),
            arguments,
            children: Rc::new(Vec::new()),
        }
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = Rc::new(children);
        self
    }

    /// Append one child, as the parser does while building the tree.
    pub fn add_child(&mut self, child: SyntaxNode) {
        Rc::make_mut(&mut self.children).push(child);
    }

    pub fn extension_id(&self) -> &str {
        &self.extension_id
    }

    pub fn argument_expressions(&self) -> &BTreeMap<String, SyntaxNode> {
        &self.arguments
    }

    pub fn children(&self) -> &Rc<Vec<SyntaxNode>> {
        &self.children
    }

    /// Resolve, bind and invoke the extension this node names.
    pub fn evaluate(&self, context: &mut RenderingContext) -> Result<Value, EvalError> {
        log::trace!("invoking extension `{}`", self.extension_id);
        let mut extension = context.registry().create(&self.extension_id)?;
        let definitions = extension.argument_definitions();

        let before = context.variables().borrow().all_identifiers();

        let (arguments, parameters) = context.with_argument_evaluation(|context| {
            let mut arguments = EvaluatedArguments::new();
            let mut parameters = Vec::new();
            for definition in &definitions {
                let value = match self.arguments.get(definition.name()) {
                    Some(expression) => convert_argument_value(
                        expression.evaluate(context)?,
                        definition.argument_type(),
                    ),
                    // Defaults are taken verbatim; no conversion.
                    None => definition.default_value().clone(),
                };
                if definition.is_method_parameter() {
                    parameters.push(value.clone());
                }
                arguments.insert(definition.name(), value);
            }
            Ok((arguments, parameters))
        })?;

        // Supplied arguments the schema does not declare are dropped, not
        // rejected; lenient extension authors rely on this.
        for name in self.arguments.keys() {
            if !definitions.iter().any(|definition| definition.name() == name) {
                log::debug!(
                    "extension `{}` does not declare argument `{name}`; ignoring it",
                    self.extension_id
                );
            }
        }

        extension.validate_arguments(&arguments)?;
        extension.initialize()?;

        let children = if extension.wants_child_nodes() {
            Some(Rc::clone(&self.children))
        } else {
            None
        };
        let mut invocation = Invocation::new(self, &arguments, children, context);
        let output = match extension.render(&parameters, &mut invocation) {
            Ok(value) => value,
            Err(EvalError::Render { message }) => {
                log::debug!(
                    "extension `{}` failed to render; substituting its message",
                    self.extension_id
                );
                Value::String(message)
            }
            Err(other) => return Err(other),
        };

        let after = context.variables().borrow().all_identifiers();
        // Leak heuristic: intersect the after-snapshot with the before-
        // snapshot and compare the overlap against the full before-snapshot.
        // This misses pure additions and can false-positive on reorders;
        // both quirks are long-standing behavior extensions depend on.
        let overlap: Vec<String> = after
            .iter()
            .filter(|id| before.contains(id))
            .cloned()
            .collect();
        if overlap != before {
            let identifiers: Vec<String> = before
                .iter()
                .filter(|id| !overlap.contains(id))
                .cloned()
                .collect();
            return Err(EvalError::ContextLeak {
                extension: self.extension_id.clone(),
                identifiers,
            });
        }

        Ok(output)
    }
}

/// Apply the declared-type conversion policy to one evaluated argument.
///
/// Only `boolean` carries a rule; every other type tag passes the raw value
/// through with no coercion and no validation.
fn convert_argument_value(raw: Value, argument_type: ArgumentType) -> Value {
    match argument_type {
        ArgumentType::Boolean => Value::Bool(value::coerce_boolean(&raw)),
        _ => raw,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
