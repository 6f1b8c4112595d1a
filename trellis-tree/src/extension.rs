//! The contract between the tree and pluggable rendering extensions.
//!
//! An extension is instantiated per invocation by the
//! [`ExtensionRegistry`](crate::registry::ExtensionRegistry), asked for its
//! argument schema, handed its evaluated arguments through a call-scoped
//! [`Invocation`], and finally asked to render. See
//! [`ExtensionCallNode::evaluate`](crate::call::ExtensionCallNode::evaluate)
//! for the full invocation sequence.

use std::rc::Rc;

use trellis_core::{ArgumentDefinition, EvaluatedArguments, Value};

use crate::call::ExtensionCallNode;
use crate::context::RenderingContext;
use crate::error::EvalError;
use crate::node::{self, SyntaxNode};

// ---------------------------------------------------------------------------
// RenderExtension
// ---------------------------------------------------------------------------

/// A pluggable unit of template logic, analogous to a custom tag.
pub trait RenderExtension {
    /// Canonical name of this extension, used in diagnostics.
    fn name(&self) -> &str;

    /// The authoritative argument schema, in declaration order.
    ///
    /// Only names declared here are ever bound; the order drives both
    /// argument evaluation and the positional render-parameter list.
    fn argument_definitions(&self) -> Vec<ArgumentDefinition>;

    /// Reject an unacceptable argument set before `initialize`/`render` run.
    ///
    /// The default implementation enforces the `required` flag of each
    /// declared argument.
    fn validate_arguments(&self, arguments: &EvaluatedArguments) -> Result<(), EvalError> {
        for definition in self.argument_definitions() {
            if !definition.is_required() {
                continue;
            }
            let missing = arguments
                .get(definition.name())
                .map_or(true, Value::is_null);
            if missing {
                return Err(EvalError::ArgumentValidation {
                    extension: self.name().to_owned(),
                    message: format!(
                        "required argument `{}` was not supplied",
                        definition.name()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Extension-specific setup, run after validation and before `render`.
    fn initialize(&mut self) -> Result<(), EvalError> {
        Ok(())
    }

    /// Child-node-access capability query.
    ///
    /// Extensions returning `true` receive the invoking node's child
    /// sequence (shared by reference) in their [`Invocation`] and may render
    /// it on demand, e.g. repeatedly for a loop body.
    fn wants_child_nodes(&self) -> bool {
        false
    }

    /// Produce this invocation's output value.
    ///
    /// `parameters` holds the values of method-parameter arguments in schema
    /// order. Failing with [`EvalError::Render`] degrades gracefully — the
    /// call node substitutes the message as output; any other error variant
    /// aborts the enclosing render.
    fn render(
        &mut self,
        parameters: &[Value],
        invocation: &mut Invocation<'_>,
    ) -> Result<Value, EvalError>;
}

impl std::fmt::Debug for dyn RenderExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderExtension")
            .field("name", &self.name())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Invocation
// ---------------------------------------------------------------------------

/// Everything an extension may see during one render call.
///
/// Borrowed for the duration of the call only, so nothing in here can be
/// smuggled past the invocation — the node back-reference and the child
/// sequence are unavailable once the render call returns.
pub struct Invocation<'a> {
    node: &'a ExtensionCallNode,
    arguments: &'a EvaluatedArguments,
    children: Option<Rc<Vec<SyntaxNode>>>,
    context: &'a mut RenderingContext,
}

impl<'a> Invocation<'a> {
    pub(crate) fn new(
        node: &'a ExtensionCallNode,
        arguments: &'a EvaluatedArguments,
        children: Option<Rc<Vec<SyntaxNode>>>,
        context: &'a mut RenderingContext,
    ) -> Self {
        Self { node, arguments, children, context }
    }

    /// The node being evaluated — introspection only.
    pub fn node(&self) -> &ExtensionCallNode {
        self.node
    }

    /// The evaluated, type-converted argument set for this call.
    pub fn arguments(&self) -> &EvaluatedArguments {
        self.arguments
    }

    /// The bound child sequence; `Some` only for extensions declaring the
    /// child-node-access capability. The `Rc` is a clone of the node's own
    /// sequence, never a copy of the nodes.
    pub fn children(&self) -> Option<&Rc<Vec<SyntaxNode>>> {
        self.children.as_ref()
    }

    /// The full rendering context, for nested evaluation and scope access.
    pub fn context(&mut self) -> &mut RenderingContext {
        &mut *self.context
    }

    /// Evaluate the bound child sequence.
    ///
    /// No children bound → `Null`; one child → its value unchanged; several
    /// children → their display strings concatenated. Child-aware loop
    /// extensions call this once per iteration.
    pub fn evaluate_children(&mut self) -> Result<Value, EvalError> {
        match self.children.clone() {
            None => Ok(Value::Null),
            Some(children) => node::evaluate_sequence(&children, self.context),
        }
    }
}
