//! Syntax-tree nodes and the recursive evaluation contract.
//!
//! A parsed template is a tree of [`SyntaxNode`]s. Every node evaluates to a
//! [`Value`] against an explicit `&mut RenderingContext`; the interesting
//! variant is [`SyntaxNode::ExtensionCall`], which lives in
//! [`crate::call`].

use trellis_core::value::{self, Value};

use crate::call::ExtensionCallNode;
use crate::context::RenderingContext;
use crate::error::EvalError;

/// One node of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// Raw template text.
    Text(String),
    /// A literal value parsed out of the template (number, quoted string, …).
    Literal(Value),
    /// Dotted-path variable access, e.g. `users.0.name`: the first segment
    /// is looked up in the variable scope, the rest walk into the value by
    /// object key or array index.
    Variable(String),
    /// An ordered sequence of nodes, e.g. a whole template or a tag body.
    Root(Vec<SyntaxNode>),
    /// An invocation of a rendering extension.
    ExtensionCall(ExtensionCallNode),
}

impl SyntaxNode {
    /// Evaluate this node to a value.
    pub fn evaluate(&self, context: &mut RenderingContext) -> Result<Value, EvalError> {
        match self {
            SyntaxNode::Text(text) => Ok(Value::String(text.clone())),
            SyntaxNode::Literal(value) => Ok(value.clone()),
            SyntaxNode::Variable(path) => Ok(lookup_path(context, path)),
            SyntaxNode::Root(children) => evaluate_sequence(children, context),
            SyntaxNode::ExtensionCall(call) => call.evaluate(context),
        }
    }
}

/// Evaluate a node sequence with root-node flattening semantics: empty
/// sequences are `Null`, a single node passes its value through unchanged,
/// and longer sequences concatenate display strings.
pub fn evaluate_sequence(
    nodes: &[SyntaxNode],
    context: &mut RenderingContext,
) -> Result<Value, EvalError> {
    match nodes {
        [] => Ok(Value::Null),
        [only] => only.evaluate(context),
        many => {
            let mut output = String::new();
            for node in many {
                output.push_str(&value::to_display_string(&node.evaluate(context)?));
            }
            Ok(Value::String(output))
        }
    }
}

/// Resolve a dotted path against the variable scope.
///
/// Unresolvable paths evaluate to `Null` rather than failing; a template
/// referencing an unbound variable renders as empty output.
fn lookup_path(context: &RenderingContext, path: &str) -> Value {
    let mut segments = path.split('.');
    let root = match segments.next() {
        Some(root) if !root.is_empty() => root,
        _ => return Value::Null,
    };
    let scope = context.variables().borrow();
    let Some(mut current) = scope.get(root) else {
        log::trace!("variable `{root}` is not bound; evaluating to null");
        return Value::Null;
    };
    for segment in segments {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Value::Null,
        }
    }
    current.clone()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ExtensionRegistry;
    use rstest::rstest;
    use serde_json::json;
    use std::rc::Rc;
    use trellis_core::VariableScope;

    fn context_with(vars: &[(&str, Value)]) -> RenderingContext {
        let scope: VariableScope = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        RenderingContext::new(Rc::new(ExtensionRegistry::new())).with_variables(scope)
    }

    #[test]
    fn text_evaluates_to_its_string() {
        let mut ctx = context_with(&[]);
        let value = SyntaxNode::Text("hello".into()).evaluate(&mut ctx).unwrap();
        assert_eq!(value, json!("hello"));
    }

    #[test]
    fn literal_evaluates_to_itself() {
        let mut ctx = context_with(&[]);
        let value = SyntaxNode::Literal(json!(3.5)).evaluate(&mut ctx).unwrap();
        assert_eq!(value, json!(3.5));
    }

    #[test]
    fn variable_resolves_from_scope() {
        let mut ctx = context_with(&[("name", json!("ada"))]);
        let value = SyntaxNode::Variable("name".into()).evaluate(&mut ctx).unwrap();
        assert_eq!(value, json!("ada"));
    }

    #[test]
    fn variable_resolves_dotted_paths() {
        let mut ctx = context_with(&[(
            "users",
            json!([{"name": "ada"}, {"name": "grace"}]),
        )]);
        let value = SyntaxNode::Variable("users.1.name".into())
            .evaluate(&mut ctx)
            .unwrap();
        assert_eq!(value, json!("grace"));
    }

    #[rstest]
    #[case("missing")] // unbound root
    #[case("user.age")] // missing object key
    #[case("user.name.deeper")] // walking into a scalar
    #[case("users.9.name")] // index out of bounds
    #[case("users.x")] // non-numeric array index
    #[case("")] // empty path
    fn unresolvable_variable_is_null(#[case] path: &str) {
        let mut ctx = context_with(&[
            ("user", json!({"name": "ada"})),
            ("users", json!([{"name": "ada"}])),
        ]);
        let value = SyntaxNode::Variable(path.into()).evaluate(&mut ctx).unwrap();
        assert_eq!(value, Value::Null, "path: {path}");
    }

    #[test]
    fn empty_root_is_null() {
        let mut ctx = context_with(&[]);
        assert_eq!(SyntaxNode::Root(vec![]).evaluate(&mut ctx).unwrap(), Value::Null);
    }

    #[test]
    fn single_child_root_passes_value_through() {
        // A lone child keeps its type; no stringification happens.
        let mut ctx = context_with(&[]);
        let root = SyntaxNode::Root(vec![SyntaxNode::Literal(json!(42))]);
        assert_eq!(root.evaluate(&mut ctx).unwrap(), json!(42));
    }

    #[test]
    fn multi_child_root_concatenates_display_strings() {
        let mut ctx = context_with(&[("n", json!(3))]);
        let root = SyntaxNode::Root(vec![
            SyntaxNode::Text("count: ".into()),
            SyntaxNode::Variable("n".into()),
        ]);
        assert_eq!(root.evaluate(&mut ctx).unwrap(), json!("count: 3"));
    }
}
