//! Trellis core library — template value helpers, the variable scope, and
//! the extension argument schema.
//!
//! Public API surface:
//! - [`value`] — [`Value`] alias and coercion/display helpers
//! - [`scope`] — [`VariableScope`], the mutable identifier → value container
//! - [`definition`] — [`ArgumentType`] and [`ArgumentDefinition`]
//! - [`arguments`] — [`EvaluatedArguments`], one evaluated argument set
//! - [`controller`] — [`ControllerContext`], the request-side context bundle
//!
//! Everything here is plain data: evaluation lives in `trellis-tree`.

pub mod arguments;
pub mod controller;
pub mod definition;
pub mod scope;
pub mod value;

pub use arguments::EvaluatedArguments;
pub use controller::ControllerContext;
pub use definition::{ArgumentDefinition, ArgumentType};
pub use scope::VariableScope;
pub use value::Value;
