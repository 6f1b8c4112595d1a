//! # trellis-tree
//!
//! Syntax-tree evaluation for the Trellis template engine: node types, the
//! extension-call node, the [`RenderExtension`] contract, the extension
//! registry and the per-pass rendering context.
//!
//! Evaluation is single-threaded, synchronous and depth-first; a rendering
//! context (and the `Rc`/`RefCell` scope inside it) belongs to exactly one
//! render pass on one thread.
//!
//! ## Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use trellis_tree::{ExtensionRegistry, RenderingContext, SyntaxNode};
//!
//! # fn main() -> Result<(), trellis_tree::EvalError> {
//! let registry = Rc::new(ExtensionRegistry::new());
//! let mut context = RenderingContext::new(registry);
//!
//! let tree = SyntaxNode::Root(vec![
//!     SyntaxNode::Text("Hello ".into()),
//!     SyntaxNode::Text("world".into()),
//! ]);
//! assert_eq!(tree.evaluate(&mut context)?, serde_json::json!("Hello world"));
//! # Ok(())
//! # }
//! ```

pub mod call;
pub mod context;
pub mod error;
pub mod extension;
pub mod node;
pub mod registry;

pub use call::ExtensionCallNode;
pub use context::RenderingContext;
pub use error::EvalError;
pub use extension::{Invocation, RenderExtension};
pub use node::SyntaxNode;
pub use registry::ExtensionRegistry;
