//! Error types for tree evaluation.

use thiserror::Error;

/// All errors that can arise while evaluating a syntax tree.
///
/// Every variant is fatal and propagates to the caller of the enclosing
/// render, with one exception: [`EvalError::Render`] is caught by the
/// extension-call node and downgraded to the message text, so one
/// misbehaving extension does not abort the whole template.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The extension id is unknown to the registry, or its factory failed.
    #[error("cannot resolve rendering extension `{id}`: {reason}")]
    ExtensionResolution { id: String, reason: String },

    /// The extension rejected its evaluated argument set.
    #[error("invalid arguments for extension `{extension}`: {message}")]
    ArgumentValidation { extension: String, message: String },

    /// Extension-specific render failure. Recoverable: the call node
    /// substitutes `message` as its output value. The display string is the
    /// bare message so the substitution is exact.
    #[error("{message}")]
    Render { message: String },

    /// The extension's render call changed the set of identifiers visible in
    /// the shared variable scope. Extensions must leave ambient variables as
    /// they found them.
    #[error(
        "extension `{extension}` changed context variables during render: {}",
        .identifiers.join(", ")
    )]
    ContextLeak {
        extension: String,
        identifiers: Vec<String>,
    },
}

impl EvalError {
    /// Shorthand for the recoverable render-failure variant.
    pub fn render(message: impl Into<String>) -> Self {
        EvalError::Render { message: message.into() }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
