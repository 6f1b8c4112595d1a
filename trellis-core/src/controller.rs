//! Controller/request context threaded through one render pass.
//!
//! The engine never inspects these fields; they exist so extensions that
//! render links, flash messages and the like can see which controller/action
//! the surrounding request targets.

use serde::{Deserialize, Serialize};

/// Request-side context for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ControllerContext {
    pub controller_name: String,
    pub action_name: String,
    #[serde(default)]
    pub request_format: String,
}

impl ControllerContext {
    pub fn new(controller_name: impl Into<String>, action_name: impl Into<String>) -> Self {
        Self {
            controller_name: controller_name.into(),
            action_name: action_name.into(),
            request_format: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
