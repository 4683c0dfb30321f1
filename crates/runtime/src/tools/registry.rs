//! Name-to-function tool registry.

use std::collections::HashMap;

use serde_json::Value;

use crate::model::{ToolCall, ToolSpec};
use crate::tools::{ToolError, ToolHost};

type Handler = Box<dyn Fn(&Value) -> Result<Value, ToolError> + Send + Sync>;

/// A registry of locally executable tools.
///
/// Statically populated at startup and shared read-only with the
/// reasoning loop. Names are unique; duplicates are rejected at
/// registration time rather than at dispatch.
#[derive(Default)]
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
    handlers: HashMap<String, Handler>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool spec with its handler.
    ///
    /// The handler is a pure synchronous function over the JSON arguments
    /// the model supplies.
    pub fn register(
        &mut self,
        spec: ToolSpec,
        handler: impl Fn(&Value) -> Result<Value, ToolError> + Send + Sync + 'static,
    ) -> Result<(), ToolError> {
        if self.handlers.contains_key(&spec.name) {
            return Err(ToolError::Duplicate(spec.name.clone()));
        }
        self.handlers.insert(spec.name.clone(), Box::new(handler));
        self.specs.push(spec);
        Ok(())
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.specs.iter().map(|s| s.name.as_str()).collect();
        f.debug_struct("ToolRegistry").field("tools", &names).finish()
    }
}

impl ToolHost for ToolRegistry {
    fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    async fn execute(&self, call: &ToolCall) -> Result<Value, ToolError> {
        let handler = self
            .handlers
            .get(&call.name)
            .ok_or_else(|| ToolError::NotFound(call.name.clone()))?;
        handler(&call.input)
    }
}
