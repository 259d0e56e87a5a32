//! Executable tools the model may invoke.
//!
//! A [`Tool`] pairs a [`ToolDefinition`] with an async body. Simple tools are
//! built from closures with [`tool_fn`]:
//!
//! ```rust
//! use gemini_chat_adapter::tools::{tool_fn, Tool};
//! use gemini_chat_adapter::types::ToolDefinition;
//! use serde_json::json;
//!
//! let add = tool_fn(
//!     ToolDefinition::new(
//!         "add",
//!         "Add two integers",
//!         json!({
//!             "type": "object",
//!             "properties": {"a": {"type": "integer"}, "b": {"type": "integer"}},
//!             "required": ["a", "b"]
//!         }),
//!     ),
//!     |args, _cancel| async move {
//!         let a = args["a"].as_i64().unwrap_or(0);
//!         let b = args["b"].as_i64().unwrap_or(0);
//!         Ok(json!(a + b))
//!     },
//! );
//! assert_eq!(add.name(), "add");
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, ErrorContext};
use crate::types::tool::ToolDefinition;

/// A single tool that can be invoked by the model.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name, description and parameter schema advertised to the model.
    fn definition(&self) -> &ToolDefinition;

    fn name(&self) -> &str {
        &self.definition().name
    }

    /// Run the tool with the model-supplied arguments.
    ///
    /// `cancel` is owned by the tool run; nothing upstream cancels it.
    async fn run_json(&self, args: Value, cancel: CancellationToken) -> anyhow::Result<Value>;
}

/// A tool backed by an async closure. Created via [`tool_fn`].
pub struct FunctionTool<F> {
    definition: ToolDefinition,
    handler: F,
}

impl<F> std::fmt::Debug for FunctionTool<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.definition.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<F, Fut> Tool for FunctionTool<F>
where
    F: Fn(Value, CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
{
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn run_json(&self, args: Value, cancel: CancellationToken) -> anyhow::Result<Value> {
        (self.handler)(args, cancel).await
    }
}

/// Wrap an async closure as a shareable tool.
pub fn tool_fn<F, Fut>(definition: ToolDefinition, handler: F) -> Arc<dyn Tool>
where
    F: Fn(Value, CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
{
    Arc::new(FunctionTool {
        definition,
        handler,
    })
}

/// Find the tool a function call refers to.
pub fn find_tool<'a>(tools: &'a [Arc<dyn Tool>], name: &str) -> Option<&'a Arc<dyn Tool>> {
    tools.iter().find(|t| t.name() == name)
}

/// Reject tool lists in which two tools share a name.
pub fn ensure_unique_names(tools: &[Arc<dyn Tool>]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(tools.len());
    for (idx, tool) in tools.iter().enumerate() {
        if !seen.insert(tool.name()) {
            return Err(Error::validation_with_context(
                format!("duplicate tool name '{}'", tool.name()),
                ErrorContext::new()
                    .with_field_path(format!("tools[{}].name", idx))
                    .with_source("tool_registry"),
            ));
        }
    }
    Ok(())
}

/// Render a tool result as conversation text: strings verbatim, everything else as JSON.
pub fn stringify_result(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
