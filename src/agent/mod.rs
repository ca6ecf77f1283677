//! Agent invocation boundary
//!
//! Request handlers talk to agent runtimes exclusively through the
//! [`AgentRuntime`] trait: text prompt in, generated text plus optional tool
//! results out. Runtime failures surface as [`AgentError`], which the
//! protocol adapter converts to a JSON-RPC internal error.

pub mod digest_agent;
pub mod registry;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use digest_agent::{NewsDigestAgent, AGENT_ALIAS, AGENT_NAME};
pub use registry::AgentRegistry;

/// Upper bound on a single agent invocation
///
/// The underlying runtime's own suspension behavior is opaque, so callers
/// impose this bound themselves via [`invoke`].
pub const INVOCATION_TIMEOUT: Duration = Duration::from_secs(30);

/// The contract between request handlers and an agent runtime
#[async_trait]
pub trait AgentRuntime: Send + Sync + 'static {
    /// Canonical name of the agent, used in responses and error messages
    fn name(&self) -> &str;

    /// Generate a reply to a free-text prompt
    async fn generate(&self, prompt: &str) -> Result<AgentReply, AgentError>;
}

/// A reply produced by an agent runtime
#[derive(Debug, Clone, Default)]
pub struct AgentReply {
    /// Generated reply text
    pub text: String,

    /// Raw results of any tool calls made while generating
    pub tool_results: Vec<Value>,
}

impl AgentReply {
    /// Create a text-only reply
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tool_results: Vec::new(),
        }
    }

    /// Attach a tool result
    pub fn with_tool_result(mut self, result: Value) -> Self {
        self.tool_results.push(result);
        self
    }
}

/// Failures of an agent runtime, distinguishable from an empty reply
#[derive(Debug, Error)]
pub enum AgentError {
    /// The language model failed to generate
    #[error("model error: {0}")]
    Model(String),

    /// A tool call failed in a way the runtime could not recover from
    #[error("tool error: {0}")]
    Tool(String),

    /// The invocation exceeded [`INVOCATION_TIMEOUT`]
    #[error("agent invocation timed out")]
    Timeout,
}

/// Invoke an agent with the invocation timeout applied
pub async fn invoke(agent: &dyn AgentRuntime, prompt: &str) -> Result<AgentReply, AgentError> {
    match tokio::time::timeout(INVOCATION_TIMEOUT, agent.generate(prompt)).await {
        Ok(reply) => reply,
        Err(_) => Err(AgentError::Timeout),
    }
}
