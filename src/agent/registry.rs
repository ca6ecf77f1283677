//! Agent registry
//!
//! Maps agent identifiers to runtime handles. Adding an agent means
//! registering it here, not branching in the request handlers.

use std::collections::HashMap;
use std::sync::Arc;

use super::AgentRuntime;

/// Registry of agent runtimes addressable by identifier
///
/// Populated once at startup and read-only afterwards. An agent may be
/// registered under several aliases; error messages list canonical names.
#[derive(Default)]
pub struct AgentRegistry {
    agents: HashMap<String, Arc<dyn AgentRuntime>>,
}

impl AgentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent under one or more identifiers
    pub fn register(&mut self, ids: &[&str], agent: Arc<dyn AgentRuntime>) {
        for id in ids {
            self.agents.insert(id.to_string(), Arc::clone(&agent));
        }
    }

    /// Look up an agent by identifier
    pub fn resolve(&self, agent_id: &str) -> Option<Arc<dyn AgentRuntime>> {
        self.agents.get(agent_id).cloned()
    }

    /// Comma-separated list of distinct canonical agent names
    pub fn available(&self) -> String {
        let mut names: Vec<&str> = self.agents.values().map(|agent| agent.name()).collect();
        names.sort_unstable();
        names.dedup();
        names.join(", ")
    }
}
