//! A2A task result types
//!
//! A task represents one completed request/response cycle. The adapter builds
//! one `TaskResult` per successful `message/send` call; nothing is persisted
//! across requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::{Message, Part};

/// The result of a completed A2A task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskResult {
    /// Unique identifier for the task (caller-supplied or generated)
    pub id: String,

    /// Context identifier grouping related exchanges
    #[serde(rename = "contextId")]
    pub context_id: String,

    /// Current status of the task
    pub status: TaskStatus,

    /// Outputs produced by the agent, in production order
    pub artifacts: Vec<Artifact>,

    /// Conversation history: inbound messages followed by the agent reply
    pub history: Vec<Message>,

    /// Wire discriminator, always `"task"`
    #[serde(default = "task_kind")]
    pub kind: String,
}

fn task_kind() -> String {
    "task".to_string()
}

impl TaskResult {
    /// Create a completed task result
    pub fn completed(
        id: impl Into<String>,
        context_id: impl Into<String>,
        reply: Message,
    ) -> Self {
        Self {
            id: id.into(),
            context_id: context_id.into(),
            status: TaskStatus {
                state: TaskState::Completed,
                timestamp: Utc::now(),
                message: reply,
            },
            artifacts: Vec::new(),
            history: Vec::new(),
            kind: task_kind(),
        }
    }

    /// Append an artifact
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Set the conversation history
    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }
}

/// Status of a task: state, timestamp and the message that concluded it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    /// Lifecycle state
    pub state: TaskState,

    /// When the status was produced
    pub timestamp: DateTime<Utc>,

    /// The agent message that concluded the task
    pub message: Message,
}

/// Task lifecycle states defined by the A2A protocol
///
/// This service answers synchronously, so only `completed` is ever produced;
/// the remaining states exist for wire compatibility with peers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    /// Task has been received and is queued for processing
    Submitted,

    /// Task is currently being processed
    Working,

    /// Task requires additional input from the client
    InputRequired,

    /// Task completed successfully
    Completed,

    /// Task failed with an error
    Failed,

    /// Task was cancelled by the client
    Cancelled,
}

impl TaskState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskState::Completed | TaskState::Failed | TaskState::Cancelled
        )
    }
}

/// A named output unit attached to a completed task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    /// Unique identifier of the artifact
    #[serde(rename = "artifactId")]
    pub artifact_id: String,

    /// Human-readable name for the artifact
    pub name: String,

    /// Wire discriminator, always `"artifact"`
    #[serde(default = "artifact_kind")]
    pub kind: String,

    /// Contents of the artifact (at least one part)
    pub parts: Vec<Part>,
}

fn artifact_kind() -> String {
    "artifact".to_string()
}

impl Artifact {
    /// Create a new artifact with a generated identifier
    pub fn new(name: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            artifact_id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            kind: artifact_kind(),
            parts,
        }
    }

    /// Create a single-text-part artifact
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, vec![Part::text(text)])
    }
}
