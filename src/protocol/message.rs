//! A2A message types
//!
//! Messages carry a `kind: "message"` discriminator on the wire, and every
//! content part inside them carries its own `kind` tag (`text`, `data`, ...).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message exchanged over the A2A protocol
///
/// Messages appear in two places in a task result: as entries of the
/// conversation history and as the `status.message` of a completed task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Wire discriminator, always `"message"`
    #[serde(default = "message_kind")]
    pub kind: String,

    /// Role of the message sender
    pub role: Role,

    /// Message content parts (at least one required)
    pub parts: Vec<Part>,

    /// Optional message identifier
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Optional task identifier (for associating the message with a task)
    #[serde(rename = "taskId", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

fn message_kind() -> String {
    "message".to_string()
}

impl Message {
    /// Create a new message with text content
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            kind: message_kind(),
            role,
            parts: vec![Part::text(text)],
            message_id: None,
            task_id: None,
        }
    }

    /// Create a user message with text content
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an agent message with text content
    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }

    /// Create a message from pre-built parts
    pub fn from_parts(role: Role, parts: Vec<Part>) -> Self {
        Self {
            kind: message_kind(),
            role,
            parts,
            message_id: None,
            task_id: None,
        }
    }

    /// Set the message ID
    pub fn with_message_id(mut self, id: impl Into<String>) -> Self {
        self.message_id = Some(id.into());
        self
    }

    /// Set the task ID
    pub fn with_task_id(mut self, id: impl Into<String>) -> Self {
        self.task_id = Some(id.into());
        self
    }

    /// Concatenated text of all text parts
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from a user
    #[default]
    User,

    /// Message from an AI agent
    Agent,
}

/// A single content part of a message or artifact
///
/// Every part on the wire is an object tagged with a `kind` field. Kinds this
/// service does not produce itself (file parts, for instance) are carried
/// through verbatim so inbound history survives the round trip untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    /// A part with a kind this service understands
    Known(KnownPart),

    /// Any other part, preserved as-is
    Other(Value),
}

/// Part kinds produced and interpreted by this service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum KnownPart {
    /// Plain text content: `{"kind": "text", "text": ...}`
    Text {
        /// The text content
        text: String,
    },

    /// Structured data: `{"kind": "data", "data": ...}`
    Data {
        /// The structured data
        data: Value,
    },
}

impl Part {
    /// Create a text part
    pub fn text(text: impl Into<String>) -> Self {
        Part::Known(KnownPart::Text { text: text.into() })
    }

    /// Create a data part
    pub fn data(data: Value) -> Self {
        Part::Known(KnownPart::Data { data })
    }

    /// Get the text content if this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Known(KnownPart::Text { text }) => Some(text),
            _ => None,
        }
    }
}
