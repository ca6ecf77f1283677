//! A2A protocol types: messages, tasks, the JSON-RPC envelope and errors

pub mod envelope;
pub mod error;
pub mod message;
pub mod task;

pub use envelope::{codes, JsonRpcRequest, JsonRpcResponse, RpcError};
pub use error::A2aError;
pub use message::{KnownPart, Message, Part, Role};
pub use task::{Artifact, TaskResult, TaskState, TaskStatus};
