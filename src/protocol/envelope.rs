//! JSON-RPC 2.0 envelope for the A2A binding
//!
//! Inbound requests and outbound responses are wrapped in JSON-RPC 2.0
//! envelopes. The request struct defaults every field so that any JSON object
//! deserializes; validation of the envelope is the adapter's job, which lets
//! a malformed envelope produce a proper `-32600` instead of a parse failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::task::TaskResult;

/// JSON-RPC 2.0 error codes used by the A2A endpoint
pub mod codes {
    /// Malformed envelope (bad `jsonrpc` version or missing `id`)
    pub const INVALID_REQUEST: i64 = -32600;

    /// Unsupported method (anything but `message/send`)
    pub const METHOD_NOT_FOUND: i64 = -32601;

    /// Unknown agent identifier
    pub const INVALID_PARAMS: i64 = -32602;

    /// Agent invocation failure
    pub const INTERNAL_ERROR: i64 = -32603;
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, must be the literal `"2.0"`
    #[serde(default)]
    pub jsonrpc: String,

    /// Request identifier; `Value::Null` when absent
    #[serde(default)]
    pub id: Value,

    /// Method name, only `"message/send"` is supported
    #[serde(default)]
    pub method: String,

    /// Method parameters in one of several accepted shapes
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always `"2.0"`
    pub jsonrpc: String,

    /// Identifier echoed from the request (`null` when it was absent)
    pub id: Value,

    /// Task result, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TaskResult>,

    /// Error object, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    /// Create a success response carrying a task result
    pub fn success(id: Value, result: TaskResult) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Value, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcError {
    /// Error code (one of [`codes`])
    pub code: i64,

    /// Human-readable error message
    pub message: String,

    /// Additional diagnostic detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    /// Create a new error object
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attach diagnostic detail
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
