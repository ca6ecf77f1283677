//! Error taxonomy for the A2A endpoint
//!
//! Every failure the adapter can produce maps to exactly one JSON-RPC error
//! code and one HTTP status. Provider failures never reach this type: the
//! news tool converts them to `FetchResult::Failure` at the tool boundary.

use axum::http::StatusCode;
use serde_json::json;
use thiserror::Error;

use super::envelope::{codes, RpcError};

/// Errors surfaced as JSON-RPC error responses by the A2A adapter
#[derive(Debug, Error)]
pub enum A2aError {
    /// Malformed JSON-RPC envelope
    #[error("Invalid Request: jsonrpc must be \"2.0\" and id is required")]
    InvalidRequest,

    /// Unsupported method
    #[error("Method not found: Only \"message/send\" is supported")]
    MethodNotFound,

    /// No agent registered under the requested identifier
    #[error("Agent '{agent_id}' not found. Available: {available}")]
    AgentNotFound {
        /// The identifier the caller asked for
        agent_id: String,
        /// Comma-separated list of registered agent names
        available: String,
    },

    /// Agent invocation failed (model error, tool error or timeout)
    #[error("Internal error")]
    Internal {
        /// Underlying failure, relayed as diagnostic detail
        details: String,
    },
}

impl A2aError {
    /// The JSON-RPC error code for this error
    pub fn code(&self) -> i64 {
        match self {
            A2aError::InvalidRequest => codes::INVALID_REQUEST,
            A2aError::MethodNotFound => codes::METHOD_NOT_FOUND,
            A2aError::AgentNotFound { .. } => codes::INVALID_PARAMS,
            A2aError::Internal { .. } => codes::INTERNAL_ERROR,
        }
    }

    /// The HTTP status the error response is served with
    pub fn http_status(&self) -> StatusCode {
        match self {
            A2aError::InvalidRequest | A2aError::MethodNotFound => StatusCode::BAD_REQUEST,
            A2aError::AgentNotFound { .. } => StatusCode::NOT_FOUND,
            A2aError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert into a JSON-RPC error object
    pub fn to_rpc_error(&self) -> RpcError {
        let error = RpcError::new(self.code(), self.to_string());
        match self {
            A2aError::Internal { details } => error.with_data(json!({ "details": details })),
            _ => error,
        }
    }
}
