//! A2A request handling
//!
//! Drives a request through validation, agent resolution, message
//! extraction, invocation and response assembly. Each request is handled
//! independently; a validation failure short-circuits straight to an error
//! response.

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::agent::{self, AgentRegistry, AgentReply};
use crate::protocol::{
    A2aError, Artifact, JsonRpcRequest, JsonRpcResponse, Message, Part, Role, TaskResult,
};

use super::extract;

/// Handle one JSON-RPC request addressed to an agent
pub async fn handle_request(
    registry: &AgentRegistry,
    agent_id: &str,
    request: JsonRpcRequest,
) -> (StatusCode, JsonRpcResponse) {
    tracing::info!(method = %request.method, agent_id, "received A2A request");

    if request.jsonrpc != "2.0" || request.id.is_null() {
        return error_response(request.id, &A2aError::InvalidRequest);
    }
    if request.method != "message/send" {
        return error_response(request.id, &A2aError::MethodNotFound);
    }

    let Some(agent) = registry.resolve(agent_id) else {
        let err = A2aError::AgentNotFound {
            agent_id: agent_id.to_string(),
            available: registry.available(),
        };
        return error_response(request.id, &err);
    };

    let text = extract::extract_text(&request.params);
    tracing::debug!(%text, "extracted user message");

    let reply = match agent::invoke(agent.as_ref(), &text).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::error!(agent_id, error = %err, "agent invocation failed");
            let err = A2aError::Internal {
                details: err.to_string(),
            };
            return error_response(request.id, &err);
        }
    };

    let result = assemble_task(agent_id, &request.params, &text, reply);
    (
        StatusCode::OK,
        JsonRpcResponse::success(request.id, result),
    )
}

fn error_response(id: Value, err: &A2aError) -> (StatusCode, JsonRpcResponse) {
    (err.http_status(), JsonRpcResponse::error(id, err.to_rpc_error()))
}

/// Build the completed task result for a successful invocation
fn assemble_task(agent_id: &str, params: &Value, extracted: &str, reply: AgentReply) -> TaskResult {
    // Reuse caller-supplied identifiers, generate the rest fresh
    let task_id = str_param(params, "taskId").unwrap_or_else(new_id);
    let context_id = str_param(params, "contextId").unwrap_or_else(new_id);

    let status_message = Message::agent(reply.text.clone()).with_message_id(new_id());

    let mut inbound = extract::inbound_messages(params);
    if inbound.is_empty() {
        // Plain-string shapes carry no message object; synthesize one so the
        // history still records what the agent was asked
        inbound.push(json!({
            "role": "user",
            "parts": [{"kind": "text", "text": extracted}]
        }));
    }

    let mut history: Vec<Message> = inbound
        .iter()
        .map(|message| history_entry(message, &task_id))
        .collect();
    history.push(status_message.clone().with_task_id(task_id.clone()));

    let mut task = TaskResult::completed(task_id, context_id, status_message)
        .with_artifact(Artifact::text(format!("{agent_id}Response"), reply.text));

    if !reply.tool_results.is_empty() {
        let rendered = serde_json::to_string_pretty(&reply.tool_results)
            .unwrap_or_else(|_| "[]".to_string());
        task = task.with_artifact(Artifact::text("ToolResults", rendered));
    }

    task.with_history(history)
}

/// Echo one inbound message into the history, filling in defaults
fn history_entry(message: &Value, task_id: &str) -> Message {
    let role = match message.get("role") {
        None => Role::default(),
        Some(raw) => match serde_json::from_value::<Role>(raw.clone()) {
            Ok(role) => role,
            Err(_) => {
                // Only user and agent exist on the wire; anything else is
                // recorded as the requester
                tracing::debug!(role = %raw, "unrecognized message role, coercing to user");
                Role::default()
            }
        },
    };

    let parts: Vec<Part> = match message.get("parts").and_then(Value::as_array) {
        Some(parts) => parts.iter().map(value_to_part).collect(),
        None => vec![Part::text(
            message
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        )],
    };

    let message_id = message
        .get("messageId")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(new_id);
    let entry_task_id = message
        .get("taskId")
        .and_then(Value::as_str)
        .unwrap_or(task_id);

    Message::from_parts(role, parts)
        .with_message_id(message_id)
        .with_task_id(entry_task_id)
}

fn value_to_part(value: &Value) -> Part {
    serde_json::from_value(value.clone()).unwrap_or_else(|_| Part::Other(value.clone()))
}

fn str_param(params: &Value, key: &str) -> Option<String> {
    params.get(key)?.as_str().map(str::to_owned)
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
