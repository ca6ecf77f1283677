//! A2A Protocol Wire-Format Compliance Tests
//!
//! These tests verify that serialized messages, tasks, and JSON-RPC envelopes
//! match the A2A protocol wire format.

use serde_json::json;
use news_digest_agent::protocol::{
    Artifact, JsonRpcRequest, JsonRpcResponse, Message, Part, Role, RpcError, TaskResult,
    TaskState,
};

#[test]
fn test_role_serialization() {
    // Roles serialize to lowercase "user" and "agent"
    let user_msg = Message::user("Hello");
    let json = serde_json::to_value(&user_msg).unwrap();
    assert_eq!(json["role"], "user");

    let agent_msg = Message::agent("Hi there");
    let json = serde_json::to_value(&agent_msg).unwrap();
    assert_eq!(json["role"], "agent");
}

#[test]
fn test_text_part_serialization() {
    // Text parts carry a "kind": "text" discriminator alongside the text
    let part = Part::text("Hello, world!");
    let json = serde_json::to_value(&part).unwrap();

    assert_eq!(json["kind"], "text");
    assert_eq!(json["text"], "Hello, world!");
}

#[test]
fn test_data_part_serialization() {
    let part = Part::data(json!({"count": 5, "topic": "technology"}));
    let json = serde_json::to_value(&part).unwrap();

    assert_eq!(json["kind"], "data");
    assert_eq!(json["data"]["count"], 5);
}

#[test]
fn test_message_identifier_field_names() {
    // Identifiers are camelCase on the wire
    let msg = Message::agent("reply")
        .with_message_id("msg-1")
        .with_task_id("task-1");
    let json = serde_json::to_value(&msg).unwrap();

    assert_eq!(json["messageId"], "msg-1");
    assert_eq!(json["taskId"], "task-1");
    assert!(json.get("message_id").is_none());
    assert!(json.get("task_id").is_none());
}

#[test]
fn test_message_kind_discriminator() {
    let msg = Message::user("hi");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["kind"], "message");
}

#[test]
fn test_task_result_serialization() {
    let reply = Message::agent("digest text").with_message_id("msg-9");
    let task = TaskResult::completed("task-1", "ctx-1", reply.clone())
        .with_artifact(Artifact::text("newsDigestAgentResponse", "digest text"))
        .with_history(vec![Message::user("tech news"), reply]);
    let json = serde_json::to_value(&task).unwrap();

    assert_eq!(json["kind"], "task");
    assert_eq!(json["id"], "task-1");
    assert_eq!(json["contextId"], "ctx-1");
    assert_eq!(json["status"]["state"], "completed");
    assert!(json["status"]["timestamp"].is_string());
    assert_eq!(json["status"]["message"]["role"], "agent");
    assert_eq!(json["history"].as_array().unwrap().len(), 2);
}

#[test]
fn test_artifact_serialization() {
    let artifact = Artifact::text("ToolResults", "[]");
    let json = serde_json::to_value(&artifact).unwrap();

    assert_eq!(json["kind"], "artifact");
    assert_eq!(json["name"], "ToolResults");
    assert!(json["artifactId"].is_string());
    assert_eq!(json["parts"][0]["kind"], "text");
}

#[test]
fn test_task_state_wire_names() {
    // States are kebab-case per the protocol
    assert_eq!(
        serde_json::to_value(TaskState::InputRequired).unwrap(),
        "input-required"
    );
    assert_eq!(serde_json::to_value(TaskState::Submitted).unwrap(), "submitted");
    assert_eq!(serde_json::to_value(TaskState::Cancelled).unwrap(), "cancelled");
}

#[test]
fn test_request_envelope_lenient_parsing() {
    // Any JSON object parses; missing fields fall back to defaults so the
    // handler can reject them with a JSON-RPC error instead of an HTTP 422
    let request: JsonRpcRequest = serde_json::from_value(json!({"foo": "bar"})).unwrap();
    assert_eq!(request.jsonrpc, "");
    assert!(request.id.is_null());
    assert_eq!(request.method, "");
}

#[test]
fn test_success_response_shape() {
    let reply = Message::agent("ok");
    let task = TaskResult::completed("t", "c", reply);
    let response = JsonRpcResponse::success(json!(7), task);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["id"], 7);
    assert_eq!(json["result"]["kind"], "task");
    assert!(json.get("error").is_none());
}

#[test]
fn test_error_response_shape() {
    let response = JsonRpcResponse::error(
        json!("req-1"),
        RpcError::new(-32601, "Method not found: Only \"message/send\" is supported"),
    );
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["id"], "req-1");
    assert_eq!(json["error"]["code"], -32601);
    assert!(json.get("result").is_none());
}

#[test]
fn test_inbound_history_preserves_unknown_parts() {
    // File parts and other kinds this service does not produce must survive
    // deserialization and re-serialization byte-for-byte
    let raw = json!({
        "role": "user",
        "parts": [
            {"kind": "text", "text": "summarize this"},
            {"kind": "file", "file": {"name": "report.pdf", "uri": "file:///tmp/report.pdf"}}
        ]
    });

    let msg: Message = serde_json::from_value(raw).unwrap();
    assert_eq!(msg.role, Role::User);

    let round_tripped = serde_json::to_value(&msg).unwrap();
    assert_eq!(round_tripped["parts"][1]["kind"], "file");
    assert_eq!(round_tripped["parts"][1]["file"]["name"], "report.pdf");
}
