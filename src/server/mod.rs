//! HTTP server exposing the chat and A2A endpoints
//!
//! Routes:
//! - `GET /health`: liveness probe
//! - `POST /api/chat`: plain REST chat with the news digest agent
//! - `POST /a2a/agent/{agent_id}`: JSON-RPC 2.0 A2A endpoint

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::a2a;
use crate::agent::{self, AgentRegistry, NewsDigestAgent, AGENT_ALIAS, AGENT_NAME};
use crate::config::Config;
use crate::news::HeadlineFetcher;
use crate::protocol::JsonRpcRequest;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<AgentRegistry>,
}

impl AppState {
    /// Build the default state: one news digest agent, reachable under its
    /// canonical name and its kebab-case alias
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let fetcher = HeadlineFetcher::new(config)?;
        let digest_agent = Arc::new(NewsDigestAgent::new(fetcher));

        let mut registry = AgentRegistry::new();
        registry.register(&[AGENT_NAME, AGENT_ALIAS], digest_agent);

        Ok(Self {
            registry: Arc::new(registry),
        })
    }
}

/// Assemble the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat))
        .route("/a2a/agent/{agent_id}", post(a2a_agent))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let router = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "news digest agent listening");
    tracing::info!("chat endpoint:  POST http://localhost:{}/api/chat", config.port);
    tracing::info!(
        "a2a endpoint:   POST http://localhost:{}/a2a/agent/{}",
        config.port,
        AGENT_NAME
    );

    axum::serve(listener, router).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    message: String,
    agent: &'static str,
}

async fn chat(State(state): State<AppState>, Json(body): Json<ChatRequest>) -> impl IntoResponse {
    let message = match body.message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Message is required"})),
            )
                .into_response();
        }
    };

    // The chat route always talks to the digest agent
    let Some(digest_agent) = state.registry.resolve(AGENT_NAME) else {
        tracing::error!("digest agent missing from registry");
        return internal_error();
    };

    match agent::invoke(digest_agent.as_ref(), &message).await {
        Ok(reply) => Json(ChatResponse {
            message: reply.text,
            agent: AGENT_NAME,
        })
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "chat invocation failed");
            internal_error()
        }
    }
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": "Internal server error"})),
    )
        .into_response()
}

async fn a2a_agent(
    State(state): State<AppState>,
    Path(agent_id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    // Any JSON object parses into an envelope; malformed fields fall through
    // to defaults and fail envelope validation with a proper JSON-RPC error
    let request: JsonRpcRequest = serde_json::from_value(body).unwrap_or_default();
    let (status, response) = a2a::handle_request(&state.registry, &agent_id, request).await;
    (status, Json(response))
}
