//! # News Digest Agent
//!
//! A conversational news-digest service speaking the Agent2Agent (A2A)
//! protocol.
//!
//! The service fetches top headlines from the GNews API, formats them into an
//! emoji-numbered digest, and exposes two HTTP surfaces: a plain REST chat
//! endpoint and a JSON-RPC 2.0 A2A endpoint whose responses carry full task
//! results with artifacts and conversation history.
//!
//! ## Features
//!
//! - **Topic Understanding**: Country aliases ("Nigeria", "USA"), category
//!   aliases ("tech"), and free-text search fall out of one normalizer
//! - **A2A Compliant**: Task results with artifacts, history, and the
//!   standard JSON-RPC error codes
//! - **Resilient**: Request timeouts and provider failures become readable
//!   chat replies, never opaque errors
//! - **Async**: Built on tokio and axum
//!
//! ## Example
//!
//! ```rust,no_run
//! use news_digest_agent::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     news_digest_agent::server::serve(config).await
//! }
//! ```

pub mod a2a;
pub mod agent;
pub mod config;
pub mod news;
pub mod protocol;
pub mod server;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        agent::{AgentRegistry, AgentRuntime, NewsDigestAgent},
        config::Config,
        news::{FetchResult, HeadlineFetcher},
        protocol::{A2aError, JsonRpcRequest, JsonRpcResponse, Message, Part, Role, TaskResult},
        server::{build_router, AppState},
    };
}
