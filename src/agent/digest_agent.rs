//! The news-digest agent
//!
//! Interprets a free-text request, picks a topic and article count, runs the
//! headline fetch tool and relays the rendered digest (or the tool's failure
//! message) as its reply. Tool failures are relayed conversationally, never
//! raised as agent errors.

use async_trait::async_trait;

use crate::news::fetch::{clamp_articles, FetchResult, HeadlineFetcher, DEFAULT_MAX_ARTICLES};
use crate::news::intent::{category_for, country_code};

use super::{AgentError, AgentReply, AgentRuntime};

/// Canonical name of the news-digest agent
pub const AGENT_NAME: &str = "newsDigestAgent";

/// Alternate identifier the agent is addressable by
pub const AGENT_ALIAS: &str = "news-digest-agent";

/// Multi-word country names, matched before single-word aliases
const MULTI_WORD_COUNTRIES: [&str; 3] = ["united states", "united kingdom", "south africa"];

/// Conversational agent that answers news requests with a headline digest
pub struct NewsDigestAgent {
    fetcher: HeadlineFetcher,
}

impl NewsDigestAgent {
    /// Create the agent around a headline fetcher
    pub fn new(fetcher: HeadlineFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl AgentRuntime for NewsDigestAgent {
    fn name(&self) -> &str {
        AGENT_NAME
    }

    async fn generate(&self, prompt: &str) -> Result<AgentReply, AgentError> {
        let (topic, max_articles) = interpret_request(prompt);
        tracing::debug!(topic, max_articles, "interpreted news request");

        let result = self.fetcher.fetch(&topic, max_articles).await;
        let text = match &result {
            FetchResult::Success { digest, .. } => digest.clone(),
            FetchResult::Failure { message } => message.clone(),
        };
        let tool_result =
            serde_json::to_value(&result).map_err(|err| AgentError::Tool(err.to_string()))?;

        Ok(AgentReply::text(text).with_tool_result(tool_result))
    }
}

/// Derive a topic and article count from a free-text request
///
/// Scans for a multi-word country name first, then for word-level country or
/// category aliases; a bare integer in the text sets the article count.
/// Defaults to topic `"world"` with [`DEFAULT_MAX_ARTICLES`].
pub(crate) fn interpret_request(text: &str) -> (String, u32) {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let max_articles = words
        .iter()
        .find_map(|w| w.parse::<u32>().ok())
        .map(clamp_articles)
        .unwrap_or(DEFAULT_MAX_ARTICLES);

    for name in MULTI_WORD_COUNTRIES {
        if lowered.contains(name) {
            return (name.to_string(), max_articles);
        }
    }

    for word in &words {
        if country_code(word).is_some() || category_for(word).is_some() {
            return (word.to_string(), max_articles);
        }
    }

    ("world".to_string(), max_articles)
}
