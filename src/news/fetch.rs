//! Headline fetching
//!
//! Issues provider queries and converts every failure mode (missing
//! credential, timeout, transport error, non-2xx status, empty result set)
//! into a [`FetchResult::Failure`] with a user-facing reason. Errors never
//! propagate past this boundary.

use serde::{Deserialize, Serialize};
use serde::ser::SerializeStruct;

use crate::config::Config;

use super::digest::{render_digest, topic_label};
use super::intent::{normalize, QueryIntent};

/// Smallest article count a request may ask for
pub const MIN_ARTICLES: u32 = 3;

/// Hard cap on article count, matching the digest's ordinal sequence
pub const MAX_ARTICLES: u32 = 10;

/// Article count used when the request does not specify one
pub const DEFAULT_MAX_ARTICLES: u32 = 5;

/// A headline as returned by the provider; read-only, never mutated locally
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    /// Headline title
    pub title: String,

    /// Short summary, absent for some sources
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the original article
    pub url: String,

    /// Publication timestamp as reported by the provider
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,

    /// Publishing outlet
    pub source: Source,
}

/// The outlet that published an article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    /// Outlet name
    pub name: String,
}

/// Provider response envelope
#[derive(Debug, Deserialize)]
pub struct HeadlinesResponse {
    /// Total matches known to the provider
    #[serde(rename = "totalArticles", default)]
    pub total_articles: u64,

    /// The returned page of articles
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Outcome of a headline fetch, returned to the agent tool layer
///
/// Serializes to the tool-result wire shape: a `success` flag plus either the
/// digest payload or a failure `message`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    /// At least one article was found and rendered
    Success {
        /// The rendered digest text
        digest: String,
        /// Articles in provider order
        articles: Vec<Article>,
        /// Number of articles in the digest
        count: usize,
        /// Display label for the requested topic
        topic: String,
    },

    /// The fetch could not produce a digest
    Failure {
        /// User-facing reason
        message: String,
    },
}

impl FetchResult {
    fn failure(message: impl Into<String>) -> Self {
        FetchResult::Failure {
            message: message.into(),
        }
    }
}

impl Serialize for FetchResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FetchResult::Success {
                digest,
                articles,
                count,
                topic,
            } => {
                let mut state = serializer.serialize_struct("FetchResult", 5)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("digest", digest)?;
                state.serialize_field("articles", articles)?;
                state.serialize_field("count", count)?;
                state.serialize_field("topic", topic)?;
                state.end()
            }
            FetchResult::Failure { message } => {
                let mut state = serializer.serialize_struct("FetchResult", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("message", message)?;
                state.end()
            }
        }
    }
}

/// Clamp a requested article count into the supported range
pub(crate) fn clamp_articles(requested: u32) -> u32 {
    requested.clamp(MIN_ARTICLES, MAX_ARTICLES)
}

/// Fetches headlines from the external news provider
///
/// Holds the shared HTTP client with its request timeout, plus the provider
/// credential and base URL read once at startup.
#[derive(Debug, Clone)]
pub struct HeadlineFetcher {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl HeadlineFetcher {
    /// Create a fetcher from process configuration
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent("NewsDigestAgent/1.0")
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch headlines for a topic and render them as a digest
    ///
    /// `max_articles` is clamped to `3..=10`. Every failure is reported as a
    /// [`FetchResult::Failure`]; this method never returns an error.
    pub async fn fetch(&self, topic: &str, max_articles: u32) -> FetchResult {
        let Some(api_key) = &self.api_key else {
            // Fail fast, no network round-trip without a credential
            return FetchResult::failure(
                "❌ News API key is missing. Please set GNEWS_API_KEY in your environment.",
            );
        };

        let topic = match topic.trim() {
            "" => "world",
            t => t,
        };
        let max = clamp_articles(max_articles);
        let intent = normalize(topic);

        let (path, param, value) = match &intent {
            QueryIntent::Country(code) => ("top-headlines", "country", code.as_str()),
            QueryIntent::Category(category) => ("top-headlines", "category", category.as_str()),
            QueryIntent::Search(query) => ("search", "q", query.as_str()),
        };
        let url = format!("{}/{}", self.base_url, path);
        let max_param = max.to_string();
        tracing::debug!(topic, ?intent, max, "fetching headlines");

        let response = match self
            .client
            .get(&url)
            .query(&[
                (param, value),
                ("lang", "en"),
                ("max", max_param.as_str()),
                ("apikey", api_key.as_str()),
            ])
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) if err.is_timeout() => {
                tracing::warn!(topic, "headline fetch timed out");
                return FetchResult::failure(
                    "Request timed out. The news service is taking too long to respond. \
                     Please try again.",
                );
            }
            Err(err) => {
                tracing::warn!(topic, error = %err, "headline fetch failed");
                return FetchResult::failure(format!("Error fetching news: {err}"));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(topic, status = status.as_u16(), "provider returned an error");
            return FetchResult::failure(format!(
                "Failed to fetch news: {} - {}. {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                body
            ));
        }

        let data: HeadlinesResponse = match response.json().await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(topic, error = %err, "provider response was not valid JSON");
                return FetchResult::failure(format!("Error fetching news: {err}"));
            }
        };

        if data.articles.is_empty() {
            return FetchResult::failure(format!(
                "No headlines found for \"{topic}\". Try: world, tech, sports, business, \
                 or specific countries like USA, Nigeria, UK."
            ));
        }

        let label = topic_label(topic);
        let digest = render_digest(&data.articles, &label, chrono::Local::now().date_naive());
        let count = data.articles.len();

        FetchResult::Success {
            digest,
            articles: data.articles,
            count,
            topic: label,
        }
    }
}
