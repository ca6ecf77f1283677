use news_digest_agent::config::Config;
use news_digest_agent::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        tracing::warn!("GNEWS_API_KEY is not set; news requests will fail until it is provided");
    }

    server::serve(config).await
}
