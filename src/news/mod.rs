//! News tool: topic normalization, headline fetching and digest rendering

pub mod digest;
pub mod fetch;
pub mod intent;

pub use digest::render_digest;
pub use fetch::{Article, FetchResult, HeadlineFetcher};
pub use intent::{normalize, QueryIntent};
