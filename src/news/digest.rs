//! Digest rendering
//!
//! Turns an ordered article list into the human-readable digest string. Pure
//! and deterministic given the same articles, topic label and date.

use chrono::NaiveDate;

use super::fetch::Article;

/// Ordinal markers for the numbered entries; the fetcher caps article counts
/// at this sequence's length upstream.
const ORDINALS: [&str; 10] = ["1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟"];

/// Longest description carried into the digest, ellipsis included
const MAX_DESCRIPTION_CHARS: usize = 150;

/// Capitalize the first character of a topic for display
pub fn topic_label(topic: &str) -> String {
    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render a digest for the given articles, preserving their order
pub fn render_digest(articles: &[Article], topic_label: &str, date: NaiveDate) -> String {
    let mut digest = format!(
        "🗞️ **{topic_label} Headlines** - {}\n\n",
        date.format("%A, %B %-d, %Y")
    );

    for (index, article) in articles.iter().take(ORDINALS.len()).enumerate() {
        let description = article
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description available");

        digest.push_str(&format!("{} **{}**\n", ORDINALS[index], article.title));
        digest.push_str(&format!("   _{}_\n", truncate(description)));
        digest.push_str(&format!(
            "   📰 {} | [Read more]({})\n\n",
            article.source.name, article.url
        ));
    }

    let count = articles.len().min(ORDINALS.len());
    let plural = if count == 1 { "" } else { "s" };
    digest.push_str(&format!(
        "\n💡 Found {count} headline{plural} for {topic_label}"
    ));

    digest
}

/// Truncate text over the display limit to 147 characters plus an ellipsis
fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_DESCRIPTION_CHARS {
        let mut truncated: String = text.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}
