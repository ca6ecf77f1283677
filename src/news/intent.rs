//! Topic normalization
//!
//! Maps a free-text topic string to a structured provider query intent. The
//! alias tables are compile-time constants; every input resolves to exactly
//! one intent, with free-text search as the fallback.

/// The classified interpretation of a topic string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIntent {
    /// Two-letter ISO country code for `top-headlines?country=`
    Country(String),

    /// Provider category for `top-headlines?category=`
    Category(String),

    /// Free-text query for `search?q=`
    Search(String),
}

/// The provider's fixed category set
pub const CATEGORIES: [&str; 9] = [
    "general",
    "world",
    "nation",
    "business",
    "technology",
    "entertainment",
    "sports",
    "science",
    "health",
];

/// Country names commonly used in requests, mapped to ISO 3166-1 codes
pub(crate) fn country_code(name: &str) -> Option<&'static str> {
    let code = match name {
        "usa" | "united states" | "america" => "us",
        "nigeria" => "ng",
        "uk" | "united kingdom" | "britain" => "gb",
        "canada" => "ca",
        "australia" => "au",
        "india" => "in",
        "germany" => "de",
        "france" => "fr",
        "japan" => "jp",
        "china" => "cn",
        "brazil" => "br",
        "south africa" => "za",
        "mexico" => "mx",
        "italy" => "it",
        "spain" => "es",
        _ => return None,
    };
    Some(code)
}

/// Topic shorthands mapped to provider categories
pub(crate) fn category_for(topic: &str) -> Option<&'static str> {
    let category = match topic {
        "tech" => "technology",
        "world" => "world",
        "business" => "business",
        "sports" => "sports",
        "health" => "health",
        "entertainment" => "entertainment",
        "science" => "science",
        "general" => "general",
        "national" | "nation" => "nation",
        _ => return None,
    };
    Some(category)
}

/// Classify a raw topic string into a [`QueryIntent`]
///
/// Lowercases and trims, then tries in order: country alias, bare two-letter
/// country code, category alias, free-text search. Total: never fails.
pub fn normalize(topic: &str) -> QueryIntent {
    let normalized = topic.trim().to_lowercase();

    if let Some(code) = country_code(&normalized) {
        return QueryIntent::Country(code.to_string());
    }
    if normalized.chars().count() == 2 {
        return QueryIntent::Country(normalized);
    }
    if let Some(category) = category_for(&normalized) {
        return QueryIntent::Category(category.to_string());
    }

    QueryIntent::Search(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_aliases() {
        assert_eq!(normalize("usa"), QueryIntent::Country("us".to_string()));
        assert_eq!(normalize("Nigeria"), QueryIntent::Country("ng".to_string()));
        assert_eq!(normalize("  UK  "), QueryIntent::Country("gb".to_string()));
        assert_eq!(
            normalize("United Kingdom"),
            QueryIntent::Country("gb".to_string())
        );
        assert_eq!(
            normalize("south africa"),
            QueryIntent::Country("za".to_string())
        );
    }

    #[test]
    fn test_bare_two_letter_code() {
        assert_eq!(normalize("fr"), QueryIntent::Country("fr".to_string()));
        assert_eq!(normalize("ZA"), QueryIntent::Country("za".to_string()));
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!(
            normalize("tech"),
            QueryIntent::Category("technology".to_string())
        );
        assert_eq!(
            normalize("Sports"),
            QueryIntent::Category("sports".to_string())
        );
        assert_eq!(
            normalize("national"),
            QueryIntent::Category("nation".to_string())
        );
        assert_eq!(
            normalize("world"),
            QueryIntent::Category("world".to_string())
        );
    }

    #[test]
    fn test_aliased_categories_are_valid() {
        for topic in [
            "tech",
            "world",
            "business",
            "sports",
            "health",
            "entertainment",
            "science",
            "general",
            "national",
        ] {
            match normalize(topic) {
                QueryIntent::Category(c) => assert!(CATEGORIES.contains(&c.as_str())),
                other => panic!("expected category for {topic}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_search_fallback() {
        assert_eq!(
            normalize("artificial intelligence"),
            QueryIntent::Search("artificial intelligence".to_string())
        );
        assert_eq!(
            normalize("  Climate Change  "),
            QueryIntent::Search("climate change".to_string())
        );
    }
}
