//! Content-preview crawler detection from HTTP request headers.

use axum::http::{HeaderMap, header};

/// User-agent matching rules for crawler classification.
///
/// Both lists are matched case-insensitively; entries are lowercased once at
/// construction.
#[derive(Debug, Clone)]
pub struct CrawlerRules {
    prefixes: Vec<String>,
    substrings: Vec<String>,
}

impl CrawlerRules {
    pub fn new(prefixes: Vec<String>, substrings: Vec<String>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(|p| p.to_lowercase()).collect(),
            substrings: substrings.into_iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    fn matches(&self, user_agent: &str) -> bool {
        let ua = user_agent.to_lowercase();
        self.prefixes.iter().any(|p| ua.starts_with(p.as_str()))
            || self.substrings.iter().any(|s| ua.contains(s.as_str()))
    }
}

/// Classifies a request as coming from a content-preview crawler.
///
/// Checks every `User-Agent` value (a request may carry several): true if any
/// value starts with a configured prefix or contains a configured substring,
/// compared case-insensitively. A missing header or a value that is not valid
/// UTF-8 never matches; the function is total and cannot fail.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::USER_AGENT, "facebookexternalhit/1.1".parse().unwrap());
///
/// assert!(is_crawler(&headers, &rules));
/// ```
pub fn is_crawler(headers: &HeaderMap, rules: &CrawlerRules) -> bool {
    headers
        .get_all(header::USER_AGENT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|ua| rules.matches(ua))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn rules() -> CrawlerRules {
        CrawlerRules::new(
            vec![
                "facebookexternalhit/".to_string(),
                "facebot".to_string(),
                "facebookcatalog".to_string(),
            ],
            vec!["discordbot".to_string(), "twitterbot".to_string()],
        )
    }

    fn with_user_agent(ua: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_str(ua).unwrap());
        headers
    }

    #[test]
    fn test_prefix_match() {
        let headers = with_user_agent("facebookexternalhit/1.1 (+http://www.facebook.com)");
        assert!(is_crawler(&headers, &rules()));
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let headers = with_user_agent("FacebookExternalHit/1.1");
        assert!(is_crawler(&headers, &rules()));
    }

    #[test]
    fn test_substring_match() {
        let headers = with_user_agent("Mozilla/5.0 (compatible; Discordbot/2.0; +https://discordapp.com)");
        assert!(is_crawler(&headers, &rules()));
    }

    #[test]
    fn test_prefix_entry_does_not_match_mid_string() {
        // facebot is a prefix rule, not a substring rule
        let headers = with_user_agent("Mozilla/5.0 facebot-alike");
        assert!(!is_crawler(&headers, &rules()));
    }

    #[test]
    fn test_regular_browser_is_not_crawler() {
        let headers = with_user_agent("Mozilla/5.0 (X11; Linux x86_64) Firefox/130.0");
        assert!(!is_crawler(&headers, &rules()));
    }

    #[test]
    fn test_missing_header_is_not_crawler() {
        assert!(!is_crawler(&HeaderMap::new(), &rules()));
    }

    #[test]
    fn test_any_of_multiple_values_matches() {
        let mut headers = with_user_agent("Mozilla/5.0 (X11; Linux x86_64)");
        headers.append(
            header::USER_AGENT,
            HeaderValue::from_static("Twitterbot/1.0"),
        );

        assert!(is_crawler(&headers, &rules()));
    }
}
