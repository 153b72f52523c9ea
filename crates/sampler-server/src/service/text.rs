//! Text inspection services
//!
//! Regex-backed digit extraction and email validation. Extraction results
//! are memoized in a bounded TTL cache keyed by the input text.

use std::sync::LazyLock;
use std::time::Duration;

use moka::sync::Cache;

use crate::api::metrics::METRICS;

static NUMBER_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\d+").expect("Invalid regex pattern"));

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("Invalid regex pattern")
});

/// Digit extraction with a bounded TTL memo
pub struct TextService {
    cache: Cache<String, Vec<String>>,
}

impl TextService {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Find all digit runs in the text, memoized by input
    pub fn extract_numbers(&self, text: &str) -> Vec<String> {
        if let Some(cached) = self.cache.get(text) {
            METRICS.inc_text_cache_hits();
            return cached;
        }

        METRICS.inc_text_cache_misses();
        let numbers = find_numbers(text);
        self.cache.insert(text.to_string(), numbers.clone());

        numbers
    }
}

/// Find all digit runs in the text, in order of appearance
pub fn find_numbers(text: &str) -> Vec<String> {
    NUMBER_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Check a candidate against the demo email pattern
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_REGEX.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_numbers_basic() {
        assert_eq!(find_numbers("order 66 costs 1299"), vec!["66", "1299"]);
        assert_eq!(find_numbers("abc123def45"), vec!["123", "45"]);
    }

    #[test]
    fn test_find_numbers_none() {
        assert!(find_numbers("no digits here").is_empty());
        assert!(find_numbers("").is_empty());
    }

    #[test]
    fn test_find_numbers_preserves_leading_zeros() {
        assert_eq!(find_numbers("code 007"), vec!["007"]);
    }

    #[test]
    fn test_extract_numbers_is_stable_across_calls() {
        let service = TextService::new(16, Duration::from_secs(60));

        let first = service.extract_numbers("a1b22c333");
        let second = service.extract_numbers("a1b22c333");

        assert_eq!(first, vec!["1", "22", "333"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
        assert!(is_valid_email("u_1%x-y@host.io"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email(""));
    }
}
