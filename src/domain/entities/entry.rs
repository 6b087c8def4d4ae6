//! Entry entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counter.
///
/// Represents the mapping between a short code and the original URL.
/// `original_url`, `short_code`, and `created_at` are fixed at creation;
/// only `clicks` changes afterwards, and only through
/// [`crate::domain::store::UrlStore::increment_clicks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl UrlEntry {
    /// Creates a new entry with zero clicks, timestamped now.
    pub fn new(short_code: String, original_url: String) -> Self {
        Self {
            original_url,
            short_code,
            created_at: Utc::now(),
            clicks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = UrlEntry::new("abc123xy".to_string(), "https://example.com".to_string());

        assert_eq!(entry.short_code, "abc123xy");
        assert_eq!(entry.original_url, "https://example.com");
        assert_eq!(entry.clicks, 0);
        assert!(entry.created_at <= Utc::now());
    }

    #[test]
    fn test_entry_clone_is_detached() {
        let entry = UrlEntry::new("abc123xy".to_string(), "https://example.com".to_string());
        let mut copy = entry.clone();
        copy.clicks += 1;

        assert_eq!(entry.clicks, 0);
        assert_eq!(copy.clicks, 1);
    }
}
