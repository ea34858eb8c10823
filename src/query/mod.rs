pub mod events;
pub mod faqs;
pub mod fees;
pub mod gallery;
pub mod leaderboard;
pub mod sponsors;

/// Case-insensitive substring test.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// A query of only whitespace is treated the same as no query at all.
pub(crate) fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}
