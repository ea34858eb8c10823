use tracing::debug;

use crate::model::{Faq, CATEGORY_ALL};
use crate::query::{contains_ci, is_blank};

/// Keep only FAQs in the given category, with the `"all"` sentinel meaning
/// no filter.
pub fn filter_by_category(faqs: &[Faq], category_id: &str) -> Vec<Faq> {
    if category_id == CATEGORY_ALL {
        return faqs.to_vec();
    }
    faqs.iter()
        .filter(|f| f.category == category_id)
        .cloned()
        .collect()
}

/// Case-insensitive substring search over question OR answer text.
///
/// Whole FAQs are returned, never excerpts. A blank query is an identity
/// filter.
pub fn search(faqs: &[Faq], query: &str) -> Vec<Faq> {
    if is_blank(query) {
        return faqs.to_vec();
    }
    let needle = query.trim().to_lowercase();
    faqs.iter()
        .filter(|f| contains_ci(&f.question, &needle) || contains_ci(&f.answer, &needle))
        .cloned()
        .collect()
}

/// FAQ page pipeline. A non-blank search query supersedes the category
/// selection entirely: search always scans the full table, not the
/// category-filtered subset. Deliberate, not an oversight.
pub fn query(faqs: &[Faq], category_id: &str, text: &str) -> Vec<Faq> {
    let result = if is_blank(text) {
        filter_by_category(faqs, category_id)
    } else {
        search(faqs, text)
    };
    debug!(category_id, text, count = result.len(), "faq query");
    result
}
