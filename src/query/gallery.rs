use itertools::Itertools;
use tracing::debug;

use crate::model::{GalleryItem, CATEGORY_ALL};

/// Keep only gallery items in the given category, `"all"` meaning no filter.
pub fn filter_by_category(items: &[GalleryItem], category_id: &str) -> Vec<GalleryItem> {
    if category_id == CATEGORY_ALL {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|i| i.category == category_id)
        .cloned()
        .collect()
}

/// Keep only items from the given year; `None` means no year filter.
pub fn filter_by_year(items: &[GalleryItem], year: Option<u16>) -> Vec<GalleryItem> {
    match year {
        None => items.to_vec(),
        Some(y) => items.iter().filter(|i| i.year == y).cloned().collect(),
    }
}

/// Gallery page pipeline: category filter first, then year filter narrows
/// further. There is no text search for the gallery.
pub fn query(items: &[GalleryItem], category_id: &str, year: Option<u16>) -> Vec<GalleryItem> {
    let result = filter_by_year(&filter_by_category(items, category_id), year);
    debug!(category_id, ?year, count = result.len(), "gallery query");
    result
}

/// The years present across all items, deduplicated, most recent first.
pub fn distinct_years(items: &[GalleryItem]) -> Vec<u16> {
    items
        .iter()
        .map(|i| i.year)
        .unique()
        .sorted_by(|a, b| b.cmp(a))
        .collect()
}

/// Items flagged for the featured strip, input order preserved.
pub fn featured(items: &[GalleryItem]) -> Vec<GalleryItem> {
    items.iter().filter(|i| i.featured).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaType;

    fn item(id: &str, category: &str, year: u16, featured: bool) -> GalleryItem {
        GalleryItem {
            id: id.to_string(),
            src: format!("/gallery/{id}.jpg"),
            media: MediaType::Image,
            title: id.to_string(),
            category: category.to_string(),
            year,
            featured,
        }
    }

    fn sample() -> Vec<GalleryItem> {
        vec![
            item("g1", "stage", 2025, true),
            item("g2", "crowd", 2024, false),
            item("g3", "stage", 2024, false),
            item("g4", "crowd", 2025, true),
        ]
    }

    #[test]
    fn test_filter_all_sentinel_is_identity() {
        assert_eq!(filter_by_category(&sample(), "all").len(), 4);
    }

    #[test]
    fn test_category_then_year_narrows() {
        let result = query(&sample(), "stage", Some(2024));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "g3");
    }

    #[test]
    fn test_year_none_means_no_filter() {
        assert_eq!(query(&sample(), "crowd", None).len(), 2);
    }

    #[test]
    fn test_distinct_years_descending_deduplicated() {
        assert_eq!(distinct_years(&sample()), vec![2025, 2024]);
    }

    #[test]
    fn test_featured() {
        let ids: Vec<String> = featured(&sample()).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["g1", "g4"]);
    }
}
