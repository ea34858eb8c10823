use std::collections::HashMap;

use tracing::debug;

use crate::model::{CategoryCount, Event, EventCategory, EventSortKey, CATEGORY_ALL};
use crate::query::{contains_ci, is_blank};

/// Keep only events in the given category.
///
/// The `"all"` sentinel returns the input unchanged (same elements, same
/// order). An id that matches no category yields an empty list, not an
/// error.
pub fn filter_by_category(events: &[Event], category_id: &str) -> Vec<Event> {
    if category_id == CATEGORY_ALL {
        return events.to_vec();
    }
    events
        .iter()
        .filter(|e| e.category_id == category_id)
        .cloned()
        .collect()
}

/// Case-insensitive substring search over name, description, and the
/// category display name. A blank query is an identity filter.
///
/// Pure inclusion test: no fuzzy matching, no relevance ranking.
pub fn search(events: &[Event], categories: &[EventCategory], query: &str) -> Vec<Event> {
    if is_blank(query) {
        return events.to_vec();
    }
    let needle = query.trim().to_lowercase();
    let category_names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    events
        .iter()
        .filter(|e| {
            contains_ci(&e.name, &needle)
                || contains_ci(&e.description, &needle)
                || category_names
                    .get(e.category_id.as_str())
                    .is_some_and(|name| contains_ci(name, &needle))
        })
        .cloned()
        .collect()
}

/// Return a newly ordered copy of `events` under the given key.
///
/// All keys are total orders; the underlying sort is stable, so ties keep
/// their input order. The input is never mutated.
pub fn sort(events: &[Event], key: EventSortKey) -> Vec<Event> {
    let mut sorted = events.to_vec();
    match key {
        EventSortKey::Name => sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        EventSortKey::Date => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        EventSortKey::FeeAsc => sorted.sort_by(|a, b| a.registration_fee.cmp(&b.registration_fee)),
        EventSortKey::FeeDesc => sorted.sort_by(|a, b| b.registration_fee.cmp(&a.registration_fee)),
    }
    sorted
}

/// Full event list pipeline: category filter, then text search over the
/// filtered subset, then sort. The order matters and must not be rearranged.
pub fn query(
    events: &[Event],
    categories: &[EventCategory],
    category_id: &str,
    text: &str,
    key: EventSortKey,
) -> Vec<Event> {
    let by_category = filter_by_category(events, category_id);
    let matched = search(&by_category, categories, text);
    let result = sort(&matched, key);
    debug!(
        category_id,
        text,
        %key,
        count = result.len(),
        "event query"
    );
    result
}

/// Per-category event counts for the filter bar, with the `"all"` pseudo
/// category first carrying the total. Counts are derived from the event
/// table on every call, never stored.
pub fn category_counts(events: &[Event], categories: &[EventCategory]) -> Vec<CategoryCount> {
    let mut counts = vec![CategoryCount {
        id: CATEGORY_ALL.to_string(),
        name: "All".to_string(),
        count: events.len(),
    }];
    counts.extend(categories.iter().map(|c| CategoryCount {
        id: c.id.clone(),
        name: c.name.clone(),
        count: events.iter().filter(|e| e.category_id == c.id).count(),
    }));
    counts
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::Coordinator;

    fn event(id: &str, name: &str, category_id: &str, fee: u32, date: (i32, u32, u32)) -> Event {
        Event {
            id: id.to_string(),
            name: name.to_string(),
            category_id: category_id.to_string(),
            description: format!("{name} description"),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: "10:00 AM".to_string(),
            venue: "Main Stage".to_string(),
            team_size: 1,
            registration_fee: fee,
            prize_pool: "₹10,000".to_string(),
            rules: vec![],
            coordinator: Coordinator {
                name: "Asha".to_string(),
                phone: "9000000000".to_string(),
            },
        }
    }

    fn categories() -> Vec<EventCategory> {
        vec![
            EventCategory {
                id: "tech".to_string(),
                name: "Technical".to_string(),
            },
            EventCategory {
                id: "cultural".to_string(),
                name: "Cultural".to_string(),
            },
        ]
    }

    fn sample() -> Vec<Event> {
        vec![
            event("a", "Code Sprint", "tech", 100, (2026, 3, 15)),
            event("b", "Battle of Bands", "cultural", 200, (2026, 3, 5)),
            event("c", "Robo Race", "tech", 150, (2026, 3, 15)),
        ]
    }

    #[test]
    fn test_filter_all_sentinel_is_identity() {
        let events = sample();
        let filtered = filter_by_category(&events, "all");
        assert_eq!(filtered.len(), events.len());
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"], "order must be preserved");
    }

    #[test]
    fn test_filter_by_category() {
        let filtered = filter_by_category(&sample(), "tech");
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        assert!(filter_by_category(&sample(), "underwater-basket-weaving").is_empty());
    }

    #[test]
    fn test_search_blank_query_is_identity() {
        let events = sample();
        assert_eq!(search(&events, &categories(), "").len(), 3);
        assert_eq!(search(&events, &categories(), "   ").len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let matched = search(&sample(), &categories(), "CODE");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "a");
    }

    #[test]
    fn test_search_scans_category_display_name() {
        let matched = search(&sample(), &categories(), "cultural");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "b");
    }

    #[test]
    fn test_sort_fee_desc() {
        let sorted = sort(&sample(), EventSortKey::FeeDesc);
        let fees: Vec<u32> = sorted.iter().map(|e| e.registration_fee).collect();
        assert_eq!(fees, vec![200, 150, 100]);
    }

    #[test]
    fn test_sort_date_is_calendar_aware() {
        let events = vec![
            event("late", "Late", "tech", 0, (2026, 3, 15)),
            event("early", "Early", "tech", 0, (2026, 3, 5)),
        ];
        let sorted = sort(&events, EventSortKey::Date);
        assert_eq!(sorted[0].id, "early", "March 5 sorts before March 15");
    }

    #[test]
    fn test_sort_is_stable() {
        let sorted_once = sort(&sample(), EventSortKey::Date);
        let sorted_twice = sort(&sorted_once, EventSortKey::Date);
        let ids_once: Vec<&str> = sorted_once.iter().map(|e| e.id.as_str()).collect();
        let ids_twice: Vec<&str> = sorted_twice.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids_once, ids_twice);
        // a and c share a date; input order must win.
        assert_eq!(ids_once, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let events = sample();
        let _ = sort(&events, EventSortKey::FeeDesc);
        assert_eq!(events[0].id, "a");
    }

    #[test]
    fn test_query_searches_within_category_subset_only() {
        // "Battle of Bands" matches "ba" but is cultural; the tech-scoped
        // query must not see it.
        let result = query(
            &sample(),
            &categories(),
            "tech",
            "ba",
            EventSortKey::Name,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_counts_include_all_total() {
        let counts = category_counts(&sample(), &categories());
        assert_eq!(counts[0].id, "all");
        assert_eq!(counts[0].count, 3);
        let tech = counts.iter().find(|c| c.id == "tech").unwrap();
        assert_eq!(tech.count, 2);
    }

    #[test]
    fn test_sort_key_parses_from_selector_strings() {
        assert_eq!("fee-desc".parse::<EventSortKey>().unwrap(), EventSortKey::FeeDesc);
        assert_eq!("date".parse::<EventSortKey>().unwrap(), EventSortKey::Date);
        assert!("relevance".parse::<EventSortKey>().is_err());
    }
}
