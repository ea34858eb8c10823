use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::error::{CatalogError, Result};
use crate::fixtures;
use crate::model::*;
use crate::query;
use crate::query::fees::FeeBreakdown;

/// The raw tables a [`Catalog`] is assembled from.
#[derive(Debug, Clone, Default)]
pub struct CatalogTables {
    pub event_categories: Vec<EventCategory>,
    pub events: Vec<Event>,
    pub faq_categories: Vec<String>,
    pub faqs: Vec<Faq>,
    pub gallery: Vec<GalleryItem>,
    pub colleges: Vec<College>,
    pub sponsors: Vec<Sponsor>,
    pub team: Vec<TeamCategory>,
}

/// The main entry point for querying fest data.
///
/// A `Catalog` holds every fixture table, validated once at construction,
/// and exposes the filter, search, sort, and ranking operations the pages
/// are built from. All methods are pure reads; nothing mutates after
/// construction.
///
/// # Examples
///
/// ```
/// use varnothsava_catalog::{Catalog, EventSortKey};
///
/// # fn example() -> varnothsava_catalog::Result<()> {
/// let catalog = Catalog::load()?;
/// let robotics = catalog.query_events("technical", "robo", EventSortKey::Date);
/// println!("{} robotics events", robotics.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Catalog {
    tables: CatalogTables,
}

impl Catalog {
    /// Build the catalog from the built-in fixture tables.
    pub fn load() -> Result<Self> {
        Self::from_tables(CatalogTables {
            event_categories: fixtures::event_categories(),
            events: fixtures::events(),
            faq_categories: fixtures::faq_categories(),
            faqs: fixtures::faqs(),
            gallery: fixtures::gallery_items(),
            colleges: fixtures::colleges(),
            sponsors: fixtures::sponsors(),
            team: fixtures::team_categories(),
        })
    }

    /// Build a catalog from caller-supplied tables, enforcing the
    /// construction invariants: unique ids per table, and every event and
    /// FAQ referencing a known category.
    pub fn from_tables(tables: CatalogTables) -> Result<Self> {
        check_unique("event", tables.events.iter().map(|e| &e.id))?;
        check_unique("faq", tables.faqs.iter().map(|f| &f.id))?;
        check_unique("gallery item", tables.gallery.iter().map(|g| &g.id))?;
        check_unique("college", tables.colleges.iter().map(|c| &c.id))?;
        check_unique("sponsor", tables.sponsors.iter().map(|s| &s.id))?;

        let category_ids: HashSet<&str> = tables
            .event_categories
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        for event in &tables.events {
            if !category_ids.contains(event.category_id.as_str()) {
                return Err(CatalogError::UnknownEventCategory {
                    event_id: event.id.clone(),
                    category_id: event.category_id.clone(),
                });
            }
        }

        let faq_categories: HashSet<&str> =
            tables.faq_categories.iter().map(String::as_str).collect();
        for faq in &tables.faqs {
            if !faq_categories.contains(faq.category.as_str()) {
                return Err(CatalogError::UnknownFaqCategory {
                    faq_id: faq.id.clone(),
                    category: faq.category.clone(),
                });
            }
        }

        Ok(Self { tables })
    }

    pub fn events(&self) -> &[Event] {
        &self.tables.events
    }

    pub fn event_categories(&self) -> &[EventCategory] {
        &self.tables.event_categories
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.tables.faqs
    }

    pub fn faq_categories(&self) -> &[String] {
        &self.tables.faq_categories
    }

    pub fn gallery(&self) -> &[GalleryItem] {
        &self.tables.gallery
    }

    pub fn colleges(&self) -> &[College] {
        &self.tables.colleges
    }

    pub fn sponsors(&self) -> &[Sponsor] {
        &self.tables.sponsors
    }

    pub fn team(&self) -> &[TeamCategory] {
        &self.tables.team
    }

    /// A single event by id, for the detail modal.
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.tables.events.iter().find(|e| e.id == id)
    }

    /// A single college by id.
    pub fn college(&self, id: &str) -> Option<&College> {
        self.tables.colleges.iter().find(|c| c.id == id)
    }

    /// The event list pipeline: category filter, then text search, then
    /// sort.
    #[instrument(skip(self))]
    pub fn query_events(&self, category_id: &str, text: &str, key: EventSortKey) -> Vec<Event> {
        query::events::query(
            &self.tables.events,
            &self.tables.event_categories,
            category_id,
            text,
            key,
        )
    }

    /// Like [`query_events`](Self::query_events), taking the sort key as
    /// the raw selector string a sort dropdown holds.
    pub fn query_events_by_selector(
        &self,
        category_id: &str,
        text: &str,
        key: &str,
    ) -> Result<Vec<Event>> {
        let key: EventSortKey = key.parse()?;
        Ok(self.query_events(category_id, text, key))
    }

    /// Per-category event counts for the filter bar.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        query::events::category_counts(&self.tables.events, &self.tables.event_categories)
    }

    /// The FAQ pipeline: a non-blank search supersedes the category filter.
    #[instrument(skip(self))]
    pub fn query_faqs(&self, category_id: &str, text: &str) -> Vec<Faq> {
        query::faqs::query(&self.tables.faqs, category_id, text)
    }

    /// The gallery pipeline: category filter, then optional year filter.
    #[instrument(skip(self))]
    pub fn query_gallery(&self, category_id: &str, year: Option<u16>) -> Vec<GalleryItem> {
        query::gallery::query(&self.tables.gallery, category_id, year)
    }

    /// Years available in the gallery year filter, most recent first.
    pub fn gallery_years(&self) -> Vec<u16> {
        query::gallery::distinct_years(&self.tables.gallery)
    }

    /// Gallery items for the featured strip.
    pub fn featured_gallery(&self) -> Vec<GalleryItem> {
        query::gallery::featured(&self.tables.gallery)
    }

    /// The full overall leaderboard, rank 1 first.
    #[instrument(skip(self))]
    pub fn leaderboard(&self) -> Vec<RankedCollege> {
        query::leaderboard::rank_colleges(&self.tables.colleges)
    }

    /// Top `n` colleges by the chosen sub-score.
    #[instrument(skip(self))]
    pub fn top_colleges(&self, category: PointsCategory, n: usize) -> Vec<RankedCollege> {
        query::leaderboard::top_by_category(&self.tables.colleges, category, n)
    }

    /// Sponsors grouped by tier in display order.
    pub fn sponsors_by_tier(&self) -> Vec<(SponsorTier, Vec<Sponsor>)> {
        query::sponsors::by_tier(&self.tables.sponsors)
    }

    /// Registration cost for the selected events at the given instant.
    #[instrument(skip(self))]
    pub fn registration_fees(&self, selected_ids: &[&str], now: DateTime<Utc>) -> FeeBreakdown {
        query::fees::calculate_total(selected_ids, &self.tables.events, now)
    }
}

fn check_unique<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a String>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(CatalogError::DuplicateId {
                table,
                id: id.clone(),
            });
        }
    }
    Ok(())
}
