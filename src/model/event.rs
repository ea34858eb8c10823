use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::common::Coordinator;

/// A single competition or show on the fest schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub description: String,
    pub date: NaiveDate,
    /// Display time slot, e.g. "10:00 AM".
    pub time: String,
    pub venue: String,
    /// Maximum members per registered team; 1 means solo.
    pub team_size: u8,
    /// Registration fee in whole rupees.
    pub registration_fee: u32,
    /// Prize pool as shown on the event card, e.g. "₹25,000".
    pub prize_pool: String,
    pub rules: Vec<String>,
    pub coordinator: Coordinator,
}

/// A category events are grouped under ("technical", "cultural", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: String,
    pub name: String,
}

/// An event category together with how many events fall under it.
///
/// The count is derived from the event table, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Orderings the event list supports.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "kebab-case")]
pub enum EventSortKey {
    #[default]
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "date")]
    Date,
    #[strum(serialize = "fee-asc")]
    FeeAsc,
    #[strum(serialize = "fee-desc")]
    FeeDesc,
}
