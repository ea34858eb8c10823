use serde::{Deserialize, Serialize};

/// A participating college on the inter-college leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub location: String,
    pub points: CollegePoints,
    pub events_participated: u16,
}

/// Point totals for a college, overall plus per-category sub-scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollegePoints {
    pub overall: u32,
    pub technical: u32,
    pub cultural: u32,
    pub gaming: u32,
    pub sports: u32,
    pub literary: u32,
}

impl CollegePoints {
    /// The score used when ranking by `category`.
    pub fn score(&self, category: PointsCategory) -> u32 {
        match category {
            PointsCategory::Overall => self.overall,
            PointsCategory::Technical => self.technical,
            PointsCategory::Cultural => self.cultural,
            PointsCategory::Gaming => self.gaming,
            PointsCategory::Sports => self.sports,
            PointsCategory::Literary => self.literary,
        }
    }
}

/// Which point field a leaderboard view ranks by.
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
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PointsCategory {
    #[default]
    Overall,
    Technical,
    Cultural,
    Gaming,
    Sports,
    Literary,
}

/// A college with its 1-based position in some ranking.
///
/// Ranks are recomputed per view, never stored: rank 1 in the technical
/// view need not be rank 1 overall.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCollege {
    pub rank: u32,
    pub college: College,
}
