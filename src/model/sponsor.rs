use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// A fest sponsor, shown grouped by tier on the sponsors page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub tier: SponsorTier,
    pub logo_url: String,
    pub website: String,
}

/// Sponsorship tiers, declared in page display order.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    Title,
    Platinum,
    Gold,
    Silver,
    Bronze,
    Media,
    Education,
}
