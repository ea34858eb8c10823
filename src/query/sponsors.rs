use strum::IntoEnumIterator;

use crate::model::{Sponsor, SponsorTier};

/// Group sponsors by tier, tiers in display order (title first), skipping
/// tiers with no sponsors. Within a tier, input order is preserved.
pub fn by_tier(sponsors: &[Sponsor]) -> Vec<(SponsorTier, Vec<Sponsor>)> {
    SponsorTier::iter()
        .filter_map(|tier| {
            let in_tier: Vec<Sponsor> = sponsors
                .iter()
                .filter(|s| s.tier == tier)
                .cloned()
                .collect();
            if in_tier.is_empty() {
                None
            } else {
                Some((tier, in_tier))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sponsor(id: &str, tier: SponsorTier) -> Sponsor {
        Sponsor {
            id: id.to_string(),
            name: id.to_string(),
            tier,
            logo_url: format!("/sponsors/{id}.png"),
            website: format!("https://{id}.example.com"),
        }
    }

    #[test]
    fn test_tiers_in_display_order_skipping_empty() {
        let sponsors = vec![
            sponsor("s1", SponsorTier::Gold),
            sponsor("s2", SponsorTier::Title),
            sponsor("s3", SponsorTier::Gold),
        ];
        let grouped = by_tier(&sponsors);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, SponsorTier::Title);
        assert_eq!(grouped[1].0, SponsorTier::Gold);
        let gold_ids: Vec<&str> = grouped[1].1.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(gold_ids, vec!["s1", "s3"]);
    }

    #[test]
    fn test_tier_parses_from_selector_strings() {
        assert_eq!("platinum".parse::<SponsorTier>().unwrap(), SponsorTier::Platinum);
        assert!("diamond".parse::<SponsorTier>().is_err());
    }
}
