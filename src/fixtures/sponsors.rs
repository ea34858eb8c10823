use crate::model::{Sponsor, SponsorTier};

fn sponsor(id: &str, name: &str, tier: SponsorTier, logo: &str, website: &str) -> Sponsor {
    Sponsor {
        id: id.into(),
        name: name.into(),
        tier,
        logo_url: logo.into(),
        website: website.into(),
    }
}

pub fn sponsors() -> Vec<Sponsor> {
    use SponsorTier::*;
    vec![
        sponsor(
            "sp-karnataka-bank",
            "Karnataka Bank",
            Title,
            "/sponsors/karnataka-bank.png",
            "https://karnatakabank.com",
        ),
        sponsor(
            "sp-infosys",
            "Infosys",
            Platinum,
            "/sponsors/infosys.png",
            "https://infosys.com",
        ),
        sponsor(
            "sp-robosoft",
            "Robosoft Technologies",
            Gold,
            "/sponsors/robosoft.png",
            "https://robosoftin.com",
        ),
        sponsor(
            "sp-mrpl",
            "MRPL",
            Gold,
            "/sponsors/mrpl.png",
            "https://mrpl.co.in",
        ),
        sponsor(
            "sp-ideal-cafe",
            "Ideal Ice Cream",
            Silver,
            "/sponsors/ideal.png",
            "https://idealicecream.com",
        ),
        sponsor(
            "sp-hangyo",
            "Hangyo",
            Silver,
            "/sponsors/hangyo.png",
            "https://hangyo.in",
        ),
        sponsor(
            "sp-campus-store",
            "Campus Store",
            Bronze,
            "/sponsors/campus-store.png",
            "https://campusstore.example.com",
        ),
        sponsor(
            "sp-daijiworld",
            "Daijiworld",
            Media,
            "/sponsors/daijiworld.png",
            "https://daijiworld.com",
        ),
        sponsor(
            "sp-deeksha",
            "Deeksha Learning",
            Education,
            "/sponsors/deeksha.png",
            "https://deekshalearning.com",
        ),
    ]
}
