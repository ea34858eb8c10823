use crate::model::{TeamCategory, TeamMember};

fn member(id: &str, name: &str, role: &str, phone: Option<&str>, email: Option<&str>) -> TeamMember {
    TeamMember {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        phone: phone.map(String::from),
        email: email.map(String::from),
    }
}

pub fn team_categories() -> Vec<TeamCategory> {
    vec![
        TeamCategory {
            name: "Core Committee".into(),
            members: vec![
                member(
                    "tm-convener",
                    "Dr. Prashanth Shetty",
                    "Convener",
                    None,
                    Some("convener@varnothsava.in"),
                ),
                member(
                    "tm-secretary",
                    "Shreya Kini",
                    "Student Secretary",
                    Some("9812345670"),
                    Some("secretary@varnothsava.in"),
                ),
                member(
                    "tm-treasurer",
                    "Abhishek Poojary",
                    "Treasurer",
                    Some("9812345671"),
                    None,
                ),
            ],
        },
        TeamCategory {
            name: "Technical Committee".into(),
            members: vec![
                member("tm-tech-head", "Varun Kamath", "Technical Head", Some("9812345672"), None),
                member("tm-web-lead", "Prajwal Acharya", "Website Lead", None, Some("web@varnothsava.in")),
                member("tm-av-lead", "Sneha Ballal", "Audio/Visual Lead", Some("9812345673"), None),
            ],
        },
        TeamCategory {
            name: "Cultural Committee".into(),
            members: vec![
                member("tm-cultural-head", "Dhanya Suvarna", "Cultural Head", Some("9812345674"), None),
                member("tm-stage-manager", "Nishanth Salian", "Stage Manager", Some("9812345675"), None),
            ],
        },
    ]
}
