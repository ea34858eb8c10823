use crate::model::{College, CollegePoints};

fn college(
    id: &str,
    name: &str,
    short_name: &str,
    location: &str,
    points: CollegePoints,
    events_participated: u16,
) -> College {
    College {
        id: id.into(),
        name: name.into(),
        short_name: short_name.into(),
        location: location.into(),
        points,
        events_participated,
    }
}

fn points(overall: u32, technical: u32, cultural: u32, gaming: u32, sports: u32, literary: u32) -> CollegePoints {
    CollegePoints {
        overall,
        technical,
        cultural,
        gaming,
        sports,
        literary,
    }
}

pub fn colleges() -> Vec<College> {
    vec![
        college(
            "nmamit",
            "NMAM Institute of Technology",
            "NMAMIT",
            "Nitte",
            points(1240, 420, 310, 150, 200, 160),
            11,
        ),
        college(
            "sjec",
            "St Joseph Engineering College",
            "SJEC",
            "Mangaluru",
            points(1105, 350, 380, 120, 140, 115),
            10,
        ),
        college(
            "sahyadri",
            "Sahyadri College of Engineering and Management",
            "SCEM",
            "Mangaluru",
            points(980, 390, 220, 180, 110, 80),
            9,
        ),
        college(
            "canara",
            "Canara Engineering College",
            "CEC",
            "Benjanapadavu",
            points(860, 240, 260, 90, 170, 100),
            9,
        ),
        college(
            "aiet",
            "Alva's Institute of Engineering and Technology",
            "AIET",
            "Moodbidri",
            points(845, 210, 330, 70, 150, 85),
            8,
        ),
        college(
            "mite",
            "Mangalore Institute of Technology and Engineering",
            "MITE",
            "Moodabidri",
            points(790, 280, 180, 160, 100, 70),
            8,
        ),
        college(
            "yit",
            "Yenepoya Institute of Technology",
            "YIT",
            "Moodbidri",
            points(610, 170, 190, 110, 80, 60),
            7,
        ),
        college(
            "srinivas",
            "Srinivas Institute of Technology",
            "SIT",
            "Mangaluru",
            points(540, 150, 160, 100, 70, 60),
            6,
        ),
    ]
}
