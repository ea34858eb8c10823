use chrono::NaiveDate;

use crate::model::{Coordinator, Event, EventCategory};

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, m, d).unwrap()
}

fn coordinator(name: &str, phone: &str) -> Coordinator {
    Coordinator {
        name: name.into(),
        phone: phone.into(),
    }
}

pub fn event_categories() -> Vec<EventCategory> {
    [
        ("technical", "Technical"),
        ("cultural", "Cultural"),
        ("gaming", "Gaming"),
        ("sports", "Sports"),
        ("literary", "Literary"),
    ]
    .into_iter()
    .map(|(id, name)| EventCategory {
        id: id.into(),
        name: name.into(),
    })
    .collect()
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "code-clash".into(),
            name: "Code Clash".into(),
            category_id: "technical".into(),
            description: "A 12-hour team hackathon: build a working product from a theme \
                          revealed on the spot."
                .into(),
            date: day(3, 13),
            time: "9:00 AM".into(),
            venue: "CS Lab Block A".into(),
            team_size: 4,
            registration_fee: 400,
            prize_pool: "₹25,000".into(),
            rules: vec![
                "Teams of 2 to 4 members.".into(),
                "All code must be written during the event.".into(),
                "Internet access is allowed; pre-built templates are not.".into(),
            ],
            coordinator: coordinator("Ananya Shetty", "9876543210"),
        },
        Event {
            id: "robo-wars".into(),
            name: "Robo Wars".into(),
            category_id: "technical".into(),
            description: "Combat robotics in a 15kg class. Last bot moving wins.".into(),
            date: day(3, 14),
            time: "2:00 PM".into(),
            venue: "Open Arena".into(),
            team_size: 5,
            registration_fee: 500,
            prize_pool: "₹40,000".into(),
            rules: vec![
                "Bots must pass the safety inspection before round one.".into(),
                "Maximum weight 15kg including weapons.".into(),
                "No projectiles, liquids, or EMP devices.".into(),
            ],
            coordinator: coordinator("Rakshith Kumar", "9876543211"),
        },
        Event {
            id: "circuit-hunt".into(),
            name: "Circuit Hunt".into(),
            category_id: "technical".into(),
            description: "Debug and rebuild broken analog circuits against the clock.".into(),
            date: day(3, 13),
            time: "11:00 AM".into(),
            venue: "Electronics Lab".into(),
            team_size: 2,
            registration_fee: 100,
            prize_pool: "₹8,000".into(),
            rules: vec![
                "Teams of exactly 2.".into(),
                "Only the components on the bench may be used.".into(),
            ],
            coordinator: coordinator("Deeksha Rao", "9876543212"),
        },
        Event {
            id: "tech-quiz".into(),
            name: "Tech Quiz".into(),
            category_id: "technical".into(),
            description: "Three rounds on computing history, hardware, and current tech.".into(),
            date: day(3, 15),
            time: "10:00 AM".into(),
            venue: "Seminar Hall 1".into(),
            team_size: 2,
            registration_fee: 50,
            prize_pool: "₹6,000".into(),
            rules: vec![
                "Written prelims; top six teams reach the stage round.".into(),
                "No electronic devices during any round.".into(),
            ],
            coordinator: coordinator("Vishal Nayak", "9876543213"),
        },
        Event {
            id: "battle-of-bands".into(),
            name: "Battle of Bands".into(),
            category_id: "cultural".into(),
            description: "Inter-college band face-off, any genre, 15 minutes per band.".into(),
            date: day(3, 14),
            time: "6:00 PM".into(),
            venue: "Main Stage".into(),
            team_size: 8,
            registration_fee: 600,
            prize_pool: "₹30,000".into(),
            rules: vec![
                "Minimum 3, maximum 8 members on stage.".into(),
                "15 minutes including setup and sound check.".into(),
                "Backing tracks are not permitted.".into(),
            ],
            coordinator: coordinator("Meghana Pai", "9876543214"),
        },
        Event {
            id: "classical-solo".into(),
            name: "Classical Dance Solo".into(),
            category_id: "cultural".into(),
            description: "Solo classical dance in any recognized Indian classical form.".into(),
            date: day(3, 13),
            time: "4:00 PM".into(),
            venue: "Auditorium".into(),
            team_size: 1,
            registration_fee: 150,
            prize_pool: "₹10,000".into(),
            rules: vec![
                "Performance time 5 to 7 minutes.".into(),
                "Music must be submitted a day in advance.".into(),
            ],
            coordinator: coordinator("Shravya Hegde", "9876543215"),
        },
        Event {
            id: "fashion-walk".into(),
            name: "Fashion Walk".into(),
            category_id: "cultural".into(),
            description: "Theme-based team ramp walk judged on costume, choreography, and \
                          stage presence."
                .into(),
            date: day(3, 15),
            time: "7:00 PM".into(),
            venue: "Main Stage".into(),
            team_size: 12,
            registration_fee: 800,
            prize_pool: "₹35,000".into(),
            rules: vec![
                "Teams of 8 to 12.".into(),
                "10 minutes per team including entry and exit.".into(),
                "Themes will be shared two weeks before the fest.".into(),
            ],
            coordinator: coordinator("Nidhi Kamath", "9876543216"),
        },
        Event {
            id: "valorant-lan".into(),
            name: "Valorant LAN Showdown".into(),
            category_id: "gaming".into(),
            description: "5v5 LAN bracket, best of one until semifinals, finals best of \
                          three."
                .into(),
            date: day(3, 14),
            time: "10:00 AM".into(),
            venue: "Gaming Zone, IT Block".into(),
            team_size: 5,
            registration_fee: 500,
            prize_pool: "₹20,000".into(),
            rules: vec![
                "Full team of 5 required at check-in.".into(),
                "Peripherals provided; bringing your own is allowed.".into(),
            ],
            coordinator: coordinator("Arjun Bhat", "9876543217"),
        },
        Event {
            id: "bgmi-royale".into(),
            name: "BGMI Campus Royale".into(),
            category_id: "gaming".into(),
            description: "Squad battle royale across three maps; points for placement and \
                          finishes."
                .into(),
            date: day(3, 13),
            time: "1:00 PM".into(),
            venue: "Gaming Zone, IT Block".into(),
            team_size: 4,
            registration_fee: 200,
            prize_pool: "₹12,000".into(),
            rules: vec![
                "Squads of 4; no substitutes mid-tournament.".into(),
                "Emulators are banned.".into(),
            ],
            coordinator: coordinator("Sameer Khan", "9876543218"),
        },
        Event {
            id: "futsal-cup".into(),
            name: "Futsal Cup".into(),
            category_id: "sports".into(),
            description: "5-a-side knockout futsal on the outdoor court.".into(),
            date: day(3, 15),
            time: "8:00 AM".into(),
            venue: "Outdoor Court".into(),
            team_size: 7,
            registration_fee: 350,
            prize_pool: "₹15,000".into(),
            rules: vec![
                "Squads of 7 (5 playing, 2 substitutes).".into(),
                "Two halves of 10 minutes each.".into(),
            ],
            coordinator: coordinator("Rohan D'Souza", "9876543219"),
        },
        Event {
            id: "war-of-words".into(),
            name: "War of Words".into(),
            category_id: "literary".into(),
            description: "Parliamentary-style debate on motions announced 30 minutes before \
                          each round."
                .into(),
            date: day(3, 14),
            time: "11:00 AM".into(),
            venue: "Seminar Hall 2".into(),
            team_size: 2,
            registration_fee: 100,
            prize_pool: "₹8,000".into(),
            rules: vec![
                "Teams of 2, speaking for and against.".into(),
                "7 minutes per speaker, 1 minute of protected time.".into(),
            ],
            coordinator: coordinator("Aditi Prabhu", "9876543220"),
        },
        Event {
            id: "just-a-minute".into(),
            name: "Just A Minute".into(),
            category_id: "literary".into(),
            description: "Speak for sixty seconds without hesitation, repetition, or \
                          deviation."
                .into(),
            date: day(3, 13),
            time: "3:00 PM".into(),
            venue: "Seminar Hall 2".into(),
            team_size: 1,
            registration_fee: 50,
            prize_pool: "₹4,000".into(),
            rules: vec![
                "Topics are drawn by lot on stage.".into(),
                "Judges' challenge rulings are final.".into(),
            ],
            coordinator: coordinator("Karthik Shenoy", "9876543221"),
        },
    ]
}
