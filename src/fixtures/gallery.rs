use crate::model::{GalleryItem, MediaType};

fn item(
    id: &str,
    src: &str,
    media: MediaType,
    title: &str,
    category: &str,
    year: u16,
    featured: bool,
) -> GalleryItem {
    GalleryItem {
        id: id.into(),
        src: src.into(),
        media,
        title: title.into(),
        category: category.into(),
        year,
        featured,
    }
}

pub fn gallery_items() -> Vec<GalleryItem> {
    use MediaType::{Image, Video};
    vec![
        item(
            "g-2025-opening",
            "/gallery/2025/opening-ceremony.jpg",
            Image,
            "Opening Ceremony 2025",
            "stage",
            2025,
            true,
        ),
        item(
            "g-2025-bands",
            "/gallery/2025/battle-of-bands.jpg",
            Image,
            "Battle of Bands Finals",
            "stage",
            2025,
            true,
        ),
        item(
            "g-2025-robowars",
            "/gallery/2025/robo-wars.mp4",
            Video,
            "Robo Wars Arena Highlights",
            "technical",
            2025,
            true,
        ),
        item(
            "g-2025-crowd",
            "/gallery/2025/crowd-evening.jpg",
            Image,
            "Evening Crowd at Main Stage",
            "crowd",
            2025,
            false,
        ),
        item(
            "g-2025-fashion",
            "/gallery/2025/fashion-walk.jpg",
            Image,
            "Fashion Walk",
            "stage",
            2025,
            false,
        ),
        item(
            "g-2024-dance",
            "/gallery/2024/classical-dance.jpg",
            Image,
            "Classical Dance Solo Winners",
            "stage",
            2024,
            false,
        ),
        item(
            "g-2024-hackathon",
            "/gallery/2024/hackathon-floor.jpg",
            Image,
            "Hackathon Floor at Midnight",
            "technical",
            2024,
            true,
        ),
        item(
            "g-2024-futsal",
            "/gallery/2024/futsal-final.mp4",
            Video,
            "Futsal Cup Final",
            "sports",
            2024,
            false,
        ),
        item(
            "g-2024-crowd",
            "/gallery/2024/crowd-daytime.jpg",
            Image,
            "Day Two Crowd",
            "crowd",
            2024,
            false,
        ),
        item(
            "g-2023-inauguration",
            "/gallery/2023/inauguration.jpg",
            Image,
            "Inauguration 2023",
            "stage",
            2023,
            false,
        ),
        item(
            "g-2023-quiz",
            "/gallery/2023/tech-quiz.jpg",
            Image,
            "Tech Quiz Stage Round",
            "technical",
            2023,
            false,
        ),
        item(
            "g-2023-closing",
            "/gallery/2023/closing-fireworks.jpg",
            Image,
            "Closing Night Fireworks",
            "crowd",
            2023,
            false,
        ),
    ]
}
