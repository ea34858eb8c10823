use serde::{Deserialize, Serialize};

/// A photo or video in the fest gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub src: String,
    pub media: MediaType,
    pub title: String,
    pub category: String,
    pub year: u16,
    pub featured: bool,
}

/// Kind of media a gallery item holds.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}
