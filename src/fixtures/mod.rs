//! The fixture tables behind the site: built once at startup, never
//! mutated. These stand in for what a real system would load from a
//! database.

mod colleges;
mod events;
mod faqs;
mod gallery;
mod sponsors;
mod team;

pub use colleges::colleges;
pub use events::{event_categories, events};
pub use faqs::{faq_categories, faqs};
pub use gallery::gallery_items;
pub use sponsors::sponsors;
pub use team::team_categories;
