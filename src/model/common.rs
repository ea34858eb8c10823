use serde::{Deserialize, Serialize};

/// The reserved category id meaning "no category filter applied".
pub const CATEGORY_ALL: &str = "all";

/// Contact person for an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinator {
    pub name: String,
    pub phone: String,
}
