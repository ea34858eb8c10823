use serde::{Deserialize, Serialize};

/// A member of the organizing team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// A named grouping of organizing-team members ("Core", "Technical", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCategory {
    pub name: String,
    pub members: Vec<TeamMember>,
}
