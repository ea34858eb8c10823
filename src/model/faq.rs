use serde::{Deserialize, Serialize};

/// A frequently asked question shown on the help page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
}
