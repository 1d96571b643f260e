use serde::{Deserialize, Serialize};

/// Shape of `data/sightseeing.json`: named categories of plain strings,
/// unlike the per-file item directories everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sightseeing {
    pub categories: Vec<SightseeingCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SightseeingCategory {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}
