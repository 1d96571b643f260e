use serde::{Deserialize, Serialize};

/// One recommendation entry, loaded from a JSON content file.
///
/// The content files are written by hand, so everything except the title is
/// optional and unknown keys are ignored. Keys are camelCase on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub title: String,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub price_range: Option<String>,
    pub known_for: Option<String>,
    pub description: Option<String>,
    pub vibe: Option<String>,
    pub best_for: Option<String>,
    pub rule: Option<String>,
    pub map_link: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub tip: Option<String>,
    pub when: Option<String>,
    #[serde(rename = "where")]
    pub where_to: Option<String>,
    pub travel_time: Option<String>,
    pub how_to_get_there: Option<String>,
    pub ticket_info: Option<String>,
    pub ticket_link: Option<String>,
    /// Semantic subtype used by bucketed sections ("Cocktails", "Top Pick", ...).
    pub category: Option<String>,
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default)]
    pub top_pick: bool,
    #[serde(default)]
    pub must_book: bool,
    /// Which source directory the item came from. Written by the loader,
    /// never present in the content file itself.
    #[serde(skip)]
    pub source_label: Option<String>,
}

impl Item {
    /// Grouping label: the source directory's label, or "Other" when the
    /// item was loaded outside the labelled pipeline.
    pub fn label(&self) -> &str {
        self.source_label.as_deref().unwrap_or("Other")
    }

    /// First non-empty of the description-ish fields, in the order the
    /// compact list shows them.
    pub fn blurb(&self) -> &str {
        self.known_for
            .as_deref()
            .or(self.description.as_deref())
            .or(self.vibe.as_deref())
            .unwrap_or("")
    }
}
