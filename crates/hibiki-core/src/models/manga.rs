use serde::{Deserialize, Serialize};

/// One manga entry from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaEntry {
    pub title: String,
    pub author: String,
    pub publication_year: u32,
    pub summary: String,
    pub cover_image: Option<String>,
}
