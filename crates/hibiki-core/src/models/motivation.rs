use serde::{Deserialize, Serialize};

/// One motivational quote from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotivationEntry {
    pub character_name: String,
    pub anime_title: String,
    pub quote_text: String,
    pub character_image: Option<String>,
}
