use serde::{Deserialize, Serialize};

/// One memorable fight scene from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightEntry {
    pub anime_name: String,
    /// Fighters in billing order.
    pub characters_involved: Vec<String>,
    pub fight_description: String,
    pub fight_image: Option<String>,
    pub fight_video: Option<String>,
}
