use serde::{Deserialize, Serialize};

/// One anime entry from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeEntry {
    pub title: String,
    pub release_year: u32,
    pub description: String,
    pub cover_image: Option<String>,
    #[serde(rename = "trailerURL")]
    pub trailer_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_names() {
        let json = r#"{
            "title": "Frieren: Beyond Journey's End",
            "releaseYear": 2023,
            "description": "An elf mage outlives her party.",
            "coverImage": "https://example.com/frieren.jpg",
            "trailerURL": "https://example.com/frieren-trailer"
        }"#;
        let entry: AnimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.release_year, 2023);
        assert_eq!(
            entry.trailer_url.as_deref(),
            Some("https://example.com/frieren-trailer")
        );
    }

    #[test]
    fn test_missing_media_urls_decode_as_none() {
        let json = r#"{
            "title": "Mushishi",
            "releaseYear": 2005,
            "description": "A wanderer studies mushi."
        }"#;
        let entry: AnimeEntry = serde_json::from_str(json).unwrap();
        assert!(entry.cover_image.is_none());
        assert!(entry.trailer_url.is_none());
    }
}
