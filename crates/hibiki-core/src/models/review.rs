use serde::{Deserialize, Serialize};

/// One reader review from the catalog.
///
/// `review_title` and `spoiler` are optional on the wire; everything else
/// is expected to be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub anime_title: String,
    pub review_title: Option<String>,
    pub reviewer_name: String,
    pub review_date: String,
    /// Rating on a 0-5 scale.
    pub rating: f32,
    pub review_text: String,
    #[serde(default)]
    pub spoiler: bool,
    pub comment_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "animeTitle": "Vinland Saga",
            "reviewerName": "thorfinn_fan",
            "reviewDate": "2024-03-11",
            "rating": 4.5,
            "reviewText": "A revenge story that outgrows revenge.",
            "commentCount": 12
        }"#;
        let review: ReviewEntry = serde_json::from_str(json).unwrap();
        assert!(review.review_title.is_none());
        assert!(!review.spoiler);
        assert_eq!(review.comment_count, 12);
    }

    #[test]
    fn test_spoiler_flag_decodes() {
        let json = r#"{
            "animeTitle": "Made in Abyss",
            "reviewTitle": "Descend with care",
            "reviewerName": "cave_raider",
            "reviewDate": "2024-06-02",
            "rating": 5,
            "reviewText": "The sixth layer changes everything.",
            "spoiler": true,
            "commentCount": 3
        }"#;
        let review: ReviewEntry = serde_json::from_str(json).unwrap();
        assert!(review.spoiler);
        assert_eq!(review.review_title.as_deref(), Some("Descend with care"));
        assert_eq!(review.rating, 5.0);
    }
}
