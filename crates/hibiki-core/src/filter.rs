//! Title filtering for the anime section.
//!
//! The filter is recomputed from scratch on every query change; results
//! are indices into the unfiltered entry list so the caller never clones
//! or reorders entries.

/// Case-insensitive substring containment. An empty query matches
/// every title.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Indices of the items whose title matches `query`, in source order.
pub fn matching_indices<T>(items: &[T], query: &str, title: impl Fn(&T) -> &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| title_matches(title(item), query))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: &[&str] = &[
        "Naruto",
        "Naruto Shippuden",
        "One Piece",
        "Boruto: Naruto Next Generations",
    ];

    fn indices(query: &str) -> Vec<usize> {
        matching_indices(TITLES, query, |t| t)
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(indices("naruto"), vec![0, 1, 3]);
        assert_eq!(indices("NARUTO"), vec![0, 1, 3]);
        assert_eq!(indices("pIeCe"), vec![2]);
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert_eq!(indices(""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_match() {
        assert!(indices("bleach").is_empty());
    }

    #[test]
    fn test_title_matches() {
        assert!(title_matches("Naruto Shippuden", "shippu"));
        assert!(title_matches("Naruto", ""));
        assert!(!title_matches("Naruto", "one piece"));
    }
}
