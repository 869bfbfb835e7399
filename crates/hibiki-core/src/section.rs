use crate::models::{AnimeEntry, FightEntry, MangaEntry, MotivationEntry, ReviewEntry};

/// The five catalog sections. Doubles as the card-kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Anime,
    Manga,
    Reviews,
    Fights,
    Motivation,
}

impl Section {
    pub const ALL: &[Section] = &[
        Self::Anime,
        Self::Manga,
        Self::Reviews,
        Self::Fights,
        Self::Motivation,
    ];

    /// Dataset file name for this section, relative to the source base.
    pub fn resource(self) -> &'static str {
        match self {
            Self::Anime => "anime-data.json",
            Self::Manga => "manga-data.json",
            Self::Reviews => "reviews-data.json",
            Self::Fights => "fights-data.json",
            Self::Motivation => "motivation-data.json",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anime => write!(f, "Anime"),
            Self::Manga => write!(f, "Manga"),
            Self::Reviews => write!(f, "Reviews"),
            Self::Fights => write!(f, "Fights"),
            Self::Motivation => write!(f, "Motivation"),
        }
    }
}

/// The decoded dataset for one section.
///
/// Entries are read-only after fetch; rendering only projects them.
#[derive(Debug, Clone)]
pub enum SectionData {
    Anime(Vec<AnimeEntry>),
    Manga(Vec<MangaEntry>),
    Reviews(Vec<ReviewEntry>),
    Fights(Vec<FightEntry>),
    Motivation(Vec<MotivationEntry>),
}

impl SectionData {
    pub fn empty(section: Section) -> Self {
        match section {
            Section::Anime => Self::Anime(Vec::new()),
            Section::Manga => Self::Manga(Vec::new()),
            Section::Reviews => Self::Reviews(Vec::new()),
            Section::Fights => Self::Fights(Vec::new()),
            Section::Motivation => Self::Motivation(Vec::new()),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Self::Anime(_) => Section::Anime,
            Self::Manga(_) => Section::Manga,
            Self::Reviews(_) => Section::Reviews,
            Self::Fights(_) => Section::Fights,
            Self::Motivation(_) => Section::Motivation,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Anime(v) => v.len(),
            Self::Manga(v) => v.len(),
            Self::Reviews(v) => v.len(),
            Self::Fights(v) => v.len(),
            Self::Motivation(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cap the entry count at `limit`, keeping source order.
    /// `None` means unlimited.
    pub fn apply_limit(&mut self, limit: Option<usize>) {
        let Some(limit) = limit else {
            return;
        };
        match self {
            Self::Anime(v) => v.truncate(limit),
            Self::Manga(v) => v.truncate(limit),
            Self::Reviews(v) => v.truncate(limit),
            Self::Fights(v) => v.truncate(limit),
            Self::Motivation(v) => v.truncate(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manga(titles: &[&str]) -> SectionData {
        SectionData::Manga(
            titles
                .iter()
                .map(|t| MangaEntry {
                    title: t.to_string(),
                    author: "author".into(),
                    publication_year: 1999,
                    summary: String::new(),
                    cover_image: None,
                })
                .collect(),
        )
    }

    #[test]
    fn test_limit_caps_and_preserves_order() {
        let mut data = manga(&["one", "two", "three"]);
        data.apply_limit(Some(2));
        assert_eq!(data.len(), 2);
        let SectionData::Manga(entries) = data else {
            panic!("section kind changed");
        };
        assert_eq!(entries[0].title, "one");
        assert_eq!(entries[1].title, "two");
    }

    #[test]
    fn test_limit_larger_than_data_is_noop() {
        let mut data = manga(&["one", "two"]);
        data.apply_limit(Some(10));
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_no_limit_keeps_everything() {
        let mut data = manga(&["one", "two", "three"]);
        data.apply_limit(None);
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_empty_matches_section() {
        for &section in Section::ALL {
            let data = SectionData::empty(section);
            assert_eq!(data.section(), section);
            assert!(data.is_empty());
        }
    }
}
