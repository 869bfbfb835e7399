pub mod anime;
pub mod fight;
pub mod manga;
pub mod motivation;
pub mod review;

pub use anime::AnimeEntry;
pub use fight::FightEntry;
pub use manga::MangaEntry;
pub use motivation::MotivationEntry;
pub use review::ReviewEntry;
