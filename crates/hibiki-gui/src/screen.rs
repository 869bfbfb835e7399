pub mod anime;
pub mod fights;
pub mod manga;
pub mod motivation;
pub mod reviews;

use hibiki_core::section::Section;

/// Which catalog section is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Anime,
    Manga,
    Reviews,
    Fights,
    Motivation,
}

/// Load lifecycle of one section's dataset.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly mutating
/// shared state — the app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Re-fetch this section's dataset.
    Reload(Section),
    /// Update the status bar message.
    SetStatus(String),
}
