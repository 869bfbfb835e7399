pub mod artwork;
pub mod cards;
pub mod comment_box;
pub mod empty_state;
pub mod status;

pub use artwork::rounded_artwork;
pub use comment_box::comment_box;
pub use empty_state::empty_state;
pub use status::{error_banner, loading_state};

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}
