use iced::widget::container;
use iced::{ContentFit, Element, Length};

use crate::art_cache::{ArtCache, ArtState};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Render an artwork image with rounded corners, or a styled placeholder.
///
/// Uses `ContentFit::Cover` so the image fills the frame completely,
/// cropping any overflow rather than leaving gaps. A missing URL, a
/// pending download, and a failed download all render the same
/// placeholder frame — a card never breaks over its image.
pub fn rounded_artwork<'a, Message: 'static>(
    cs: &ColorScheme,
    art: &'a ArtCache,
    url: Option<&str>,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    if let Some(ArtState::Loaded(path)) = url.and_then(|u| art.get(u)) {
        container(
            iced::widget::image(path.as_path())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .border_radius(radius),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(theme::artwork_placeholder(cs, radius))
        .into()
    } else {
        let icon_size = if width <= style::PORTRAIT_SIZE {
            style::TEXT_LG
        } else {
            style::TEXT_3XL
        };
        container(
            lucide_icons::iced::icon_image()
                .size(icon_size)
                .color(cs.outline)
                .center(),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(theme::artwork_placeholder(cs, radius))
        .into()
    }
}
