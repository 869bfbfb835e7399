use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

/// Centered placeholder while a section's dataset is in flight.
pub fn loading_state<'a, Message: 'a>(cs: &ColorScheme) -> Element<'a, Message> {
    container(
        text("Loading...")
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    )
    .padding(style::SPACE_3XL)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

/// Inline failure banner rendered in place of a section's cards.
///
/// One banner per section; other sections are unaffected. The retry
/// button re-fires the section's fetch.
pub fn error_banner<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    message: &'a str,
    on_retry: Message,
) -> Element<'a, Message> {
    let heading = row![
        lucide_icons::iced::icon_triangle_alert()
            .size(style::TEXT_LG)
            .color(cs.error),
        text("Failed to load this section")
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_TIGHT),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center);

    let content = column![
        heading,
        text(message)
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL),
        button(text("Retry").size(style::TEXT_SM))
            .on_press(on_retry)
            .padding([style::SPACE_SM, style::SPACE_XL])
            .style(theme::ghost_button(cs)),
    ]
    .spacing(style::SPACE_MD);

    container(content)
        .style(theme::error_banner(cs))
        .padding(style::SPACE_XL)
        .max_width(480.0)
        .into()
}
