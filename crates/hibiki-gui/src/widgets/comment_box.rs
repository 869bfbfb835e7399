use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use hibiki_core::comments::CommentThread;

use crate::style;
use crate::theme::{self, ColorScheme};

/// The ephemeral comment widget attached to one review card: submitted
/// comments in submission order above an input row. Blank submissions
/// are rejected by the thread itself, so the button is always enabled.
pub fn comment_box<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    thread: &'a CommentThread,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let mut content = column![].spacing(style::SPACE_SM).width(Length::Fill);

    if !thread.is_empty() {
        let mut list = column![].spacing(style::SPACE_XS);
        for comment in thread.comments() {
            list = list.push(
                text(comment.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }
        content = content.push(
            container(list)
                .style(theme::inset_panel(cs))
                .padding(style::SPACE_SM)
                .width(Length::Fill),
        );
    }

    let input = text_input("Add a comment...", &thread.input)
        .on_input(on_input)
        .on_submit(on_submit.clone())
        .size(style::INPUT_FONT_SIZE)
        .padding([style::SPACE_SM, style::SPACE_MD])
        .width(Length::Fill)
        .style(theme::text_input_style(cs));

    let post = button(text("Post").size(style::TEXT_SM))
        .on_press(on_submit)
        .padding([style::SPACE_SM, style::SPACE_MD])
        .style(theme::primary_button(cs));

    content
        .push(
            row![input, post]
                .spacing(style::SPACE_SM)
                .align_y(Alignment::Center),
        )
        .into()
}
