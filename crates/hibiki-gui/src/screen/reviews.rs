use iced::widget::{button, column, container, row, rule, text};
use iced::{Alignment, Element, Length};

use hibiki_core::comments::CommentThread;
use hibiki_core::models::ReviewEntry;
use hibiki_core::section::Section;

use crate::screen::{Action, LoadState};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, cards};

/// Reviews screen state: fetched entries plus one ephemeral comment
/// thread per card. Threads are rebuilt on every (re)load and never
/// persisted.
pub struct Reviews {
    entries: Vec<ReviewEntry>,
    threads: Vec<CommentThread>,
    state: LoadState,
}

#[derive(Debug, Clone)]
pub enum Message {
    CommentInputChanged(usize, String),
    CommentSubmitted(usize),
    Reload,
}

impl Reviews {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            threads: Vec::new(),
            state: LoadState::default(),
        }
    }

    pub fn set_entries(&mut self, entries: Vec<ReviewEntry>) {
        self.threads = vec![CommentThread::new(); entries.len()];
        self.entries = entries;
        self.state = LoadState::Ready;
    }

    pub fn set_failed(&mut self, message: String) {
        self.entries.clear();
        self.threads.clear();
        self.state = LoadState::Failed(message);
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::CommentInputChanged(index, value) => {
                if let Some(thread) = self.threads.get_mut(index) {
                    thread.input = value;
                }
                Action::None
            }
            Message::CommentSubmitted(index) => {
                if self
                    .threads
                    .get_mut(index)
                    .map_or(false, |thread| thread.submit())
                {
                    Action::SetStatus("Comment added".into())
                } else {
                    Action::None
                }
            }
            Message::Reload => {
                self.state = LoadState::Loading;
                Action::Reload(Section::Reviews)
            }
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let count_text = format!(
            "{} {}",
            self.entries.len(),
            if self.entries.len() == 1 {
                "review"
            } else {
                "reviews"
            }
        );

        let header = row![
            text("Reviews")
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text(count_text)
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .width(Length::Fill),
            reload_button(cs),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .padding([style::SPACE_SM, style::SPACE_LG]);

        let body: Element<'a, Message> = match &self.state {
            LoadState::Loading => widgets::loading_state(cs),
            LoadState::Failed(message) => {
                container(widgets::error_banner(cs, message, Message::Reload))
                    .padding(style::SPACE_3XL)
                    .width(Length::Fill)
                    .center_x(Length::Fill)
                    .into()
            }
            LoadState::Ready if self.entries.is_empty() => {
                let icon = lucide_icons::iced::icon_star()
                    .size(48.0)
                    .color(cs.outline)
                    .into();
                widgets::empty_state(
                    cs,
                    icon,
                    "No reviews yet",
                    "The reviews dataset is empty.",
                )
            }
            LoadState::Ready => {
                let cards: Vec<Element<'a, Message>> = self
                    .entries
                    .iter()
                    .zip(&self.threads)
                    .enumerate()
                    .map(|(i, (entry, thread))| {
                        cards::review_card(
                            cs,
                            entry,
                            thread,
                            move |value| Message::CommentInputChanged(i, value),
                            Message::CommentSubmitted(i),
                        )
                    })
                    .collect();

                let wrap = iced_aw::Wrap::with_elements(cards)
                    .spacing(style::SPACE_SM)
                    .line_spacing(style::SPACE_SM);

                widgets::styled_scrollable(
                    container(wrap).padding([style::SPACE_SM, style::SPACE_LG]),
                    cs,
                )
                .height(Length::Fill)
                .into()
            }
        };

        column![header, rule::horizontal(1), body]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn reload_button<'a>(cs: &ColorScheme) -> Element<'a, Message> {
    button(
        container(
            lucide_icons::iced::icon_refresh_cw()
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant),
        )
        .center(Length::Fill),
    )
    .width(Length::Fixed(28.0))
    .height(Length::Fixed(28.0))
    .padding(0)
    .on_press(Message::Reload)
    .style(theme::icon_button(cs))
    .into()
}
