use iced::widget::{button, column, container, row, rule, text};
use iced::{Alignment, Element, Length};

use hibiki_core::models::MotivationEntry;
use hibiki_core::section::Section;

use crate::art_cache::ArtCache;
use crate::screen::{Action, LoadState};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, cards};

/// Motivation screen state.
pub struct Motivation {
    entries: Vec<MotivationEntry>,
    state: LoadState,
}

#[derive(Debug, Clone)]
pub enum Message {
    Reload,
}

impl Motivation {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            state: LoadState::default(),
        }
    }

    pub fn set_entries(&mut self, entries: Vec<MotivationEntry>) {
        self.entries = entries;
        self.state = LoadState::Ready;
    }

    pub fn set_failed(&mut self, message: String) {
        self.entries.clear();
        self.state = LoadState::Failed(message);
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Reload => {
                self.state = LoadState::Loading;
                Action::Reload(Section::Motivation)
            }
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, art: &'a ArtCache) -> Element<'a, Message> {
        let count_text = format!(
            "{} {}",
            self.entries.len(),
            if self.entries.len() == 1 {
                "quote"
            } else {
                "quotes"
            }
        );

        let header = row![
            text("Motivation")
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
                let icon = lucide_icons::iced::icon_quote()
                    .size(48.0)
                    .color(cs.outline)
                    .into();
                widgets::empty_state(
                    cs,
                    icon,
                    "No quotes yet",
                    "The motivation dataset is empty.",
                )
            }
            LoadState::Ready => {
                let cards: Vec<Element<'a, Message>> = self
                    .entries
                    .iter()
                    .map(|entry| cards::quote_card(cs, art, entry))
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
