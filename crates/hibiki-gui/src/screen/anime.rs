use iced::widget::{button, column, container, row, rule, text, text_input};
use iced::{Alignment, Element, Length};

use hibiki_core::filter;
use hibiki_core::models::AnimeEntry;
use hibiki_core::section::Section;

use crate::art_cache::ArtCache;
use crate::screen::{Action, LoadState};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, cards};

/// Anime screen state: the fetched entries plus the live title filter.
pub struct Anime {
    entries: Vec<AnimeEntry>,
    state: LoadState,
    query: String,
    filtered_indices: Vec<usize>,
}

/// Messages handled by the Anime screen.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ClearQuery,
    OpenTrailer(usize),
    Reload,
}

impl Anime {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            state: LoadState::default(),
            query: String::new(),
            filtered_indices: Vec::new(),
        }
    }

    /// Replace the entry list wholesale. Loading the same section twice
    /// never duplicates cards.
    pub fn set_entries(&mut self, entries: Vec<AnimeEntry>) {
        self.entries = entries;
        self.state = LoadState::Ready;
        self.refilter();
    }

    pub fn set_failed(&mut self, message: String) {
        self.entries.clear();
        self.filtered_indices.clear();
        self.state = LoadState::Failed(message);
    }

    /// Rebuild `filtered_indices` from the current query, replacing the
    /// previous filter result entirely.
    fn refilter(&mut self) {
        self.filtered_indices =
            filter::matching_indices(&self.entries, &self.query, |a| a.title.as_str());
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::QueryChanged(new_query) => {
                self.query = new_query;
                self.refilter();
                Action::None
            }
            Message::ClearQuery => {
                self.query.clear();
                self.refilter();
                Action::None
            }
            Message::OpenTrailer(index) => {
                let Some(url) = self.entries.get(index).and_then(|a| a.trailer_url.as_deref())
                else {
                    return Action::None;
                };
                if let Err(e) = open::that(url) {
                    tracing::warn!("Failed to open trailer: {e}");
                    return Action::SetStatus("Could not open trailer".into());
                }
                Action::None
            }
            Message::Reload => {
                self.state = LoadState::Loading;
                Action::Reload(Section::Anime)
            }
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, art: &'a ArtCache) -> Element<'a, Message> {
        // Composite search bar: icon + borderless input + optional clear.
        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let search_input = text_input("Search anime titles...", &self.query)
            .on_input(Message::QueryChanged)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let mut search_row = row![search_icon, search_input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.query.is_empty() {
            let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
            let clear_btn = button(
                container(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            )
            .on_press(Message::ClearQuery)
            .padding(0)
            .width(Length::Fixed(clear_size))
            .height(Length::Fixed(clear_size))
            .style(theme::icon_button(cs));
            search_row = search_row.push(clear_btn);
        }

        let search_bar = container(
            container(search_row)
                .style(theme::search_bar(cs))
                .padding([style::SPACE_SM, style::SPACE_MD])
                .width(Length::Fill),
        )
        .padding([style::SPACE_SM, style::SPACE_LG]);

        let result_count = format!(
            "{} {}",
            self.filtered_indices.len(),
            if self.filtered_indices.len() == 1 {
                "result"
            } else {
                "results"
            }
        );

        let header = row![
            text(result_count)
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .width(Length::Fill),
            reload_button(cs),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .padding([style::SPACE_XS, style::SPACE_LG]);

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
                let icon = lucide_icons::iced::icon_tv()
                    .size(48.0)
                    .color(cs.outline)
                    .into();
                widgets::empty_state(cs, icon, "No anime yet", "The anime dataset is empty.")
            }
            LoadState::Ready if self.filtered_indices.is_empty() => container(
                text("No matching anime found.")
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .padding(style::SPACE_3XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into(),
            LoadState::Ready => {
                let cards: Vec<Element<'a, Message>> = self
                    .filtered_indices
                    .iter()
                    .map(|&i| {
                        let entry = &self.entries[i];
                        let on_trailer = entry
                            .trailer_url
                            .is_some()
                            .then(|| Message::OpenTrailer(i));
                        cards::anime_card(cs, art, entry, on_trailer)
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

        column![search_bar, header, rule::horizontal(1), body]
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
