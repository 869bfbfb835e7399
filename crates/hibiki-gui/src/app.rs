use iced::widget::{button, column, container, row, text};
use iced::window;
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use hibiki_core::config::{AppConfig, ThemeMode};
use hibiki_core::section::{Section, SectionData};
use hibiki_data::{CatalogClient, SourceBase};

use crate::art_cache::{self, ArtCache, ArtState};
use crate::screen::{anime, fights, manga, motivation, reviews, Action, Page};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme};
use crate::window_state::WindowState;

/// Application state — slim router that delegates to screens.
pub struct Hibiki {
    page: Page,
    nav_open: bool,
    config: AppConfig,
    client: CatalogClient,
    // Theme
    active_mode: ThemeMode,
    scheme: ColorScheme,
    // Screens, one per catalog section
    anime: anime::Anime,
    manga: manga::Manga,
    reviews: reviews::Reviews,
    fights: fights::Fights,
    motivation: motivation::Motivation,
    // Artwork images
    art_cache: ArtCache,
    // App-level chrome
    status_message: String,
    // Window persistence
    window_state: WindowState,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Page),
    ToggleNav,
    SectionLoaded(Section, Result<SectionData, String>),
    ArtLoaded {
        url: String,
        result: Result<std::path::PathBuf, String>,
    },
    AppearanceChanged(ThemeMode),
    WindowEvent(window::Event),
    Anime(anime::Message),
    Manga(manga::Message),
    Reviews(reviews::Message),
    Fights(fights::Message),
    Motivation(motivation::Message),
}

impl Default for Hibiki {
    fn default() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Falling back to default config: {e}");
            AppConfig::default()
        });
        let client = CatalogClient::new(SourceBase::parse(&config.source.base));
        let active_mode = theme::resolve_mode(config.appearance.mode);
        let scheme = theme::scheme(active_mode);

        Self {
            page: Page::default(),
            nav_open: true,
            config,
            client,
            active_mode,
            scheme,
            anime: anime::Anime::new(),
            manga: manga::Manga::new(),
            reviews: reviews::Reviews::new(),
            fights: fights::Fights::new(),
            motivation: motivation::Motivation::new(),
            art_cache: ArtCache::default(),
            status_message: "Loading catalog...".into(),
            window_state: WindowState::load(),
        }
    }
}

impl Hibiki {
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        // Every section fetches independently; completions may arrive
        // in any order and each writes only its own screen's state.
        let loads = Task::batch(
            Section::ALL
                .iter()
                .map(|&section| app.load_section_task(section)),
        );
        (app, loads)
    }

    pub fn title(&self) -> String {
        String::from("Hibiki")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.page = page;
                Task::none()
            }
            Message::ToggleNav => {
                self.nav_open = !self.nav_open;
                Task::none()
            }
            Message::SectionLoaded(section, result) => {
                let art_task = match &result {
                    Ok(data) => {
                        self.status_message =
                            format!("Loaded {} {}", data.len(), section_noun(section));
                        self.request_section_art(data)
                    }
                    Err(e) => {
                        tracing::warn!("{} failed to load: {e}", section.resource());
                        self.status_message = format!("Failed to load {}", section.resource());
                        Task::none()
                    }
                };

                match (section, result) {
                    (Section::Anime, Ok(SectionData::Anime(entries))) => {
                        self.anime.set_entries(entries);
                    }
                    (Section::Manga, Ok(SectionData::Manga(entries))) => {
                        self.manga.set_entries(entries);
                    }
                    (Section::Reviews, Ok(SectionData::Reviews(entries))) => {
                        self.reviews.set_entries(entries);
                    }
                    (Section::Fights, Ok(SectionData::Fights(entries))) => {
                        self.fights.set_entries(entries);
                    }
                    (Section::Motivation, Ok(SectionData::Motivation(entries))) => {
                        self.motivation.set_entries(entries);
                    }
                    (section, Err(message)) => self.set_section_failed(section, message),
                    // fetch_section decodes by section tag, so the data
                    // kind can't mismatch the section.
                    _ => {}
                }

                art_task
            }
            Message::ArtLoaded { url, result } => {
                match result {
                    Ok(path) => {
                        self.art_cache.states.insert(url, ArtState::Loaded(path));
                    }
                    Err(e) => {
                        tracing::debug!("Artwork download failed: {e}");
                        self.art_cache.states.insert(url, ArtState::Failed);
                    }
                }
                Task::none()
            }
            Message::AppearanceChanged(mode) => {
                if mode != self.active_mode {
                    self.active_mode = mode;
                    self.scheme = theme::scheme(mode);
                }
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::Anime(msg) => {
                let action = self.anime.update(msg);
                self.handle_action(action)
            }
            Message::Manga(msg) => {
                let action = self.manga.update(msg);
                self.handle_action(action)
            }
            Message::Reviews(msg) => {
                let action = self.reviews.update(msg);
                self.handle_action(action)
            }
            Message::Fights(msg) => {
                let action = self.fights.update(msg);
                self.handle_action(action)
            }
            Message::Motivation(msg) => {
                let action = self.motivation.update(msg);
                self.handle_action(action)
            }
        }
    }

    /// Interpret an Action returned by a screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::Reload(section) => {
                self.status_message = format!("Reloading {}...", section.resource());
                self.load_section_task(section)
            }
            Action::SetStatus(message) => {
                self.status_message = message;
                Task::none()
            }
        }
    }

    /// Build the async fetch task for one section. The display limit is
    /// applied before the data reaches the screen, preserving source
    /// order.
    fn load_section_task(&self, section: Section) -> Task<Message> {
        let client = self.client.clone();
        let limit = self.config.general.display_limit;
        Task::perform(
            async move {
                client
                    .fetch_section(section)
                    .await
                    .map(|mut data| {
                        data.apply_limit(limit);
                        data
                    })
                    .map_err(|e| e.to_string())
            },
            move |result| Message::SectionLoaded(section, result),
        )
    }

    fn set_section_failed(&mut self, section: Section, message: String) {
        match section {
            Section::Anime => self.anime.set_failed(message),
            Section::Manga => self.manga.set_failed(message),
            Section::Reviews => self.reviews.set_failed(message),
            Section::Fights => self.fights.set_failed(message),
            Section::Motivation => self.motivation.set_failed(message),
        }
    }

    /// Batch-request artwork downloads for every image a section's
    /// entries reference.
    fn request_section_art(&mut self, data: &SectionData) -> Task<Message> {
        let urls = section_art_urls(data);
        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .map(|url| self.request_art(url))
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Request one artwork download if not already requested.
    fn request_art(&mut self, url: String) -> Task<Message> {
        if self.art_cache.states.contains_key(&url) {
            return Task::none();
        }
        // Check disk cache first.
        let path = art_cache::art_path(&url);
        if path.exists() {
            self.art_cache.states.insert(url, ArtState::Loaded(path));
            return Task::none();
        }
        self.art_cache
            .states
            .insert(url.clone(), ArtState::Loading);
        Task::perform(art_cache::fetch_art(url.clone()), move |result| {
            Message::ArtLoaded {
                url: url.clone(),
                result,
            }
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.scheme;

        let page_content: Element<'_, Message> = match self.page {
            Page::Anime => self.anime.view(cs, &self.art_cache).map(Message::Anime),
            Page::Manga => self.manga.view(cs, &self.art_cache).map(Message::Manga),
            Page::Reviews => self.reviews.view(cs).map(Message::Reviews),
            Page::Fights => self.fights.view(cs, &self.art_cache).map(Message::Fights),
            Page::Motivation => self
                .motivation
                .view(cs, &self.art_cache)
                .map(Message::Motivation),
        };

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        let mut content = row![].height(Length::Fill);
        if self.nav_open {
            content = content.push(self.nav_rail(cs));
        }
        content = content.push(page_content);

        column![self.top_bar(cs), content, status_bar].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscriptions(self.config.appearance.mode)
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.scheme)
    }

    fn top_bar<'a>(&self, cs: &ColorScheme) -> Element<'a, Message> {
        let menu_btn = button(
            container(
                lucide_icons::iced::icon_menu()
                    .size(style::TEXT_LG)
                    .color(cs.on_surface),
            )
            .center(Length::Fill),
        )
        .width(Length::Fixed(32.0))
        .height(Length::Fixed(32.0))
        .padding(0)
        .on_press(Message::ToggleNav)
        .style(theme::icon_button(cs));

        let bar = row![
            menu_btn,
            text("Hibiki")
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT),
        ]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center);

        container(bar)
            .style(theme::top_bar(cs))
            .width(Length::Fill)
            .height(Length::Fixed(style::TOP_BAR_HEIGHT))
            .padding([style::SPACE_SM, style::SPACE_LG])
            .into()
    }

    fn nav_rail<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'static>, label: &'static str, page: Page| {
            let active = self.page == page;
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE).center(),
                    text(label)
                        .size(style::NAV_LABEL_SIZE)
                        .line_height(style::LINE_HEIGHT_LOOSE)
                        .center(),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(Message::NavigateTo(page))
            .style(theme::nav_rail_item(active, cs))
        };

        use lucide_icons::iced as icons;

        let rail = column![
            nav_item(icons::icon_tv(), "Anime", Page::Anime),
            nav_item(icons::icon_book_open(), "Manga", Page::Manga),
            nav_item(icons::icon_star(), "Reviews", Page::Reviews),
            nav_item(icons::icon_swords(), "Fights", Page::Fights),
            nav_item(icons::icon_quote(), "Quotes", Page::Motivation),
        ]
        .spacing(style::SPACE_XS)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        container(rail)
            .style(theme::nav_rail_bg(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding(iced::Padding::new(0.0).top(style::SPACE_LG))
            .into()
    }
}

/// Every artwork URL a section's entries reference.
fn section_art_urls(data: &SectionData) -> Vec<String> {
    match data {
        SectionData::Anime(v) => v.iter().filter_map(|a| a.cover_image.clone()).collect(),
        SectionData::Manga(v) => v.iter().filter_map(|m| m.cover_image.clone()).collect(),
        SectionData::Reviews(_) => Vec::new(),
        SectionData::Fights(v) => v.iter().filter_map(|f| f.fight_image.clone()).collect(),
        SectionData::Motivation(v) => {
            v.iter().filter_map(|q| q.character_image.clone()).collect()
        }
    }
}

/// Human noun for status bar messages.
fn section_noun(section: Section) -> &'static str {
    match section {
        Section::Anime => "anime",
        Section::Manga => "manga",
        Section::Reviews => "reviews",
        Section::Fights => "fights",
        Section::Motivation => "quotes",
    }
}
