//! Card builders, one per section kind.
//!
//! Each function is a pure projection from one catalog entry to a
//! self-contained card element. Optional fields render conditionally;
//! only review cards carry an interactive sub-widget (the comment box).

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use hibiki_core::comments::CommentThread;
use hibiki_core::models::{AnimeEntry, FightEntry, MangaEntry, MotivationEntry, ReviewEntry};

use crate::art_cache::ArtCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{comment_box, rounded_artwork};

/// Card width for cover-style cards: cover + horizontal padding.
pub const CARD_WIDTH: f32 = style::COVER_WIDTH + 2.0 * style::SPACE_SM;

/// Card width for scene-style (landscape) cards.
pub const FIGHT_CARD_WIDTH: f32 = style::SCENE_WIDTH + 2.0 * style::SPACE_SM;

/// Title text clipped to a fixed number of lines via container height.
fn clipped_heading<'a, Message: 'a>(
    cs: &ColorScheme,
    content: String,
    lines: f32,
) -> Element<'a, Message> {
    container(
        text(content)
            .size(style::TEXT_SM)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_SM * style::LINE_HEIGHT_NORMAL * lines + 2.0,
    ))
    .clip(true)
    .into()
}

/// Body text clipped to a fixed number of lines.
fn clipped_body<'a, Message: 'a>(
    cs: &ColorScheme,
    content: &'a str,
    lines: f32,
) -> Element<'a, Message> {
    container(
        text(content)
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_XS * style::LINE_HEIGHT_NORMAL * lines + 2.0,
    ))
    .clip(true)
    .into()
}

/// An anime card: cover, title with release year, description, and a
/// trailer link when one exists.
pub fn anime_card<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    art: &'a ArtCache,
    anime: &'a AnimeEntry,
    on_trailer: Option<Message>,
) -> Element<'a, Message> {
    let cover = rounded_artwork(
        cs,
        art,
        anime.cover_image.as_deref(),
        style::COVER_WIDTH,
        style::COVER_HEIGHT,
        style::RADIUS_MD,
    );

    let heading = clipped_heading(
        cs,
        format!("{} ({})", anime.title, anime.release_year),
        2.0,
    );

    let mut content = column![cover, heading, clipped_body(cs, &anime.description, 3.0)]
        .spacing(style::SPACE_XS)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(CARD_WIDTH));

    if let Some(msg) = on_trailer {
        content = content.push(
            button(text("Watch trailer").size(style::TEXT_XS))
                .on_press(msg)
                .padding([style::SPACE_XS, style::SPACE_SM])
                .style(theme::ghost_button(cs)),
        );
    }

    container(content).style(theme::card(cs)).into()
}

/// A manga card: cover, title, author byline, and summary.
pub fn manga_card<'a, Message: 'static>(
    cs: &ColorScheme,
    art: &'a ArtCache,
    manga: &'a MangaEntry,
) -> Element<'a, Message> {
    let cover = rounded_artwork(
        cs,
        art,
        manga.cover_image.as_deref(),
        style::COVER_WIDTH,
        style::COVER_HEIGHT,
        style::RADIUS_MD,
    );

    let byline = text(format!(
        "by {} ({})",
        manga.author, manga.publication_year
    ))
    .size(style::TEXT_XS)
    .color(cs.on_surface_variant)
    .line_height(style::LINE_HEIGHT_LOOSE);

    let content = column![
        cover,
        clipped_heading(cs, manga.title.clone(), 2.0),
        byline,
        clipped_body(cs, &manga.summary, 3.0),
    ]
    .spacing(style::SPACE_XS)
    .padding(style::SPACE_SM)
    .width(Length::Fixed(CARD_WIDTH));

    container(content).style(theme::card(cs)).into()
}

/// A review card: heading, byline, rating, review text, optional
/// spoiler marker, and the ephemeral comment box.
pub fn review_card<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    review: &'a ReviewEntry,
    thread: &'a CommentThread,
    on_comment_input: impl Fn(String) -> Message + 'a,
    on_comment_submit: Message,
) -> Element<'a, Message> {
    // "Anime Title — Review Title" when a review title exists.
    let heading = match review.review_title.as_deref() {
        Some(review_title) => format!("{} \u{2014} {}", review.anime_title, review_title),
        None => review.anime_title.clone(),
    };

    let byline = text(format!(
        "{} \u{00B7} {}",
        review.reviewer_name, review.review_date
    ))
    .size(style::TEXT_XS)
    .color(cs.on_surface_variant)
    .line_height(style::LINE_HEIGHT_LOOSE);

    let rating = text(format!("\u{2605} {:.1}/5", review.rating))
        .size(style::TEXT_XS)
        .color(cs.tertiary)
        .line_height(style::LINE_HEIGHT_LOOSE);

    let mut header = row![
        text(heading)
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_TIGHT)
            .width(Length::Fill),
    ]
    .spacing(style::SPACE_SM)
    .align_y(Alignment::Center);

    if review.spoiler {
        header = header.push(
            container(text("Contains spoilers").size(style::TEXT_XS))
                .style(theme::spoiler_badge(cs))
                .padding([style::SPACE_XXS, style::SPACE_SM]),
        );
    }

    let comment_total = review.comment_count as usize + thread.len();
    let comment_count = text(format!(
        "{} {}",
        comment_total,
        if comment_total == 1 {
            "comment"
        } else {
            "comments"
        }
    ))
    .size(style::TEXT_XS)
    .color(cs.outline)
    .line_height(style::LINE_HEIGHT_LOOSE);

    let content = column![
        header,
        row![byline, rating].spacing(style::SPACE_MD),
        text(review.review_text.as_str())
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL),
        comment_count,
        comment_box(cs, thread, on_comment_input, on_comment_submit),
    ]
    .spacing(style::SPACE_SM)
    .padding(style::SPACE_MD)
    .width(Length::Fixed(style::REVIEW_CARD_WIDTH));

    container(content).style(theme::card(cs)).into()
}

/// A fight card: scene image, anime name, the fighters in billing
/// order, description, and a video link when one exists.
pub fn fight_card<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    art: &'a ArtCache,
    fight: &'a FightEntry,
    on_watch: Option<Message>,
) -> Element<'a, Message> {
    let scene = rounded_artwork(
        cs,
        art,
        fight.fight_image.as_deref(),
        style::SCENE_WIDTH,
        style::SCENE_HEIGHT,
        style::RADIUS_MD,
    );

    let fighters = text(fight.characters_involved.join(", "))
        .size(style::TEXT_XS)
        .color(cs.on_surface_variant)
        .line_height(style::LINE_HEIGHT_LOOSE);

    let mut content = column![
        scene,
        clipped_heading(cs, fight.anime_name.clone(), 1.0),
        fighters,
        clipped_body(cs, &fight.fight_description, 3.0),
    ]
    .spacing(style::SPACE_XS)
    .padding(style::SPACE_SM)
    .width(Length::Fixed(FIGHT_CARD_WIDTH));

    if let Some(msg) = on_watch {
        content = content.push(
            button(text("Watch fight").size(style::TEXT_XS))
                .on_press(msg)
                .padding([style::SPACE_XS, style::SPACE_SM])
                .style(theme::ghost_button(cs)),
        );
    }

    container(content).style(theme::card(cs)).into()
}

/// A quote card: character portrait beside the quote and attribution.
pub fn quote_card<'a, Message: 'static>(
    cs: &ColorScheme,
    art: &'a ArtCache,
    quote: &'a MotivationEntry,
) -> Element<'a, Message> {
    let portrait = rounded_artwork(
        cs,
        art,
        quote.character_image.as_deref(),
        style::PORTRAIT_SIZE,
        style::PORTRAIT_SIZE,
        style::RADIUS_FULL,
    );

    let quote_text = text(format!("\u{201C}{}\u{201D}", quote.quote_text))
        .size(style::TEXT_SM)
        .font(style::FONT_QUOTE)
        .color(cs.on_surface)
        .line_height(style::LINE_HEIGHT_NORMAL);

    let attribution = text(format!(
        "\u{2014} {}, {}",
        quote.character_name, quote.anime_title
    ))
    .size(style::TEXT_XS)
    .color(cs.on_surface_variant)
    .line_height(style::LINE_HEIGHT_LOOSE);

    let content = row![
        portrait,
        column![quote_text, attribution]
            .spacing(style::SPACE_XS)
            .width(Length::Fill),
    ]
    .spacing(style::SPACE_MD)
    .align_y(Alignment::Center)
    .padding(style::SPACE_MD)
    .width(Length::Fixed(style::QUOTE_CARD_WIDTH));

    container(content).style(theme::card(cs)).into()
}
