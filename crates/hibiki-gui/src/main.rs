mod app;
mod art_cache;
mod screen;
mod style;
mod subscription;
mod theme;
mod widgets;
mod window_state;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("hibiki=debug")
        .init();

    let ws = window_state::WindowState::load();

    let mut win = iced::window::Settings {
        size: ws.size(),
        ..Default::default()
    };

    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(app::Hibiki::new, app::Hibiki::update, app::Hibiki::view)
        .title(app::Hibiki::title)
        .subscription(app::Hibiki::subscription)
        .theme(app::Hibiki::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window(win)
        .run()
}
