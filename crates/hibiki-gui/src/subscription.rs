use std::time::Duration;

use iced::Subscription;

use hibiki_core::config::ThemeMode;

use crate::app::Message;
use crate::theme;

/// App-level subscriptions: window geometry events for persistence,
/// plus a slow appearance poll when following the OS theme.
pub fn subscriptions(mode: ThemeMode) -> Subscription<Message> {
    let window_events = iced::window::events().map(|(_id, event)| Message::WindowEvent(event));

    if mode == ThemeMode::System {
        let appearance = iced::time::every(Duration::from_secs(5))
            .map(|_| Message::AppearanceChanged(theme::resolve_mode(ThemeMode::System)));
        Subscription::batch([window_events, appearance])
    } else {
        window_events
    }
}
