use iced::Subscription;

use super::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(_app: &App) -> Subscription<AppEvent> {
    iced::keyboard::listen().map(AppEvent::Keyboard)
}
