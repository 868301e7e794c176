use iced::widget::{column, container, text};
use iced::{Element, Length, alignment};

use super::{bold, nav_button};
use crate::app::{App, AppEvent};
use crate::components::primitive::menu_button::MenuButtonVariant;
use crate::widgets::navigation::ScreenId;

const TITLE_SIZE: f32 = 34.0;
const MENU_SPACING: f32 = 20.0;
const MENU_MAX_WIDTH: f32 = 420.0;
const MENU_PADDING: f32 = 40.0;

pub(super) fn view(app: &App) -> Element<'_, AppEvent> {
    let mut menu = column![text("Home Screen").size(TITLE_SIZE).font(bold())]
        .spacing(MENU_SPACING)
        .align_x(alignment::Horizontal::Center)
        .max_width(MENU_MAX_WIDTH);

    for &screen in ScreenId::Home.destinations() {
        let (label, glyph) = menu_entry(screen);
        menu = menu.push(nav_button(
            label,
            Some(glyph),
            MenuButtonVariant::Accent,
            app.palette,
            screen,
        ));
    }

    container(menu)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(MENU_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Label and leading glyph for a home menu entry.
fn menu_entry(screen: ScreenId) -> (&'static str, &'static str) {
    match screen {
        ScreenId::Upcycle => ("Upcycle", "\u{21bb}"),
        ScreenId::LearnMore => ("Learn More", "\u{2139}"),
        ScreenId::Help => ("Help", "?"),
        ScreenId::Recycle => ("Recycle", "\u{267b}"),
        ScreenId::Welcome | ScreenId::Home => (screen.title(), "\u{2302}"),
    }
}

#[cfg(test)]
mod tests {
    use super::menu_entry;
    use crate::widgets::navigation::ScreenId;

    #[test]
    fn given_home_destinations_when_labelled_then_labels_match_menu() {
        let labels: Vec<&str> = ScreenId::Home
            .destinations()
            .iter()
            .map(|&screen| menu_entry(screen).0)
            .collect();
        assert_eq!(labels, vec!["Upcycle", "Learn More", "Help"]);
    }
}
